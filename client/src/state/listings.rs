//! Listings table state: the fetched collection, search, status filter and
//! the pending delete confirmation.
//!
//! DESIGN
//! ======
//! The collection is fetched once per mount and never mutated except by a
//! successful delete. Search, filter and summary counts are derived on every
//! read so they can never drift from the data.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::error::ApiError;
use crate::net::types::{Choice, Listing, ListingId, Status};

pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete listing. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch listings";

/// Quantity above which stock is considered healthy.
const LOW_STOCK_THRESHOLD: i64 = 10;

/// Status filter of the table toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }

    /// Parse a `<select>` value; anything unknown means `All`.
    pub fn parse(raw: &str) -> Self {
        Status::parse(raw).map_or(Self::All, Self::Only)
    }

    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(Status::ALL.iter().copied().map(Self::Only))
    }

    pub fn matches(self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => listing.status == Some(status),
        }
    }
}

/// Summary strip above the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListingCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub showing: usize,
}

/// Stock badge classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    Low,
    Out,
}

impl StockLevel {
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity > LOW_STOCK_THRESHOLD {
            Self::InStock
        } else if quantity > 0 {
            Self::Low
        } else {
            Self::Out
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::Low => "Low Stock",
            Self::Out => "Out of Stock",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::InStock => "badge badge--ok",
            Self::Low => "badge badge--warn",
            Self::Out => "badge badge--danger",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListingsState {
    pub items: Vec<Listing>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub status_filter: StatusFilter,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<Listing>,
    /// Record whose delete request is in flight.
    pub deleting_id: Option<ListingId>,
}

impl ListingsState {
    /// Rows matching both the search text and the status filter.
    pub fn visible(&self) -> Vec<Listing> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|listing| {
                needle.is_empty()
                    || listing.title.to_lowercase().contains(&needle)
                    || listing.item_sku.to_lowercase().contains(&needle)
            })
            .filter(|listing| self.status_filter.matches(listing))
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> ListingCounts {
        let count_status = |status| {
            self.items
                .iter()
                .filter(|listing| listing.status == Some(status))
                .count()
        };
        ListingCounts {
            total: self.items.len(),
            active: count_status(Status::Active),
            inactive: count_status(Status::Inactive),
            showing: self.visible().len(),
        }
    }

    /// Whether search or filter narrow the table.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.status_filter != StatusFilter::All
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Listing>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.message_or(LOAD_FAILED_MESSAGE)),
        }
    }

    /// Open the confirmation for `listing`. Records without an id cannot be
    /// deleted and are ignored.
    pub fn request_delete(&mut self, listing: Listing) {
        if self.deleting_id.is_none() && listing.product_id.is_some() {
            self.pending_delete = Some(listing);
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.deleting_id.is_none() {
            self.pending_delete = None;
        }
    }

    /// Confirm the pending delete. Returns the id to delete.
    pub fn begin_delete(&mut self) -> Option<ListingId> {
        if self.deleting_id.is_some() {
            return None;
        }
        let id = self.pending_delete.as_ref()?.product_id.clone()?;
        self.deleting_id = Some(id.clone());
        Some(id)
    }

    /// Apply the delete outcome. The record is removed only on success;
    /// returns the alert text on failure.
    pub fn finish_delete(&mut self, id: &ListingId, result: Result<(), ApiError>) -> Option<&'static str> {
        self.deleting_id = None;
        self.pending_delete = None;
        match result {
            Ok(()) => {
                self.items
                    .retain(|listing| listing.product_id.as_ref() != Some(id));
                None
            }
            Err(_) => Some(DELETE_FAILED_MESSAGE),
        }
    }
}
