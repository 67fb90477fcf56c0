//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submitting,
//! navigating) and delegates rendering details to `components`. Pages share
//! no listing data; every mount re-fetches what it shows.


pub mod create;
pub mod detail;
pub mod edit;
pub mod listings;

use crate::net::types::ListingId;

/// Detail route for a listing.
pub fn listing_path(id: &ListingId) -> String {
    format!("/listings/{id}")
}

/// Edit route for a listing.
pub fn listing_edit_path(id: &ListingId) -> String {
    format!("/listings/{id}/edit")
}

/// Listing id from a raw `:id` route parameter; blank means none.
pub(crate) fn route_listing_id(raw: Option<String>) -> Option<ListingId> {
    raw.map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .map(ListingId)
}
