//! Edit view state: load one record, edit the draft, replace it in full.
//!
//! DESIGN
//! ======
//! A validation rejection keeps both the generic summary and the per-field
//! messages so the form can annotate each offending input. Any other
//! failure is a single message.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use super::form::ListingForm;
use crate::net::error::{ApiError, FieldErrors};
use crate::net::types::{Listing, ListingId};

pub const VALIDATION_SUMMARY: &str = "Please fill out all the required fields (like: Item SKU, HSN Code, etc.).";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update listing";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch listing details";

#[derive(Clone, Debug, Default)]
pub struct EditState {
    /// `None` until the record has loaded.
    pub form: Option<ListingForm>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub saving: bool,
    pub save_error: Option<String>,
    pub field_errors: FieldErrors,
}

impl EditState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn finish_load(&mut self, result: Result<Listing, ApiError>) {
        self.loading = false;
        match result {
            Ok(listing) => self.form = Some(ListingForm::from_listing(&listing)),
            Err(err) => self.load_error = Some(err.message_or(LOAD_FAILED_MESSAGE)),
        }
    }

    /// Start saving. Returns the payload to `PUT`.
    pub fn begin_save(&mut self) -> Option<Listing> {
        if self.saving {
            return None;
        }
        let payload = self.form.as_ref()?.to_payload();
        self.saving = true;
        self.save_error = None;
        self.field_errors.clear();
        Some(payload)
    }

    /// Apply the save outcome. Returns the id to navigate to on success.
    pub fn finish_save(&mut self, id: &ListingId, result: Result<(), ApiError>) -> Option<ListingId> {
        self.saving = false;
        match result {
            Ok(()) => Some(id.clone()),
            Err(ApiError::Validation(fields)) => {
                self.save_error = Some(VALIDATION_SUMMARY.to_owned());
                self.field_errors = fields;
                None
            }
            Err(ApiError::Transport(message)) => {
                self.save_error = Some(message);
                None
            }
            Err(err) => {
                self.save_error = Some(err.message_or(UPDATE_FAILED_MESSAGE));
                None
            }
        }
    }
}
