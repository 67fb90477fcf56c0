//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome and the listing building blocks shared
//! by the pages. They receive page state through props and report user
//! intent through callbacks; none of them performs network calls.

pub mod delete_dialog;
pub mod export_menu;
pub mod image_dropzone;
pub mod listing_fields;
pub mod listing_summary;
pub mod navbar;
pub mod status_badge;
