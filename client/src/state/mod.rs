//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap these plain structs in `RwSignal`s. Keeping transitions out of
//! the components lets the rules run under `cargo test` without a browser.

pub mod edit;
pub mod form;
pub mod listings;
pub mod ui;
pub mod wizard;
