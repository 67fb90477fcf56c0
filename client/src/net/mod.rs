//! Networking modules for the listing REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failed responses and
//! `types` defines the wire schema shared by every page.

pub mod api;
pub mod error;
pub mod types;
