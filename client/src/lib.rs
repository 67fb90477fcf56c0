//! # listing-ui
//!
//! Leptos + WASM frontend for the product listing admin.
//!
//! This crate contains the route pages (creation wizard, listings table,
//! detail and edit views), reusable components, page state models and the
//! REST client for the `/listing_api` backend. The `ssr` build renders the
//! shell inside `listing-server`; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
