//! # client
//!
//! Leptos + WASM frontend for the Trial & Error problem tracker.
//!
//! This crate contains the page, form components, application state, and the
//! REST client for the `problems` and `factors` tables. It shares record
//! types with the server through the `records` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated JS loader after SSR.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
