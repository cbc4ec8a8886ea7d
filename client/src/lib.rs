//! # client
//!
//! Leptos frontend for the BK English learning app.
//!
//! This crate owns the routed pages, the persistent layout shell and the
//! client-side session observer that keeps header and sidebar in step with
//! the identity provider. Navigation decisions themselves come from the
//! shared `access` crate so the browser and the edge guard never disagree.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
