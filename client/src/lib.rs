//! # eco-client
//!
//! Leptos + WASM frontend for the Eco Engineering site: a marketing landing
//! page and an admin panel for the project and equipment lists.
//!
//! This crate contains pages, components, application state and browser
//! helpers. Build with the `csr` feature for the browser; the default build
//! compiles natively so state logic can be unit tested.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting eco-client");
    leptos::mount::mount_to_body(app::App);
}
