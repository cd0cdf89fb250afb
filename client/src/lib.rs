//! # client
//!
//! Leptos + WASM shell for the Veritas academic-integrity portal.
//!
//! This crate contains the routed pages, shared components and reactive
//! state mirrors. Session logic, the route guard and the simulated auth calls
//! live in the `veritas` crate; this crate wires them to the DOM, the router
//! and browser `localStorage`.

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
    log::info!("veritas client starting");
    leptos::mount::mount_to_body(app::App);
}
