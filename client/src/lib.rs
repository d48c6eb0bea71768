//! # client
//!
//! Leptos + WASM frontend router for the store and inventory admin
//! application.
//!
//! This crate owns the static route table, the credential store the admin
//! login flow writes to, and the navigation guard that gates the admin
//! area. Screens themselves are rendered as placeholders keyed by view.

pub mod app;
pub mod components;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
