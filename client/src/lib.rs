//! # busgo-client
//!
//! Leptos + WASM frontend for the BusGo ticketing site.
//!
//! This crate contains pages, components, page-scoped view state, and the
//! HTTP layer that talks to the ticketing backend through the host's `/api`
//! proxy. The host binary links it with the `ssr` feature; the browser bundle
//! is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
