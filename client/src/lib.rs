//! # dashboard
//!
//! Leptos + WASM frontend for the personal-info dashboard: one browser UI
//! over the household's backend services (persons and their records,
//! homework, wordbook, AI weekly, service catalog, files, finance,
//! efficiency, docs, remote wake, skills).
//!
//! This crate contains the app shell, pages, components, the request cache,
//! locally owned state stores, and the per-service REST layer. The host crate
//! links it with the `ssr` feature; the browser bundle uses `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod query;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
