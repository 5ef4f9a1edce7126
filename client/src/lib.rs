//! # client
//!
//! Leptos + WASM frontend for the two-zone polygon editor.
//!
//! This crate contains the page, components and editor state, and bridges
//! DOM pointer/wheel events into the `canvas` crate's `EditorCore`. Browser
//! glue is compiled only with the `hydrate` feature; the `ssr` build renders
//! the same component tree on the server.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
