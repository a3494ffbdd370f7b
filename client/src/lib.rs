//! # client
//!
//! Leptos frontend for the portfolio site: marketing pages, project detail
//! pages with interactive visuals, and the floating AI chat widget.
//!
//! The crate builds three ways: `ssr` for server rendering inside the axum
//! binary, `hydrate` for the WASM bundle that takes over in the browser, and
//! featureless native for the unit tests (state machines, markdown, wire
//! types, and content data all test without a browser).

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
