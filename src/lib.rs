//! Browser client for an activity sign-up service.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the REST backend, `state` holds catalog/filter/notice
//! state as plain values with pure transitions, `components` render the
//! individual controls, and `pages` own screen-level orchestration. Browser
//! dependencies sit behind the `csr` feature so the core stays testable
//! with a native `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point for the browser build.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
