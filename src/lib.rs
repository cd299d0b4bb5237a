//! Ringline - marketing landing page
//!
//! A server-rendered, hydrated landing page whose client-side behavior layer
//! (visibility-gated animation sequences, stat counters, demo widgets) is
//! implemented in Rust and compiled to WebAssembly with Leptos.

#![recursion_limit = "2048"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
