//! # widget
//!
//! Leptos + WASM agent chat window: a conversation view paired with a canvas
//! side panel that renders HTML fragments attached to messages.
//!
//! This crate contains the root component, the input transports (URL query
//! and parent-frame messaging), per-instance state, and presentation
//! components. Browser-only glue is gated behind the `csr` feature so the
//! state and decoding logic can be tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
