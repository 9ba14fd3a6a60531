//! # patternboard
//!
//! Leptos single-page dashboard demonstrating eight introductory UI
//! patterns, one interactive card each: local state, lifecycle cleanup,
//! composition via parameters, conditional rendering, keyed lists, form
//! handling, ambient shared state, and persisted state with memoized
//! derived values.
//!
//! State machines are plain Rust in [`state`] and natively unit-tested;
//! browser concerns (storage, timers, the document) are isolated in
//! [`util`] behind the `csr` feature.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: installs the panic hook, wires `log` to the console,
/// and mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
