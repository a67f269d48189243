//! # blog-client
//!
//! Leptos + WASM single-page client for a remote blog publishing API.
//! Visitors browse posts, registered users sign in, and authenticated
//! authors create, update, and delete posts with attached images. All
//! persistence and authorization decisions live on the server; this
//! crate handles presentation, the locally stored session token, and
//! client-side routing.
//!
//! Browser-only code (HTTP, `localStorage`, timers) is gated behind the
//! `csr` feature so the state layer compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
