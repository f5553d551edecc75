//! # codegen-console
//!
//! Leptos + WASM frontend for the database code-generator service.
//!
//! This crate contains the application bootstrap, the static route table
//! with its title hook, the intercepted HTTP client, the REST helpers for
//! the code-generator and user endpoints, the pages, and the message toast
//! layer the interceptor reports through.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point. Mounts the application into the `#app` anchor.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = bootstrap::run() {
        log::error!("bootstrap failed: {e}");
    }
}
