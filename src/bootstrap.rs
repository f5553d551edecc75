//! One-time application startup.
//!
//! Installs logging and the panic hook, resolves the configuration, applies
//! the initial document title, and mounts `App` into the configured anchor.
//! Only `run` touches the browser; the rest is usable from native tests.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

#[cfg(feature = "csr")]
use crate::config::AppConfig;

/// Startup failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// No `window.document` is available.
    #[error("no browser document available")]
    NoDocument,

    /// The mount anchor is missing from the page.
    #[error("mount anchor #{0} not found")]
    MissingAnchor(String),

    /// The mount anchor exists but is not an HTML element.
    #[error("mount anchor #{0} is not an HTML element")]
    NotAnElement(String),
}

/// Log level for the console logger.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Install the panic hook and the console logger.
pub fn init_logging() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        // A second init only fails because a logger is already installed.
        let _ = console_log::init_with_level(log_level());
    }
}

/// Run the full startup sequence with the build-time configuration.
///
/// # Errors
///
/// Returns `BootstrapError` when the document or the mount anchor is missing.
#[cfg(feature = "csr")]
pub fn run() -> Result<(), BootstrapError> {
    init_logging();
    mount(AppConfig::from_build_env())
}

/// Mount `App` into the element with id `config.mount_id`.
///
/// # Errors
///
/// Returns `BootstrapError` when the document or the mount anchor is missing.
#[cfg(feature = "csr")]
pub fn mount(config: AppConfig) -> Result<(), BootstrapError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::router::{BrowserDocument, DocumentTitle};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::NoDocument)?;
    let root = document
        .get_element_by_id(&config.mount_id)
        .ok_or_else(|| BootstrapError::MissingAnchor(config.mount_id.clone()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BootstrapError::NotAnElement(config.mount_id.clone()))?;

    BrowserDocument.set_title(&config.app_title);
    log::info!("mounting into #{} (api base {})", config.mount_id, config.api_base);

    leptos::mount::mount_to(root, move || view! { <App config=config/> }).forget();
    Ok(())
}
