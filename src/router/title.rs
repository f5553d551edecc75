//! Pre-navigation title hook.
//!
//! Runs once per navigation: when the target route declares a title it is
//! copied into `document.title`, otherwise the current title is left alone.
//! Navigation always continues; there is no guard denial or redirect.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::RouteRecord;

/// Outcome of a pre-navigation hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Continue,
}

/// Write access to the document title.
pub trait DocumentTitle {
    fn set_title(&mut self, title: &str);
}

/// The browser `document`. A no-op outside the `csr` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl DocumentTitle for BrowserDocument {
    fn set_title(&mut self, title: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                doc.set_title(title);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = title;
        }
    }
}

/// The global pre-navigation hook.
pub fn before_each<D: DocumentTitle>(to: &RouteRecord, doc: &mut D) -> Navigation {
    if let Some(title) = to.meta.title {
        doc.set_title(title);
    }
    Navigation::Continue
}

/// Resolve `path` against the route table and run the hook. Unknown paths
/// fall through to the router's not-found view without touching the title.
pub fn on_navigate<D: DocumentTitle>(path: &str, doc: &mut D) -> Navigation {
    match super::find(path) {
        Some(route) => {
            log::debug!("navigate to {} ({})", route.path, route.name);
            before_each(route, doc)
        }
        None => {
            log::debug!("navigate to unknown path {path}");
            Navigation::Continue
        }
    }
}

/// Install the hook as an effect on the current location.
///
/// Must be called from a component rendered inside `<Router>`.
pub fn install_title_hook() {
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        let _ = on_navigate(&path, &mut BrowserDocument);
    });
}
