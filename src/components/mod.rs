//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome (navigation, message toasts) and
//! read shared state from Leptos context providers.

pub mod message_host;
pub mod nav_bar;
