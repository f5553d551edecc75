//! Browser helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! pages stay compilable and testable in native builds.

pub mod confirm;
