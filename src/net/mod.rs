//! Networking modules for the code-generator REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the single intercepted client, `interceptor` maps every
//! response or failure before callers see it, `api` holds the endpoint
//! helpers, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod interceptor;
pub mod types;
