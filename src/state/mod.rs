//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`messages`, `codegen`, `table_info`, `user_form`) so pages
//! depend on small focused models. Plain structs hold the logic; pages wrap
//! them in signals.

pub mod codegen;
pub mod messages;
pub mod table_info;
pub mod user_form;
