//! Data models
//!
//! Shared between the facade server, the upstream gateway, and the
//! upstream mock. The wire format is dictated by the upstream employee
//! API; see [`employee`] for the field name mapping.

pub mod employee;

// Re-exports
pub use employee::*;
