//! Utility module
//!
//! - [`AppError`] / [`AppResult`] - re-exported from `shared::error`
//! - [`logger`] - logging setup

pub mod logger;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult};
