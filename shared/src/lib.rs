//! Shared types for the roster workspace
//!
//! Common types used across the facade crates: the employee wire model,
//! the upstream response envelope, and the unified error taxonomy.

pub mod envelope;
pub mod error;
pub mod models;

// Re-exports
pub use envelope::Envelope;
pub use error::{AppError, AppResult, ErrorBody, FieldViolation};
pub use models::{Employee, EmployeeCreate, EmployeeDelete};
