//! Roster Gateway - HTTP client for the upstream employee API
//!
//! Sole point of contact with the upstream: every call the facade makes
//! goes through here, and every failure leaves classified as exactly one
//! [`shared::AppError`] kind.

pub mod config;
pub mod http;

pub use config::GatewayConfig;
pub use http::{EmployeeGateway, UpstreamClient};

// Re-export shared types for convenience
pub use shared::error::{AppError, AppResult};
