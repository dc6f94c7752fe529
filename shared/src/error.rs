//! Error types and HTTP error responses
//!
//! Every failure in the facade is one of four kinds: a record that could
//! not be located (an upstream miss or an empty derived result), upstream
//! throttling, any other upstream or transport breakage, or locally
//! rejected input. Classification happens once at the origin; callers
//! propagate the kind unchanged.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Identifying parameters attached to failures for log correlation.
///
/// These name the lookup key of the failed call, not its value.
pub mod param {
    /// Lookup keyed by employee id
    pub const ID: &str = "id";
    /// Lookup or deletion keyed by employee name
    pub const NAME: &str = "name";
    /// No single identifying parameter (collection-wide operations)
    pub const NA: &str = "NA";
}

/// A single rejected field of an inbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error with one variant per failure kind
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// A specific record could not be located, either because the upstream
    /// reported a miss or because a derived result set came up empty
    #[error("{message}")]
    NotFound { message: String, param: String },

    /// The upstream signalled throttling; `param` identifies the call that
    /// was rate limited
    #[error("{message}")]
    RateLimited { message: String, param: String },

    /// Any other upstream or transport failure
    #[error("{message}")]
    Upstream { message: String },

    /// Inbound request rejected before reaching the upstream
    #[error("validation failed")]
    Validation { violations: Vec<FieldViolation> },
}

impl AppError {
    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(message: impl Into<String>, param: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            param: param.into(),
        }
    }

    /// Create a rate limited error with the canonical user-facing message
    pub fn rate_limited(param: impl Into<String>) -> Self {
        Self::RateLimited {
            message: "Unusual traffic has been detected, please try again later".to_string(),
            param: param.into(),
        }
    }

    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a validation error from collected field violations
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of an error response
///
/// `param` is present for lookups that failed on a specific key; `fields`
/// only for validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, String>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::NotFound { message, param } | AppError::RateLimited { message, param } => {
                Self {
                    message: message.clone(),
                    param: Some(param.clone()),
                    fields: None,
                }
            }
            AppError::Upstream { message } => Self {
                message: message.clone(),
                param: None,
                fields: None,
            },
            AppError::Validation { violations } => Self {
                message: err.to_string(),
                param: None,
                fields: Some(
                    violations
                        .iter()
                        .map(|v| (v.field.clone(), v.message.clone()))
                        .collect(),
                ),
            },
        }
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        match &self {
            AppError::Upstream { message } => {
                tracing::error!(message = %message, "upstream failure");
            }
            AppError::RateLimited { param, .. } => {
                tracing::warn!(param = %param, "upstream rate limit hit");
            }
            _ => {}
        }

        let status = self.http_status();
        let body = ErrorBody::from(&self);
        (status, Json(body)).into_response()
    }
}
