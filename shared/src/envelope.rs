//! Upstream response envelope
//!
//! Every upstream employee API response wraps its payload in a
//! `{status, data}` object. Only `data` carries meaning for callers: a
//! missing or null `data` is a failed call no matter what `status` says.

use serde::{Deserialize, Serialize};

/// Status line the upstream attaches to successful responses.
pub const STATUS_HANDLED: &str = "Successfully processed request.";

/// Response wrapper used by the upstream employee API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Human-readable status line; informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Actual payload (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Create a success envelope with data
    pub fn success(data: T) -> Self {
        Self {
            status: Some(STATUS_HANDLED.to_string()),
            data: Some(data),
        }
    }

    /// Create a failure envelope: a status line and no data
    pub fn failure(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    #[test]
    fn test_envelope_success() {
        let envelope = Envelope::success(vec![1, 2, 3]);
        assert_eq!(envelope.status.as_deref(), Some(STATUS_HANDLED));
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_envelope_carries_employee_payload() {
        let json = r#"{
            "status": "Successfully processed request.",
            "data": {
                "id": "5d6bbc36-10e9-4734-b5bd-9a1c1a8f0a2d",
                "employee_name": "Shivani Singh",
                "employee_salary": 50000,
                "employee_age": 30,
                "employee_title": "Engineer",
                "employee_email": "shivani.singh@company.com"
            }
        }"#;

        let envelope: Envelope<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status.as_deref(), Some(STATUS_HANDLED));

        let employee = envelope.data.unwrap();
        assert_eq!(employee.name, "Shivani Singh");
        assert_eq!(employee.salary, 50000);
    }

    #[test]
    fn test_envelope_null_data_deserializes_to_none() {
        let envelope: Envelope<i32> =
            serde_json::from_str(r#"{"status":"ok","data":null}"#).unwrap();
        assert!(envelope.data.is_none());

        let envelope: Envelope<i32> = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_ignores_unknown_fields() {
        let envelope: Envelope<i32> =
            serde_json::from_str(r#"{"status":"ok","data":7,"error":"ignored"}"#).unwrap();
        assert_eq!(envelope.data, Some(7));
    }

    #[test]
    fn test_envelope_failure_serializes_without_data() {
        let envelope = Envelope::<bool>::failure("Employee not found");
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(!json.contains("data"));
        assert!(json.contains("Employee not found"));
    }
}
