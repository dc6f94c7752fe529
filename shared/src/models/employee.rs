//! Employee Model
//!
//! The upstream employee API prefixes every payload field with
//! `employee_` except the id; the serde renames below keep that wire
//! format while the Rust side stays on short names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, FieldViolation};

/// Youngest working age the employee API accepts.
pub const MIN_AGE: i32 = 18;
/// Oldest working age the employee API accepts.
pub const MAX_AGE: i32 = 80;

/// Employee record as stored upstream
///
/// The id and email are upstream-assigned at creation time; clients never
/// send them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i32,
    #[serde(rename = "employee_age")]
    pub age: i32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email")]
    pub email: String,
}

/// Create employee payload
///
/// Same shape on both sides of the facade: what a client posts to the
/// facade is forwarded verbatim to the upstream create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub salary: i32,
    pub title: String,
    pub age: i32,
}

impl EmployeeCreate {
    /// Check every field, collecting all violations instead of stopping at
    /// the first one.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "name must not be empty"));
        }
        if self.salary <= 0 {
            violations.push(FieldViolation::new("salary", "salary must be positive"));
        }
        if self.title.trim().is_empty() {
            violations.push(FieldViolation::new("title", "title must not be empty"));
        }
        if self.age < MIN_AGE || self.age > MAX_AGE {
            violations.push(FieldViolation::new(
                "age",
                format!("age must be between {MIN_AGE} and {MAX_AGE}"),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(violations))
        }
    }
}

/// Delete employee payload
///
/// The upstream delete endpoint is keyed by name, not id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDelete {
    pub name: String,
}
