//! Service layer
//!
//! # Services
//!
//! - [`EmployeeService`] - aggregation over the upstream employee gateway

pub mod employee;

pub use employee::EmployeeService;
