//! Employee aggregation service
//!
//! Composes the gateway's four primitives into the facade operations.
//! Search, maximum, and top-earner views are derived in memory from one
//! full list fetch per request; nothing is cached between requests and
//! nothing is retried, so every failure is terminal for the request that
//! triggered it.

use std::sync::Arc;

use roster_gateway::EmployeeGateway;
use shared::error::{AppError, AppResult, param};
use shared::models::{Employee, EmployeeCreate};

/// How many names the top earner view returns at most.
const TOP_EARNER_COUNT: usize = 10;

/// Aggregation service over the upstream gateway
#[derive(Clone)]
pub struct EmployeeService {
    gateway: Arc<dyn EmployeeGateway>,
}

impl EmployeeService {
    pub fn new(gateway: Arc<dyn EmployeeGateway>) -> Self {
        Self { gateway }
    }

    /// Full employee list, upstream order preserved
    pub async fn get_all(&self) -> AppResult<Vec<Employee>> {
        self.gateway.list_all().await
    }

    /// Single employee; a gateway miss propagates unchanged
    pub async fn get_by_id(&self, id: &str) -> AppResult<Employee> {
        self.gateway.get_by_id(id).await
    }

    /// Employees whose name contains `fragment`, case-insensitively, in
    /// upstream order. An empty result is a not-found failure carrying the
    /// fragment.
    pub async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Employee>> {
        let needle = fragment.to_lowercase();
        let matches: Vec<Employee> = self
            .gateway
            .list_all()
            .await?
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            tracing::warn!(fragment, "no employees matched search");
            return Err(AppError::not_found(
                format!("No employees found with name: {fragment}"),
                param::NAME,
            ));
        }

        tracing::debug!(fragment, count = matches.len(), "search matched");
        Ok(matches)
    }

    /// Highest salary across all employees; an empty list has no maximum
    /// and is a not-found failure
    pub async fn highest_salary(&self) -> AppResult<i32> {
        self.gateway
            .list_all()
            .await?
            .iter()
            .map(|e| e.salary)
            .max()
            .ok_or_else(|| {
                tracing::warn!("employee list is empty, no maximum salary");
                AppError::not_found("No employees found or no salaries available", param::NA)
            })
    }

    /// Names of the ten best paid employees, highest salary first. The
    /// sort is stable, so employees with equal salaries keep their
    /// upstream relative order. An empty list yields an empty result, not
    /// a failure.
    pub async fn top_ten_earning_names(&self) -> AppResult<Vec<String>> {
        let mut employees = self.gateway.list_all().await?;
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));

        Ok(employees
            .into_iter()
            .take(TOP_EARNER_COUNT)
            .map(|e| e.name)
            .collect())
    }

    /// Create an employee upstream; input is validated at the HTTP
    /// boundary before this is called
    pub async fn create(&self, input: &EmployeeCreate) -> AppResult<Employee> {
        self.gateway.create(input).await
    }

    /// Delete an employee by id and return the deleted employee's name.
    ///
    /// The upstream delete endpoint is name-keyed, so this resolves the
    /// current name with a fresh fetch first. When that fetch fails the
    /// delete is never attempted.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<String> {
        let employee = self.gateway.get_by_id(id).await?;
        self.gateway.delete_by_name(&employee.name).await?;

        tracing::info!(id, name = %employee.name, "employee deleted");
        Ok(employee.name)
    }
}
