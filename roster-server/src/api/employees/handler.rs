//! Employee API Handlers
//!
//! Thin layer over [`EmployeeService`](crate::services::EmployeeService):
//! extract, validate, delegate, wrap in Json. Error mapping to HTTP
//! status codes lives on [`shared::AppError`].

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Employee, EmployeeCreate};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_all().await?;
    Ok(Json(employees))
}

/// List employees whose name contains the fragment (case-insensitive)
pub async fn search(
    State(state): State<ServerState>,
    Path(fragment): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.search_by_name(&fragment).await?;
    Ok(Json(employees))
}

/// Highest salary across all employees
pub async fn highest_salary(State(state): State<ServerState>) -> AppResult<Json<i32>> {
    let salary = state.employees.highest_salary().await?;
    Ok(Json(salary))
}

/// Names of the ten best paid employees, highest first
pub async fn top_earners(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let names = state.employees.top_ten_earning_names().await?;
    Ok(Json(names))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    payload.validate()?;

    let employee = state.employees.create(&payload).await?;
    Ok(Json(employee))
}

/// Delete an employee by id; responds with the deleted employee's name
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    let name = state.employees.delete_by_id(&id).await?;
    Ok(Json(name))
}
