//! Mock upstream employee API
//!
//! The four endpoints of the upstream contract, every payload wrapped in
//! the `{status, data}` envelope. Deletion is name-keyed and reports
//! `data: false` on a miss; lookups by unknown id answer 404.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use shared::envelope::Envelope;
use shared::models::{Employee, EmployeeCreate, EmployeeDelete};

use crate::store::EmployeeStore;
use crate::throttle::Throttle;

/// Shared state of the mock server
#[derive(Clone)]
pub struct MockState {
    pub store: EmployeeStore,
    pub throttle: Arc<Throttle>,
}

/// Router serving the upstream employee contract
pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/v1/employee", get(list).post(create).delete(remove))
        .route("/api/v1/employee/{id}", get(get_by_id))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            throttle_requests,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer 429 for every request that falls into a throttle window
async fn throttle_requests(
    State(state): State<MockState>,
    request: Request,
    next: Next,
) -> Response {
    if state.throttle.should_throttle() {
        tracing::warn!(path = %request.uri().path(), "throttling request");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(Envelope::<bool>::failure("Too many requests")),
        )
            .into_response();
    }

    next.run(request).await
}

async fn list(State(state): State<MockState>) -> Json<Envelope<Vec<Employee>>> {
    let employees = state.store.list().await;
    Json(Envelope::success(employees))
}

async fn get_by_id(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Employee>>, (StatusCode, Json<Envelope<Employee>>)> {
    match state.store.get(&id).await {
        Some(employee) => Ok(Json(Envelope::success(employee))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(Envelope::failure("Employee not found")),
        )),
    }
}

async fn create(
    State(state): State<MockState>,
    Json(input): Json<EmployeeCreate>,
) -> Result<Json<Envelope<Employee>>, (StatusCode, Json<Envelope<Employee>>)> {
    if input.validate().is_err() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Invalid employee input")),
        ));
    }

    let employee = state.store.insert(&input).await;
    tracing::info!(id = %employee.id, name = %employee.name, "employee created");
    Ok(Json(Envelope::success(employee)))
}

async fn remove(
    State(state): State<MockState>,
    Json(input): Json<EmployeeDelete>,
) -> Json<Envelope<bool>> {
    let removed = state.store.remove_by_name(&input.name).await;
    tracing::info!(name = %input.name, removed, "delete request handled");
    Json(Envelope::success(removed))
}
