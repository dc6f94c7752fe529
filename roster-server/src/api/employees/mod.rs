//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search/{fragment}", get(handler::search))
        .route("/highest-salary", get(handler::highest_salary))
        .route("/top-earners", get(handler::top_earners))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
