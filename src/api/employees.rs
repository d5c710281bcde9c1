//! `/employees`: the read-only staff directory.

use super::AppState;
use crate::model::Employee;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/employees", get(list_employees).options(options))
}

/// GET /employees
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees.as_ref().clone())
}

/// OPTIONS /employees
async fn options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET, OPTIONS")])
}
