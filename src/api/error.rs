//! HTTP status mapping for registry errors.
//!
//! Error bodies are plain text. Validation failures carry their message verbatim;
//! everything unexpected collapses to `500 Internal server error.` after being logged.

use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const INTERNAL: &str = "Internal server error.";

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::ValidationError(_) => StatusCode::NOT_ACCEPTABLE,
            ProductError::AlreadyExists(_) => StatusCode::CONFLICT,
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::ActorCommunicationError(msg) => {
                tracing::error!("Product registry unavailable: {}", msg);
                return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL).into_response();
            }
        };
        (status, self.to_string()).into_response()
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::ValidationError(_) => StatusCode::NOT_ACCEPTABLE,
            UserError::AlreadyExists(_) => StatusCode::CONFLICT,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Io(msg) => {
                tracing::error!("Avatar upload failed: {}", msg);
                return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL).into_response();
            }
            UserError::ActorCommunicationError(msg) => {
                tracing::error!("User registry unavailable: {}", msg);
                return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL).into_response();
            }
        };
        (status, self.to_string()).into_response()
    }
}
