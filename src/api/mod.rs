//! HTTP surface: an axum [`Router`] over the registry clients.

pub mod employees;
pub mod error;
pub mod products;
pub mod users;
pub mod xml;

use crate::clients::{ProductClient, UserClient};
use crate::model::Employee;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use xml::Xml;

/// Shared handler state. Cloning is cheap: the clients are channel senders.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub users: UserClient,
    pub employees: Arc<Vec<Employee>>,
}

impl AppState {
    pub fn new(products: ProductClient, users: UserClient, employees: Vec<Employee>) -> Self {
        Self {
            products,
            users,
            employees: Arc::new(employees),
        }
    }
}

/// Builds the full application router with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(products::router())
        .merge(users::router())
        .merge(employees::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
