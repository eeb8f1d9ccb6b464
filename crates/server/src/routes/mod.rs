//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness check
//!
//! # Customers
//! POST   /customers             - Create a customer (201)
//! GET    /customers             - List all customers
//! GET    /customers?name=       - List customers by exact name
//! GET    /customers?email=      - List customers by exact email
//! GET    /customers/{id}        - Get a customer by id
//! PUT    /customers/{id}        - Partially update a customer
//! DELETE /customers/{id}        - Delete a customer
//! ```

pub mod customers;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::index).post(customers::create))
        .route(
            "/{id}",
            get(customers::show)
                .put(customers::update)
                .delete(customers::remove),
        )
}

/// Assemble the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/customers", customer_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to
/// check: the store lives in-process.
async fn health() -> &'static str {
    "ok"
}
