pub mod alerts;
pub mod categories;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      health check
///
/// /products                    list, create
/// /products/{id}               get, update (full replacement), delete
///
/// /alerts/low-stock            products at or below reorder threshold
///
/// /categories                  list (read-only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/products", products::router())
        .nest("/alerts", alerts::router())
        .nest("/categories", categories::router())
}
