//! Handlers for stock alerts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/alerts/low-stock
///
/// Products with `stock_quantity <= min_stock_level`, newest first.
pub async fn low_stock(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.store.list_low_stock().await?;

    tracing::debug!(count = products.len(), "Low-stock alert evaluated");

    Ok(Json(products))
}
