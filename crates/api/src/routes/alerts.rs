use axum::routing::get;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Alert routes mounted at `/alerts`.
///
/// ```text
/// GET /low-stock  -> low_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/low-stock", get(alerts::low_stock))
}
