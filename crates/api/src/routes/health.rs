use axum::{routing::get, Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// Liveness message; does not touch storage.
pub const HEALTH_MESSAGE: &str = "Inventory API is running!";

/// GET /api/health
async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse::new(HEALTH_MESSAGE))
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
