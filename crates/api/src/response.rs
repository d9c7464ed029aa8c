//! Shared response body types for API handlers.
//!
//! Resource endpoints return the row (or array of rows) as the top-level
//! JSON value. Endpoints that have no row to return use [`MessageResponse`].

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` body used by the health check and deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
