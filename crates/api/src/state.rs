use std::sync::Arc;

use inventory_db::InventoryStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage handle, constructed once in `main` and injected here.
    pub store: Arc<dyn InventoryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
