#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use inventory_core::types::DbId;
use inventory_db::models::category::Category;
use inventory_db::models::product::{Product, ProductInput, ProductListing};
use inventory_db::store::StoreResult;
use inventory_db::{InventoryStore, MemoryStore, StoreError};
use tower::ServiceExt;

use inventory_api::config::{ServerConfig, StoreKind};
use inventory_api::router::build_app_router;
use inventory_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreKind::Memory,
    }
}

/// A fresh in-memory store seeded with the default categories.
pub fn memory_store() -> Arc<dyn InventoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build the full application router with all middleware layers over the
/// given store, exactly as `main.rs` does.
pub fn build_test_app(store: Arc<dyn InventoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The scenario product used across tests.
pub fn widget_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Widget",
        "sku": "W1",
        "description": "A widget",
        "category_id": 1,
        "price": 10,
        "cost": 5,
        "stock_quantity": 3,
        "min_stock_level": 5
    })
}

/// Create a product through the API and return its id.
pub async fn create(store: &Arc<dyn InventoryStore>, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(store.clone()), "/api/products", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every call fails as if the database were unreachable.
pub struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl InventoryStore for FailingStore {
    async fn list_products(&self) -> StoreResult<Vec<ProductListing>> {
        unavailable()
    }

    async fn find_product(&self, _id: DbId) -> StoreResult<Option<Product>> {
        unavailable()
    }

    async fn create_product(&self, _input: &ProductInput) -> StoreResult<Product> {
        unavailable()
    }

    async fn update_product(
        &self,
        _id: DbId,
        _input: &ProductInput,
    ) -> StoreResult<Option<Product>> {
        unavailable()
    }

    async fn delete_product(&self, _id: DbId) -> StoreResult<bool> {
        unavailable()
    }

    async fn list_low_stock(&self) -> StoreResult<Vec<Product>> {
        unavailable()
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        unavailable()
    }

    async fn health_check(&self) -> StoreResult<()> {
        unavailable()
    }
}
