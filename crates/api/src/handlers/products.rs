//! Handlers for product CRUD.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::product::ProductInput;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// GET /api/products
///
/// List all products with their category name, newest first.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.store.list_products().await?;

    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = state
        .store
        .find_product(product_id)
        .await?
        .ok_or_else(|| not_found(product_id))?;

    Ok(Json(product))
}

/// POST /api/products
///
/// Create a product from all eight caller-supplied fields.
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProductInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let product = state.store.create_product(&input).await?;

    tracing::info!(
        product_id = product.id,
        sku = %product.sku,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
///
/// Replace every field of a product. There is no partial update.
pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<ProductInput>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let product = state
        .store
        .update_product(product_id, &input)
        .await?
        .ok_or_else(|| not_found(product_id))?;

    tracing::info!(
        product_id,
        stock_quantity = product.stock_quantity,
        "Product updated",
    );

    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete_product(product_id).await?;

    if !deleted {
        return Err(not_found(product_id));
    }

    tracing::info!(product_id, "Product deleted");

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
