//! The storage handle injected into the HTTP layer.
//!
//! [`InventoryStore`] is constructed once at startup and passed down through
//! application state. [`PgStore`] is the production backend; [`MemoryStore`]
//! keeps the same semantics in process for tests and local runs.

use async_trait::async_trait;
use inventory_core::types::DbId;

use crate::models::category::Category;
use crate::models::product::{Product, ProductInput, ProductListing};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Error type shared by all storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx (connectivity, constraint violations, ...).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness rule was violated (e.g. duplicate SKU).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A referential rule was violated (e.g. unknown category).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Product and category persistence.
///
/// Each method maps to exactly one storage statement; there are no
/// multi-step transactions and concurrent updates are last-write-wins.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// All products with their category name, ordered by id descending.
    async fn list_products(&self) -> StoreResult<Vec<ProductListing>>;

    async fn find_product(&self, id: DbId) -> StoreResult<Option<Product>>;

    async fn create_product(&self, input: &ProductInput) -> StoreResult<Product>;

    /// Replace all fields; `None` if the product does not exist.
    async fn update_product(&self, id: DbId, input: &ProductInput)
        -> StoreResult<Option<Product>>;

    /// `true` if a row was removed.
    async fn delete_product(&self, id: DbId) -> StoreResult<bool>;

    /// Products with `stock_quantity <= min_stock_level`, ordered by id descending.
    async fn list_low_stock(&self) -> StoreResult<Vec<Product>>;

    /// All categories ordered by name.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
