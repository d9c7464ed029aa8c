use async_trait::async_trait;
use inventory_core::types::DbId;

use crate::models::category::Category;
use crate::models::product::{Product, ProductInput, ProductListing};
use crate::repositories::{CategoryRepo, ProductRepo};
use crate::store::{InventoryStore, StoreResult};
use crate::DbPool;

/// PostgreSQL-backed store. Each call checks a connection out of the pool
/// for a single statement and returns it when the statement completes.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn list_products(&self) -> StoreResult<Vec<ProductListing>> {
        Ok(ProductRepo::list(&self.pool).await?)
    }

    async fn find_product(&self, id: DbId) -> StoreResult<Option<Product>> {
        Ok(ProductRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_product(&self, input: &ProductInput) -> StoreResult<Product> {
        Ok(ProductRepo::create(&self.pool, input).await?)
    }

    async fn update_product(
        &self,
        id: DbId,
        input: &ProductInput,
    ) -> StoreResult<Option<Product>> {
        Ok(ProductRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_product(&self, id: DbId) -> StoreResult<bool> {
        Ok(ProductRepo::delete(&self.pool, id).await?)
    }

    async fn list_low_stock(&self) -> StoreResult<Vec<Product>> {
        Ok(ProductRepo::list_low_stock(&self.pool).await?)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
