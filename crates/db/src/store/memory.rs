use std::collections::BTreeMap;

use async_trait::async_trait;
use inventory_core::inventory::{self, StockItem};
use inventory_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::category::Category;
use crate::models::product::{Product, ProductInput, ProductListing};
use crate::store::{InventoryStore, StoreError, StoreResult};

/// Category names seeded at startup, in id order. Matches the seed rows of
/// the categories migration so `category_id = 1` is `General` in both backends.
pub const SEED_CATEGORIES: &[&str] = &["General", "Electronics", "Office Supplies", "Hardware"];

#[derive(Default)]
struct Tables {
    products: BTreeMap<DbId, Product>,
    categories: BTreeMap<DbId, Category>,
    /// Last issued product id. Ids are never reused, like a BIGSERIAL.
    last_product_id: DbId,
}

impl Tables {
    fn check_sku_free(&self, sku: &str, except: Option<DbId>) -> StoreResult<()> {
        let taken = self
            .products
            .values()
            .any(|p| p.sku == sku && Some(p.id) != except);
        if taken {
            tracing::warn!(sku, "Duplicate SKU rejected");
            return Err(StoreError::Conflict(format!(
                "Duplicate value violates unique constraint: uq_products_sku ({sku})"
            )));
        }
        Ok(())
    }

    fn check_category(&self, category_id: Option<DbId>) -> StoreResult<()> {
        match category_id {
            Some(id) if !self.categories.contains_key(&id) => {
                tracing::warn!(category_id = id, "Unknown category rejected");
                Err(StoreError::Constraint(format!(
                    "category {id} does not exist"
                )))
            }
            _ => Ok(()),
        }
    }

    /// `NUMERIC(10,2)` overflow, as PostgreSQL would raise it.
    fn check_money(input: &ProductInput) -> StoreResult<()> {
        for (field, amount) in [("price", input.price), ("cost", input.cost)] {
            if !inventory::is_storable_money(amount) {
                tracing::warn!(field, %amount, "Money value out of range rejected");
                return Err(StoreError::Constraint(format!(
                    "{field} {amount} does not fit NUMERIC(10,2)"
                )));
            }
        }
        Ok(())
    }

    fn listing(&self, product: &Product) -> ProductListing {
        let category_name = product
            .category_id
            .and_then(|id| self.categories.get(&id))
            .map(|c| c.name.clone());
        ProductListing {
            product: product.clone(),
            category_name,
        }
    }
}

/// In-process store with the same observable behaviour as [`super::PgStore`].
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a store seeded with [`SEED_CATEGORIES`] and no products.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let categories = SEED_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(name, id)| {
                let category = Category {
                    id,
                    name: (*name).to_string(),
                    created_at: now,
                    updated_at: now,
                };
                (id, category)
            })
            .collect();

        Self {
            tables: RwLock::new(Tables {
                categories,
                ..Tables::default()
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_products(&self) -> StoreResult<Vec<ProductListing>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .rev()
            .map(|p| tables.listing(p))
            .collect())
    }

    async fn find_product(&self, id: DbId) -> StoreResult<Option<Product>> {
        Ok(self.tables.read().await.products.get(&id).cloned())
    }

    async fn create_product(&self, input: &ProductInput) -> StoreResult<Product> {
        let mut tables = self.tables.write().await;
        tables.check_sku_free(&input.sku, None)?;
        tables.check_category(input.category_id)?;
        Tables::check_money(input)?;

        let input = input.normalized();
        tables.last_product_id += 1;
        let now = chrono::Utc::now();
        let product = Product {
            id: tables.last_product_id,
            name: input.name,
            sku: input.sku,
            description: input.description,
            category_id: input.category_id,
            price: input.price,
            cost: input.cost,
            stock_quantity: input.stock_quantity,
            min_stock_level: input.min_stock_level,
            created_at: now,
            updated_at: now,
        };
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: DbId,
        input: &ProductInput,
    ) -> StoreResult<Option<Product>> {
        let mut tables = self.tables.write().await;
        if !tables.products.contains_key(&id) {
            return Ok(None);
        }
        tables.check_sku_free(&input.sku, Some(id))?;
        tables.check_category(input.category_id)?;
        Tables::check_money(input)?;

        let input = input.normalized();
        let Some(product) = tables.products.get_mut(&id) else {
            return Ok(None);
        };
        product.name = input.name;
        product.sku = input.sku;
        product.description = input.description;
        product.category_id = input.category_id;
        product.price = input.price;
        product.cost = input.cost;
        product.stock_quantity = input.stock_quantity;
        product.min_stock_level = input.min_stock_level;
        product.updated_at = chrono::Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete_product(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.products.remove(&id).is_some())
    }

    async fn list_low_stock(&self) -> StoreResult<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .rev()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.tables.read().await.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
