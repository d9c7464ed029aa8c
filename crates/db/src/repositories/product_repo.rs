//! Repository for the `products` table.
//!
//! Every function issues exactly one parameter-bound statement. Updates
//! replace all caller-editable columns; there is no partial patch.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{Product, ProductInput, ProductListing};

/// Column list for `products` queries.
const COLUMNS: &str = "\
    id, name, sku, description, category_id, price, cost, \
    stock_quantity, min_stock_level, created_at, updated_at";

/// Same columns qualified with the `p` alias, for joined queries.
const PREFIXED_COLUMNS: &str = "\
    p.id, p.name, p.sku, p.description, p.category_id, p.price, p.cost, \
    p.stock_quantity, p.min_stock_level, p.created_at, p.updated_at";

/// Provides data access for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products with their category name, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductListing>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS}, c.name AS category_name \
             FROM products p \
             LEFT JOIN categories c ON p.category_id = c.id \
             ORDER BY p.id DESC"
        );
        sqlx::query_as::<_, ProductListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, dto: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                 (name, sku, description, category_id, price, cost, stock_quantity, min_stock_level) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&dto.name)
            .bind(&dto.sku)
            .bind(&dto.description)
            .bind(dto.category_id)
            .bind(dto.price)
            .bind(dto.cost)
            .bind(dto.stock_quantity)
            .bind(dto.min_stock_level)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable field of a product.
    ///
    /// Returns `None` if no product with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = $2, \
                 sku = $3, \
                 description = $4, \
                 category_id = $5, \
                 price = $6, \
                 cost = $7, \
                 stock_quantity = $8, \
                 min_stock_level = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.sku)
            .bind(&dto.description)
            .bind(dto.category_id)
            .bind(dto.price)
            .bind(dto.cost)
            .bind(dto.stock_quantity)
            .bind(dto.min_stock_level)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List products at or below their reorder threshold, newest first.
    ///
    /// Must agree with [`inventory_core::inventory::is_low_stock`].
    pub async fn list_low_stock(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE stock_quantity <= min_stock_level \
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }
}
