//! Integration tests for the product and category repositories.
//!
//! Exercises the repository layer against a real PostgreSQL database. Run
//! with `DATABASE_URL` set and `cargo test -- --ignored`.

use inventory_db::models::product::ProductInput;
use inventory_db::repositories::{CategoryRepo, ProductRepo};
use inventory_db::{InventoryStore, PgStore};
use rust_decimal_macros::dec;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, sku: &str, stock_quantity: i32, min_stock_level: i32) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        sku: sku.to_string(),
        description: Some(format!("{name} description")),
        category_id: Some(1),
        price: dec!(10),
        cost: dec!(5),
        stock_quantity,
        min_stock_level,
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_seeded_categories(pool: PgPool) {
    inventory_db::health_check(&pool).await.unwrap();

    let general = CategoryRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(general.name, "General");

    let all = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 4);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_then_get_returns_same_fields(pool: PgPool) {
    let input = new_product("Widget", "W1", 3, 5);
    let created = ProductRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);

    let fetched = ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.to_input(), input);
    assert_eq!(fetched.price.to_string(), "10.00");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Widget", "W1", 3, 5))
        .await
        .unwrap();

    let replacement = ProductInput {
        name: "Gadget".to_string(),
        sku: "G1".to_string(),
        description: None,
        category_id: None,
        price: dec!(19.99),
        cost: dec!(7.50),
        stock_quantity: 10,
        min_stock_level: 2,
    };
    let updated = ProductRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.to_input(), replacement);
    assert!(updated.updated_at >= created.updated_at);

    let fetched = ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.to_input(), replacement);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ProductRepo::update(&pool, 999_999, &new_product("X", "X1", 1, 1))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_then_get_is_none(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Widget", "W1", 3, 5))
        .await
        .unwrap();

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_is_newest_first_with_category_name(pool: PgPool) {
    let first = ProductRepo::create(&pool, &new_product("A", "A1", 1, 1))
        .await
        .unwrap();
    let mut uncategorised = new_product("B", "B1", 1, 1);
    uncategorised.category_id = None;
    let second = ProductRepo::create(&pool, &uncategorised).await.unwrap();

    let list = ProductRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = list.iter().map(|p| p.product.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(list[0].category_name, None);
    assert_eq!(list[1].category_name.as_deref(), Some("General"));
}

// ---------------------------------------------------------------------------
// Low stock
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_low_stock_matches_predicate(pool: PgPool) {
    let store = PgStore::new(pool);
    store
        .create_product(&new_product("Below", "S1", 2, 5))
        .await
        .unwrap();
    store
        .create_product(&new_product("Equal", "S2", 5, 5))
        .await
        .unwrap();
    store
        .create_product(&new_product("Above", "S3", 6, 5))
        .await
        .unwrap();

    let all = store.list_products().await.unwrap();
    let mut expected: Vec<i64> = all
        .iter()
        .filter(|p| {
            inventory_core::inventory::is_low_stock(
                p.product.stock_quantity,
                p.product.min_stock_level,
            )
        })
        .map(|p| p.product.id)
        .collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));

    let low: Vec<i64> = store
        .list_low_stock()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(low, expected);
    assert_eq!(low.len(), 2);
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_sku_violates_unique_constraint(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("A", "DUP", 1, 1))
        .await
        .unwrap();
    let err = ProductRepo::create(&pool, &new_product("B", "DUP", 1, 1))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_products_sku"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_category_violates_foreign_key(pool: PgPool) {
    let mut input = new_product("A", "A1", 1, 1);
    input.category_id = Some(999_999);
    let err = ProductRepo::create(&pool, &input).await.unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}
