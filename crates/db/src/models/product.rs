//! Product models and DTOs.
//!
//! Covers the `products` row, the list view joined with its category name,
//! and the caller-supplied input shared by create and full-replacement update.

use inventory_core::inventory::{self, StockItem};
use inventory_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock_quantity: i32,
    pub min_stock_level: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// The caller-editable fields of this row.
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            sku: self.sku.clone(),
            description: self.description.clone(),
            category_id: self.category_id,
            price: self.price,
            cost: self.cost,
            stock_quantity: self.stock_quantity,
            min_stock_level: self.min_stock_level,
        }
    }
}

impl StockItem for Product {
    fn price(&self) -> Decimal {
        self.price
    }

    fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }

    fn min_stock_level(&self) -> i32 {
        self.min_stock_level
    }
}

/// A product enriched with its category name, as returned by the list view.
///
/// `category_name` is `None` when the product has no category.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ProductListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub product: Product,
    pub category_name: Option<String>,
}

impl StockItem for ProductListing {
    fn price(&self) -> Decimal {
        self.product.price
    }

    fn stock_quantity(&self) -> i32 {
        self.product.stock_quantity
    }

    fn min_stock_level(&self) -> i32 {
        self.product.min_stock_level
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a product or replacing all of its fields.
///
/// Updates are full replacements: every field is written, there is no
/// partial-patch form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub sku: String,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    #[validate(custom(function = "inventory::validate_money_amount"))]
    pub price: Decimal,
    #[validate(custom(function = "inventory::validate_money_amount"))]
    pub cost: Decimal,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub stock_quantity: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub min_stock_level: i32,
}

impl ProductInput {
    /// Round money fields to the stored scale so in-memory rows compare
    /// equal to what PostgreSQL would return.
    pub fn normalized(&self) -> Self {
        Self {
            price: inventory::to_money(self.price),
            cost: inventory::to_money(self.cost),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use inventory_core::error::CoreError;
    use rust_decimal_macros::dec;

    fn widget() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            sku: "W1".to_string(),
            description: None,
            category_id: Some(1),
            price: dec!(10),
            cost: dec!(5),
            stock_quantity: 3,
            min_stock_level: 5,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(widget().validate().is_ok());
    }

    #[test]
    fn empty_name_and_sku_rejected() {
        let input = ProductInput {
            name: String::new(),
            sku: String::new(),
            ..widget()
        };
        let err = CoreError::from(input.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("name") && msg.contains("sku"));
    }

    #[test]
    fn negative_numbers_rejected() {
        let input = ProductInput {
            price: dec!(-1),
            stock_quantity: -2,
            ..widget()
        };
        let err = CoreError::from(input.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("price") && msg.contains("stock_quantity"));
    }

    #[test]
    fn money_above_column_limit_rejected() {
        let input = ProductInput {
            price: dec!(70000000000000000000000000000),
            cost: dec!(100000000),
            ..widget()
        };
        let err = CoreError::from(input.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("price") && msg.contains("cost"));

        let input = ProductInput {
            price: dec!(99999999.99),
            ..widget()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn deserializes_numbers_and_strings_for_money() {
        let json = serde_json::json!({
            "name": "Widget",
            "sku": "W1",
            "description": null,
            "category_id": 1,
            "price": 10,
            "cost": "5.25",
            "stock_quantity": 3,
            "min_stock_level": 5
        });
        let input: ProductInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.price, dec!(10));
        assert_eq!(input.cost, dec!(5.25));
    }

    #[test]
    fn normalized_pads_money_to_two_places() {
        let input = widget().normalized();
        assert_eq!(input.price.to_string(), "10.00");
        assert_eq!(input.cost.to_string(), "5.00");
    }
}
