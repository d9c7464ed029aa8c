//! Product form state.

use inventory_core::inventory::{DEFAULT_CATEGORY_ID, DEFAULT_MIN_STOCK_LEVEL};
use inventory_core::types::DbId;
use inventory_db::models::product::{Product, ProductInput};
use rust_decimal::Decimal;

/// Editable field values behind the product form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    /// Empty string means "no description".
    pub description: String,
    pub category_id: Option<DbId>,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock_quantity: i32,
    pub min_stock_level: i32,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            description: String::new(),
            category_id: Some(DEFAULT_CATEGORY_ID),
            price: Decimal::ZERO,
            cost: Decimal::ZERO,
            stock_quantity: 0,
            min_stock_level: DEFAULT_MIN_STOCK_LEVEL,
        }
    }
}

impl ProductDraft {
    /// Request body for create or update.
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            sku: self.sku.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            category_id: self.category_id,
            price: self.price,
            cost: self.cost,
            stock_quantity: self.stock_quantity,
            min_stock_level: self.min_stock_level,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            description: product.description.clone().unwrap_or_default(),
            category_id: product.category_id,
            price: product.price,
            cost: product.cost,
            stock_quantity: product.stock_quantity,
            min_stock_level: product.min_stock_level,
        }
    }
}

/// Whether the form is closed, creating a new product, or editing one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Creating(ProductDraft),
    Editing {
        id: DbId,
        draft: ProductDraft,
    },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Idle)
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match self {
            FormState::Idle => None,
            FormState::Creating(draft) | FormState::Editing { draft, .. } => Some(draft),
        }
    }
}
