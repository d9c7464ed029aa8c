//! Stock rules shared by the server and the client.
//!
//! The low-stock predicate is evaluated in two places: in SQL by the alert
//! endpoint and in Rust by anything that holds products in memory. Both must
//! agree, so the Rust side lives here and nowhere else.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use validator::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of decimal places stored for money columns (`NUMERIC(10,2)`).
pub const MONEY_SCALE: u32 = 2;

/// Reorder threshold pre-filled for new products.
pub const DEFAULT_MIN_STOCK_LEVEL: i32 = 5;

/// Category assigned to new products unless the caller picks another.
pub const DEFAULT_CATEGORY_ID: i64 = 1;

/// Largest amount a `NUMERIC(10,2)` column holds.
pub const MAX_MONEY: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A product is low on stock when on-hand count is at or below its threshold.
pub fn is_low_stock(stock_quantity: i32, min_stock_level: i32) -> bool {
    stock_quantity <= min_stock_level
}

/// Normalise a money amount to [`MONEY_SCALE`] decimal places.
///
/// Mirrors PostgreSQL storing into `NUMERIC(10,2)`: extra places are rounded
/// half away from zero, missing places are padded.
pub fn to_money(amount: Decimal) -> Decimal {
    let mut amount =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(MONEY_SCALE);
    amount
}

/// Whether `amount` fits a money column once normalised.
pub fn is_storable_money(amount: Decimal) -> bool {
    validate_money_amount(&amount).is_ok()
}

/// Value of the stock held for one product (`price * stock_quantity`).
///
/// `None` on overflow.
pub fn stock_value(price: Decimal, stock_quantity: i32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(stock_quantity))
}

// ---------------------------------------------------------------------------
// StockItem
// ---------------------------------------------------------------------------

/// Anything that carries a price and stock levels.
pub trait StockItem {
    fn price(&self) -> Decimal;
    fn stock_quantity(&self) -> i32;
    fn min_stock_level(&self) -> i32;

    fn is_low_stock(&self) -> bool {
        is_low_stock(self.stock_quantity(), self.min_stock_level())
    }
}

/// Aggregate figures derived from a product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    pub low_stock_count: usize,
    /// Sum of `price * stock_quantity`, at [`MONEY_SCALE`] places.
    /// Saturates at `Decimal::MAX`.
    pub total_value: Decimal,
}

impl InventorySummary {
    pub fn from_items<T: StockItem>(items: &[T]) -> Self {
        let low_stock_count = items.iter().filter(|p| p.is_low_stock()).count();
        let total_value = items.iter().try_fold(Decimal::ZERO, |acc, p| {
            stock_value(p.price(), p.stock_quantity())?.checked_add(acc)
        });

        Self {
            total_products: items.len(),
            low_stock_count,
            total_value: total_value.map(to_money).unwrap_or(Decimal::MAX),
        }
    }

    /// Whether the low-stock banner should be shown.
    pub fn has_low_stock(&self) -> bool {
        self.low_stock_count > 0
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// `validator` custom check: money amounts must be non-negative and fit
/// `NUMERIC(10,2)` after rounding.
pub fn validate_money_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    if to_money(*amount) > MAX_MONEY {
        let mut err = ValidationError::new("max_money");
        err.message = Some(format!("must be at most {MAX_MONEY}").into());
        return Err(err);
    }
    Ok(())
}
