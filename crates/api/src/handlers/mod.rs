//! Request handlers.
//!
//! Each handler performs exactly one storage call through
//! [`AppState::store`](crate::state::AppState) and maps errors via
//! [`AppError`](crate::error::AppError).

pub mod alerts;
pub mod categories;
pub mod products;
