pub mod error;
pub mod inventory;
pub mod types;
