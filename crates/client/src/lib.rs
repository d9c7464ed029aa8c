//! Client side of the inventory service.
//!
//! - [`api`]: typed HTTP client for every `/api` endpoint
//! - [`form`]: the product form state machine
//! - [`dashboard`]: the controller behind the dashboard view
//! - [`config`]: environment configuration for the binary

pub mod api;
pub mod config;
pub mod dashboard;
pub mod form;

pub use api::{ClientError, InventoryApi, InventoryBackend};
pub use dashboard::Dashboard;
pub use form::{FormState, ProductDraft};
