//! REST API client for the inventory HTTP endpoints.
//!
//! Wraps every `/api` route using [`reqwest`]. Request and response bodies
//! reuse the row and DTO types from `inventory_db`, so the client and server
//! cannot drift apart on field names or money encoding.

use std::time::Duration;

use async_trait::async_trait;
use inventory_core::types::DbId;
use inventory_db::models::category::Category;
use inventory_db::models::product::{Product, ProductInput, ProductListing};
use reqwest::StatusCode;
use serde::Deserialize;

/// Errors from the inventory REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// An id-addressed call hit a product that does not exist.
    #[error("Product {id} not found")]
    NotFound { id: DbId },

    /// The server returned a non-2xx status code.
    #[error("Inventory API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// `{ "message": ... }` bodies returned by health and delete.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The operations the dashboard needs from the server.
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    async fn list_products(&self) -> Result<Vec<ProductListing>, ClientError>;

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ClientError>;

    async fn update_product(&self, id: DbId, input: &ProductInput)
        -> Result<Product, ClientError>;

    async fn delete_product(&self, id: DbId) -> Result<(), ClientError>;
}

/// HTTP client for a single inventory server.
pub struct InventoryApi {
    client: reqwest::Client,
    api_base: String,
}

impl InventoryApi {
    /// Create a new API client.
    ///
    /// * `api_base` - Base URL including the `/api` prefix, e.g.
    ///   `http://localhost:5000/api`.
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_base))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<MessageResponse, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /products/{id}`.
    pub async fn get_product(&self, id: DbId) -> Result<Product, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        Self::parse_product_response(id, response).await
    }

    /// `GET /alerts/low-stock`.
    pub async fn low_stock(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.client.get(self.url("/alerts/low-stock")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /categories`.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self.client.get(self.url("/categories")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`ClientError::Api`] carrying the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Like [`Self::parse_response`], but a 404 becomes [`ClientError::NotFound`].
    async fn parse_product_response<T: serde::de::DeserializeOwned>(
        id: DbId,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id });
        }
        Self::parse_response(response).await
    }
}

#[async_trait]
impl InventoryBackend for InventoryApi {
    async fn list_products(&self) -> Result<Vec<ProductListing>, ClientError> {
        let response = self.client.get(self.url("/products")).send().await?;
        Self::parse_response(response).await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ClientError> {
        let response = self
            .client
            .post(self.url("/products"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_product(
        &self,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Product, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_product_response(id, response).await
    }

    async fn delete_product(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        let _: MessageResponse = Self::parse_product_response(id, response).await?;
        Ok(())
    }
}
