//! Controller behind the inventory dashboard.
//!
//! Holds the product list, a loading flag and the form state. Every
//! successful mutation is followed by a full re-fetch; the list is never
//! patched locally.

use inventory_core::inventory::{InventorySummary, StockItem};
use inventory_core::types::DbId;
use inventory_db::models::product::{Product, ProductListing};

use crate::api::InventoryBackend;
use crate::form::{FormState, ProductDraft};

pub struct Dashboard<B> {
    backend: B,
    products: Vec<ProductListing>,
    loading: bool,
    form: FormState,
}

impl<B: InventoryBackend> Dashboard<B> {
    /// A dashboard that has not loaded yet.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            products: Vec::new(),
            loading: true,
            form: FormState::Idle,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn products(&self) -> &[ProductListing] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Editable draft of the open form, if any.
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        self.form.draft_mut()
    }

    /// Fetch the product list. The loading flag is cleared even on failure,
    /// in which case the previous list is kept.
    pub async fn load(&mut self) {
        match self.backend.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Products loaded");
                self.products = products;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
            }
        }
        self.loading = false;
    }

    /// Open the form with a blank draft.
    pub fn open_create(&mut self) {
        self.form = FormState::Creating(ProductDraft::default());
    }

    /// Open the form pre-filled from an existing product.
    pub fn edit(&mut self, product: &Product) {
        self.form = FormState::Editing {
            id: product.id,
            draft: ProductDraft::from(product),
        };
    }

    pub fn cancel(&mut self) {
        self.form = FormState::Idle;
    }

    /// Save the open form. Returns `true` when the server accepted it.
    ///
    /// On success the form closes and the list is re-fetched. On failure the
    /// error is logged and the form stays open with the draft untouched.
    pub async fn submit(&mut self) -> bool {
        let result = match &self.form {
            FormState::Idle => return false,
            FormState::Creating(draft) => self.backend.create_product(&draft.to_input()).await,
            FormState::Editing { id, draft } => {
                self.backend.update_product(*id, &draft.to_input()).await
            }
        };

        match result {
            Ok(product) => {
                tracing::info!(product_id = product.id, "Product saved");
                self.form = FormState::Idle;
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save product");
                false
            }
        }
    }

    /// Delete a product after `confirm` agrees. Returns `true` when the
    /// product was deleted.
    pub async fn delete(&mut self, id: DbId, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }

        match self.backend.delete_product(id).await {
            Ok(()) => {
                tracing::info!(product_id = id, "Product deleted");
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, product_id = id, "Failed to delete product");
                false
            }
        }
    }

    /// Totals over the currently loaded list.
    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_items(&self.products)
    }

    /// Loaded products that should carry a low-stock badge.
    pub fn low_stock(&self) -> impl Iterator<Item = &ProductListing> {
        self.products.iter().filter(|p| p.is_low_stock())
    }
}
