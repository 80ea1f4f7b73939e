//! Product admin workflow.
//!
//! CRUD orchestration over the catalog, optimistically syncing an in-memory
//! product list. Each call is one network round trip following the state
//! machine `idle → loading → {success | error}`: `loading` drives a
//! UI-facing boolean, `error` holds the last failure message, and
//! re-invoking the operation is the only retry mechanism.
//!
//! Overlapping calls for the same workflow are prevented structurally here
//! (`&mut self`), matching the original convention of disabling UI
//! affordances while loading.

use tracing::info;

use tienda_core::ProductId;

use crate::catalog::{CatalogApi, CatalogError};
use crate::models::{Product, ProductInput};

/// Workflow state over a catalog client.
///
/// Generic over the [`CatalogApi`] seam so tests can inject an in-memory
/// fake in place of the HTTP client.
pub struct ProductWorkflow<C: CatalogApi> {
    catalog: C,
    products: Vec<Product>,
    categories: Vec<String>,
    loading: bool,
    last_error: Option<String>,
}

impl<C: CatalogApi> ProductWorkflow<C> {
    /// Create an idle workflow with an empty product list.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            products: Vec::new(),
            categories: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    /// Replace the in-memory list with the server's current listing.
    ///
    /// On failure the list is emptied - there is no stale-data fallback.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from the underlying fetch; the same message
    /// is retained in [`Self::last_error`].
    pub async fn refresh(&mut self) -> Result<(), CatalogError> {
        self.begin();
        let result = self.catalog.fetch_products().await;
        match result {
            Ok(products) => {
                self.products = products;
                self.finish(Ok(()))
            }
            Err(err) => {
                self.products.clear();
                self.finish(Err(err))
            }
        }
    }

    /// Replace the in-memory category list with the server's.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from the underlying fetch.
    pub async fn refresh_categories(&mut self) -> Result<(), CatalogError> {
        self.begin();
        let result = self.catalog.fetch_categories().await;
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.finish(Ok(()))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Create a product and append it to the in-memory list.
    ///
    /// On failure local state is untouched - no retry, no rollback needed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from the underlying call.
    pub async fn add_product(&mut self, input: ProductInput) -> Result<Product, CatalogError> {
        self.begin();
        let result = self.catalog.create_product(&input).await;
        match result {
            Ok(created) => {
                self.products.push(created.clone());
                info!(product_id = %created.id, "product created");
                self.finish(Ok(created))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Update a product and replace it by ID in the in-memory list.
    ///
    /// The server's response is taken as the authoritative new state.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from the underlying call.
    pub async fn update_product(
        &mut self,
        id: &ProductId,
        input: ProductInput,
    ) -> Result<Product, CatalogError> {
        self.begin();
        let result = self.catalog.update_product(id, &input).await;
        match result {
            Ok(updated) => {
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == *id) {
                    *slot = updated.clone();
                }
                info!(product_id = %updated.id, "product updated");
                self.finish(Ok(updated))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Delete a product and remove it by ID from the in-memory list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] from the underlying call.
    pub async fn delete_product(&mut self, id: &ProductId) -> Result<(), CatalogError> {
        self.begin();
        let result = self.catalog.delete_product(id).await;
        match result {
            Ok(()) => {
                self.products.retain(|p| p.id != *id);
                info!(product_id = %id, "product deleted");
                self.finish(Ok(()))
            }
            Err(err) => self.finish(Err(err)),
        }
    }

    /// The in-memory product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The in-memory category list.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether a call is in flight (the UI-disabling flag).
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent failure, cleared on the next call.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn begin(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    fn finish<T>(&mut self, result: Result<T, CatalogError>) -> Result<T, CatalogError> {
        self.loading = false;
        if let Err(err) = &result {
            self.last_error = Some(err.to_string());
        }
        result
    }
}
