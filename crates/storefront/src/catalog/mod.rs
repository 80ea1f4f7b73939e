//! Catalog API client.
//!
//! # Architecture
//!
//! - The remote mock REST API is the source of truth for products - no local
//!   sync, direct calls per operation
//! - Both observed remote schema variants normalize into the internal
//!   [`Product`] shape (`title` → `name`, string price → decimal)
//! - Non-2xx responses are treated uniformly as failures; the body is not
//!   parsed on error beyond the status code
//! - No timeouts and no retry: re-invoking the operation is the only retry
//!   mechanism, always caller-triggered
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_storefront::catalog::{CatalogApi, CatalogClient};
//!
//! let catalog = CatalogClient::new("https://example.mockapi.io/api/v1");
//! let products = catalog.fetch_products().await?;
//! let product = catalog.fetch_product(&"1".into()).await?;
//! ```

mod conversions;
pub mod types;

use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use tienda_core::ProductId;

use crate::models::{Product, ProductInput};

use conversions::{convert_product, distinct_categories};
use types::RemoteProduct;

/// Errors that can occur when calling the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connection, DNS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("catalog API returned status {0}")]
    Status(StatusCode),

    /// Response body could not be parsed.
    #[error("catalog response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product does not exist.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// Operations the catalog exposes.
///
/// The trait is the seam between the workflows and the network: production
/// code uses [`CatalogClient`], tests inject an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// Fetch the full product listing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a non-2xx status.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch one product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the product does not exist.
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, CatalogError>;

    /// Fetch the distinct category labels.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a non-2xx status.
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Create a product; the API assigns the ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a non-2xx status.
    async fn create_product(&self, input: &ProductInput) -> Result<Product, CatalogError>;

    /// Replace the product stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a non-2xx status.
    async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, CatalogError>;

    /// Delete the product stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a non-2xx status.
    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogError>;
}

/// Client for the remote mock catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against `base_url` (e.g., `https://.../api/v1`).
    ///
    /// No request timeout is configured: an in-flight fetch cannot be
    /// aborted, and a response arriving after the caller moved on is simply
    /// discarded.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Check the response status; the body is not parsed on error.
    fn check_status(response: &reqwest::Response, path: &str) -> Result<(), CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        tracing::error!(status = %status, path, "catalog API returned non-success status");
        Err(CatalogError::Status(status))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CatalogError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        Self::check_status(&response, path)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CatalogApi for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let remote: Vec<RemoteProduct> = self.get_json("products").await?;
        Ok(remote.into_iter().map(convert_product).collect())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let path = format!("products/{id}");
        match self.get_json::<RemoteProduct>(&path).await {
            Ok(remote) => Ok(convert_product(remote)),
            Err(CatalogError::Status(StatusCode::NOT_FOUND)) => {
                Err(CatalogError::NotFound(id.clone()))
            }
            Err(err) => Err(err),
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        // Not every deployment of the mock API has a categories endpoint;
        // fall back to scanning the full listing.
        match self.get_json::<Vec<String>>("products/categories").await {
            Ok(categories) => Ok(categories),
            Err(err) => {
                debug!(error = %err, "categories endpoint unsupported, scanning products");
                let products = self.fetch_products().await?;
                Ok(distinct_categories(&products))
            }
        }
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, CatalogError> {
        let response = self
            .inner
            .client
            .post(self.url("products"))
            .json(input)
            .send()
            .await?;
        Self::check_status(&response, "products")?;
        let body = response.text().await?;
        let remote: RemoteProduct = serde_json::from_str(&body)?;
        Ok(convert_product(remote))
    }

    async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, CatalogError> {
        let path = format!("products/{id}");
        let response = self
            .inner
            .client
            .put(self.url(&path))
            .json(input)
            .send()
            .await?;
        Self::check_status(&response, &path)?;
        let body = response.text().await?;
        let remote: RemoteProduct = serde_json::from_str(&body)?;
        Ok(convert_product(remote))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogError> {
        let path = format!("products/{id}");
        let response = self.inner.client.delete(self.url(&path)).send().await?;
        Self::check_status(&response, &path)?;
        // A successful delete needs no body
        Ok(())
    }
}

impl CatalogClient {
    /// Products in `category`, filtered locally over the full listing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the listing fetch fails.
    pub async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = self.fetch_products().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }
}
