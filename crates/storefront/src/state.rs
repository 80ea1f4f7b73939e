//! Application state shared across workflows.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StoreConfig;
use crate::storage::{JsonFileStore, KeyValueStore, StorageError};

/// Application state container.
///
/// Owns the shared collaborators (configuration, catalog client, local
/// store) and hands them to workflow services by injection - no ambient
/// global lookup. Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StoreConfig,
    catalog: CatalogClient,
    store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Create application state with the file-backed store from the
    /// configured data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the data directory cannot be created.
    pub fn new(config: StoreConfig) -> Result<Self, StorageError> {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&config.data_dir)?);
        Ok(Self::with_store(config, store))
    }

    /// Create application state over an explicit store (tests use an
    /// in-memory one).
    #[must_use]
    pub fn with_store(config: StoreConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let catalog = CatalogClient::new(config.api_base_url.as_str());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                store,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a handle to the local key-value store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner.store)
    }
}
