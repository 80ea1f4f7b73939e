//! Integration tests for Mi Tienda Online.
//!
//! The suites under `tests/` drive the storefront workflows end to end:
//! session, cart, checkout, order history, and catalog administration. They
//! run against an in-memory key-value store and an in-memory catalog fake,
//! so no network or filesystem access is needed.
//!
//! ```bash
//! cargo test -p tienda-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test-support code panics on setup failure instead of propagating errors.
#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tienda_core::ProductId;
use tienda_storefront::catalog::{CatalogApi, CatalogError};
use tienda_storefront::models::{Product, ProductInput};
use tienda_storefront::storage::{KeyValueStore, MemoryStore};

/// Fresh in-memory store, shared across the service instances of one test.
#[must_use]
pub fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

/// Product fixture with an empty description and image.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal literal.
#[must_use]
pub fn product(id: &str, name: &str, price: &str, category: &str) -> Product {
    Product {
        id: id.into(),
        name: name.to_owned(),
        price: price.parse().unwrap(),
        description: String::new(),
        category: category.to_owned(),
        image: String::new(),
        rating: None,
    }
}

/// The three-product listing used by most suites.
#[must_use]
pub fn sample_catalog() -> FakeCatalog {
    FakeCatalog::seeded(vec![
        product("1", "Laptop Pro", "19.99", "electrónica"),
        product("2", "Taza de café", "5.00", "hogar"),
        product("3", "Camiseta", "12.50", "ropa"),
    ])
}

/// In-memory catalog standing in for the HTTP client.
///
/// Interior mutability throughout so one instance can be shared by
/// reference between a workflow under test and the test's own assertions.
/// `set_fail(true)` makes every subsequent call answer with a 500.
#[derive(Default)]
pub struct FakeCatalog {
    products: Mutex<Vec<Product>>,
    next_id: AtomicI64,
    fail: AtomicBool,
}

impl FakeCatalog {
    /// Catalog pre-populated with `products`.
    #[must_use]
    pub fn seeded(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            next_id: AtomicI64::new(100),
            fail: AtomicBool::new(false),
        }
    }

    /// Toggle failure mode for every subsequent call.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the server-side listing, for assertions.
    #[must_use]
    pub fn listing(&self) -> Vec<Product> {
        self.lock().clone()
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(CatalogError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ))
        } else {
            Ok(())
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogApi for &FakeCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.check()?;
        Ok(self.lock().clone())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.check()?;
        self.lock()
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.check()?;
        let mut seen = std::collections::HashSet::new();
        Ok(self
            .lock()
            .iter()
            .filter(|p| seen.insert(p.category.clone()))
            .map(|p| p.category.clone())
            .collect())
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, CatalogError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Product {
            id: id.into(),
            name: input.name.clone(),
            price: input.price,
            description: input.description.clone(),
            category: input.category.clone(),
            image: input.image.clone(),
            rating: None,
        };
        self.lock().push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, CatalogError> {
        self.check()?;
        let mut products = self.lock();
        let slot = products
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        slot.name = input.name.clone();
        slot.price = input.price;
        slot.description = input.description.clone();
        slot.category = input.category.clone();
        slot.image = input.image.clone();
        Ok(slot.clone())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogError> {
        self.check()?;
        let mut products = self.lock();
        let before = products.len();
        products.retain(|p| p.id != *id);
        if products.len() == before {
            return Err(CatalogError::NotFound(id.clone()));
        }
        Ok(())
    }
}
