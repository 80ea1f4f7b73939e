//! Shopping cart engine.

use std::sync::Arc;

use rust_decimal::Decimal;
use tienda_core::{ProductId, round2};

use crate::models::{CartLineItem, Product};
use crate::storage::{KeyValueStore, StorageError, keys, load_json, store_json};

/// The in-memory cart, persisted to local storage on every mutation.
///
/// Invariants:
/// - at most one line per product ID (adds merge into the existing line)
/// - a persisted quantity is always >= 1; setting a quantity to 0 removes
///   the line
///
/// Every mutating operation synchronously writes the full line collection
/// under [`keys::CART`] - no batching, no debounce. A crash between the
/// in-memory update and the write loses that mutation; this is accepted for
/// a single-user local client.
pub struct CartService {
    items: Vec<CartLineItem>,
    store: Arc<dyn KeyValueStore>,
}

impl CartService {
    /// Rehydrate the cart from `store`.
    ///
    /// A missing or corrupt persisted cart loads as empty.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = load_json(store.as_ref(), keys::CART).unwrap_or_default();
        Self { items, store }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line when one exists for the product's ID,
    /// otherwise appends a new line. Quantities are not validated against
    /// stock - there is no stock model. Adding zero units is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persistence write fails.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), StorageError> {
        if quantity == 0 {
            return Ok(());
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLineItem::from_product(product, quantity));
        }
        self.persist()
    }

    /// Remove the line for `product_id`. Absent lines are a no-op, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persistence write fails.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), StorageError> {
        self.items.retain(|line| line.product_id != *product_id);
        self.persist()
    }

    /// Overwrite the quantity of the line for `product_id`.
    ///
    /// A quantity of 0 is equivalent to [`Self::remove_item`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persistence write fails.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<(), StorageError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == *product_id)
        {
            line.quantity = quantity;
        }
        self.persist()
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persistence write fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.persist()
    }

    /// Grand total: per-line rounded totals summed, rounded again to 2
    /// decimals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        round2(self.items.iter().map(CartLineItem::total).sum())
    }

    /// Total number of units across all lines (the cart-badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        store_json(self.store.as_ref(), keys::CART, &self.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("producto {id}"),
            price: price.parse().unwrap(),
            description: String::new(),
            category: "general".to_owned(),
            image: String::new(),
            rating: None,
        }
    }

    fn cart() -> CartService {
        CartService::load(Arc::new(MemoryStore::new()))
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_merges_lines_for_same_product() {
        let mut cart = cart();
        let p = product("1", "19.99");
        cart.add_item(&p, 1).unwrap();
        cart.add_item(&p, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_no_duplicate_lines_across_mixed_operations() {
        let mut cart = cart();
        let p1 = product("1", "10.00");
        let p2 = product("2", "4.00");
        cart.add_item(&p1, 1).unwrap();
        cart.add_item(&p2, 1).unwrap();
        cart.set_quantity(&"1".into(), 5).unwrap();
        cart.add_item(&p1, 1).unwrap();
        cart.remove_item(&"2".into()).unwrap();
        cart.add_item(&p2, 2).unwrap();

        let mut ids: Vec<_> = cart.items().iter().map(|l| l.product_id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), cart.len());
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let p = product("1", "19.99");

        let mut removed = cart();
        removed.add_item(&p, 2).unwrap();
        removed.remove_item(&"1".into()).unwrap();

        let mut zeroed = cart();
        zeroed.add_item(&p, 2).unwrap();
        zeroed.set_quantity(&"1".into(), 0).unwrap();

        assert_eq!(removed.items(), zeroed.items());
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = cart();
        cart.add_item(&product("1", "5.00"), 1).unwrap();
        cart.remove_item(&"99".into()).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_set_quantity_on_absent_line_adds_nothing() {
        let mut cart = cart();
        cart.set_quantity(&"99".into(), 3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = cart();
        cart.add_item(&product("1", "5.00"), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_example_scenario() {
        // add {id:1, price:19.99} qty 2, add {id:2, price:5.00} qty 1
        let mut cart = cart();
        cart.add_item(&product("1", "19.99"), 2).unwrap();
        cart.add_item(&product("2", "5.00"), 1).unwrap();
        assert_eq!(cart.total(), dec("44.98"));

        cart.remove_item(&"1".into()).unwrap();
        assert_eq!(cart.total(), dec("5.00"));
    }

    #[test]
    fn test_total_invariant_under_add_order() {
        let p1 = product("1", "3.33");
        let p2 = product("2", "7.77");

        let mut a = cart();
        a.add_item(&p1, 2).unwrap();
        a.add_item(&p2, 1).unwrap();

        let mut b = cart();
        b.add_item(&p2, 1).unwrap();
        b.add_item(&p1, 1).unwrap();
        b.add_item(&p1, 1).unwrap();

        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = cart();
        cart.add_item(&product("1", "1.00"), 2).unwrap();
        cart.add_item(&product("2", "1.00"), 3).unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_mutations_persist_and_rehydrate() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let mut cart = CartService::load(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        cart.add_item(&product("1", "19.99"), 2).unwrap();

        let rehydrated = CartService::load(store);
        assert_eq!(rehydrated.items(), cart.items());
    }

    #[test]
    fn test_corrupt_persisted_cart_loads_empty() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        store.set(keys::CART, "{broken").unwrap();

        let cart = CartService::load(store);
        assert!(cart.is_empty());
    }
}
