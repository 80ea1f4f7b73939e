//! Checkout/order workflow.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use tienda_core::{OrderId, OrderStatus, round2};

use crate::models::{CartLineItem, Order};
use crate::services::cart::CartService;
use crate::storage::{KeyValueStore, StorageError, keys, load_json, store_json};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted on an empty cart.
    #[error("el carrito está vacío")]
    EmptyCart,

    /// Persisting the order or clearing the cart failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Checkout pricing policy.
///
/// The shipping fee is a configurable policy, not a fixed contract: the
/// default is no fee. When set, it is added to a non-empty subtotal before
/// the final rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutPolicy {
    /// Flat shipping fee applied per order, if any.
    pub shipping_fee: Option<Decimal>,
}

/// Converts the current cart into an immutable order record.
pub struct CheckoutService {
    store: Arc<dyn KeyValueStore>,
    policy: CheckoutPolicy,
}

impl CheckoutService {
    /// Create the workflow over `store` with `policy`.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, policy: CheckoutPolicy) -> Self {
        Self { store, policy }
    }

    /// Check out the cart.
    ///
    /// Builds an [`Order`] with a timestamp-derived ID and the per-line
    /// rounded total, appends it to the persisted order history
    /// (read-modify-write, not atomic), then clears the cart. The order is
    /// immutable from here on.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] on an empty cart - the history
    /// is left unchanged. Returns [`CheckoutError::Storage`] if the history
    /// write or the cart clear fails.
    pub fn checkout(&self, cart: &mut CartService) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal: Decimal = cart.items().iter().map(CartLineItem::total).sum();
        let total = round2(subtotal + self.policy.shipping_fee.unwrap_or(Decimal::ZERO));

        let order = Order {
            id: OrderId::new(Utc::now().timestamp_millis()),
            items: cart.items().to_vec(),
            total,
            date: Utc::now(),
            status: OrderStatus::Completed,
        };

        let mut history = self.order_history();
        history.push(order.clone());
        store_json(self.store.as_ref(), keys::ORDERS, &history)?;

        cart.clear()?;
        info!(order_id = %order.id, total = %order.total, "order placed");
        Ok(order)
    }

    /// The persisted order history, oldest first.
    ///
    /// Read-only: no update or delete path exists. A missing or corrupt
    /// history loads as empty.
    #[must_use]
    pub fn order_history(&self) -> Vec<Order> {
        load_json(self.store.as_ref(), keys::ORDERS).unwrap_or_default()
    }
}
