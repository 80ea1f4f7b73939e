//! Order domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::{OrderId, OrderStatus};

use super::cart::CartLineItem;

/// An immutable snapshot of a checked-out cart.
///
/// Created only by the checkout workflow and appended to the persisted order
/// history; never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Millisecond-epoch ID minted at checkout time.
    pub id: OrderId,
    /// Line items snapshotted from the cart.
    pub items: Vec<CartLineItem>,
    /// Grand total, rounded to 2 decimals.
    pub total: Decimal,
    /// When the order was placed (serialized as ISO-8601).
    pub date: DateTime<Utc>,
    /// Always `completed` - checkout is simulated.
    pub status: OrderStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip_with_iso_date() {
        let order = Order {
            id: OrderId::new(1_700_000_000_000),
            items: vec![],
            total: "5.00".parse().unwrap(),
            date: "2026-08-23T12:00:00Z".parse().unwrap(),
            status: OrderStatus::Completed,
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"2026-08-23T12:00:00Z\""));
        assert!(json.contains("\"completed\""));
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
