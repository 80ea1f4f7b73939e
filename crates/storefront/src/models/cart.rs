//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::{ProductId, line_total};

use super::product::Product;

/// One product+quantity pairing held in the active cart.
///
/// A cart never holds two lines for the same product ID, and a persisted
/// quantity is always at least 1 (a decrement to 0 removes the line). Both
/// invariants are enforced by [`crate::services::cart::CartService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name, snapshotted at add time.
    pub name: String,
    /// Unit price, snapshotted at add time.
    pub price: Decimal,
    /// Image URL, snapshotted at add time.
    pub image: String,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Build a line from a product and quantity.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Rounded total for this line: `round2(price × quantity)`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        line_total(self.price, self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "1".into(),
            name: "Taza de café".to_owned(),
            price: "19.99".parse().unwrap(),
            description: "Cerámica, 350ml".to_owned(),
            category: "hogar".to_owned(),
            image: "https://img.example/taza.jpg".to_owned(),
            rating: None,
        }
    }

    #[test]
    fn test_from_product_snapshots_fields() {
        let line = CartLineItem::from_product(&product(), 2);
        assert_eq!(line.product_id, "1".into());
        assert_eq!(line.name, "Taza de café");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_line_total_is_rounded() {
        let line = CartLineItem::from_product(&product(), 2);
        assert_eq!(line.total(), "39.98".parse().unwrap());
    }
}
