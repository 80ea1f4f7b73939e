//! Product domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::ProductId;

/// A catalog product, normalized from the remote API schema.
///
/// Owned by the catalog client; read-mostly. Mutated only through the admin
/// create/update calls and deleted only through admin delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog ID, normalized to its string form.
    pub id: ProductId,
    /// Display name (`title` in one remote schema variant).
    pub name: String,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Category label used for filtering.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Aggregate review rating, when the remote schema carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Aggregate product rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g., 4.5).
    pub rate: Decimal,
    /// Number of reviews behind the average.
    pub count: i64,
}

/// Fields for creating or updating a product through the admin workflow.
///
/// The catalog API assigns the ID on create, so there is none here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
}
