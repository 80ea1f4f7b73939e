//! Conversions from the remote catalog schema to domain types.

use crate::models::{Product, Rating};

use super::types::{RemoteProduct, RemoteRating};

/// Convert a remote product into the internal [`Product`] shape.
pub(crate) fn convert_product(remote: RemoteProduct) -> Product {
    Product {
        id: remote.id,
        name: remote.name,
        price: remote.price,
        description: remote.description,
        category: remote.category,
        image: remote.image,
        rating: remote.rating.map(convert_rating),
    }
}

fn convert_rating(remote: RemoteRating) -> Rating {
    Rating {
        rate: remote.rate,
        count: remote.count,
    }
}

/// Distinct category labels, in first-seen order.
///
/// Used when the remote API has no categories endpoint and the list must be
/// derived by scanning all products.
pub(crate) fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    products
        .iter()
        .filter(|p| !p.category.is_empty())
        .filter(|p| seen.insert(p.category.clone()))
        .map(|p| p.category.clone())
        .collect()
}
