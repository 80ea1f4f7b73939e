//! Wire types for the remote catalog API.
//!
//! Two schema variants are observed in the wild:
//!
//! - `{id, title, price: "19.99", image, description, category,
//!   rating: {rate, count}}`
//! - a flatter `{id, name, price: 19.99, description, category, image}`
//!
//! Both deserialize into [`RemoteProduct`]: `title` aliases to `name`,
//! `price` accepts a JSON string or number, and `id` accepts a string or
//! number normalized to its string form.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use tienda_core::ProductId;

/// A product as returned by the remote catalog API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProduct {
    /// Remote ID, as string or number.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: ProductId,
    /// Display name; one schema variant calls this `title`.
    #[serde(alias = "title")]
    pub name: String,
    /// Unit price, as string or number.
    #[serde(deserialize_with = "decimal_from_string_or_number")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    /// Review aggregate; only one schema variant carries it.
    #[serde(default)]
    pub rating: Option<RemoteRating>,
}

/// Review aggregate as returned by the remote catalog API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRating {
    #[serde(deserialize_with = "decimal_from_string_or_number")]
    pub rate: Decimal,
    pub count: i64,
}

/// Accept a product ID as either a JSON string or a number.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => ProductId::new(s),
        StringOrNumber::Number(n) => ProductId::new(n.to_string()),
    })
}

/// Accept a decimal as either a JSON string or a number.
///
/// Going through the number's textual form preserves the decimal digits
/// instead of routing through `f64`.
fn decimal_from_string_or_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    let text = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    };

    text.trim()
        .parse::<Decimal>()
        .map_err(|err| serde::de::Error::custom(format!("invalid decimal '{text}': {err}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_with_title_and_string_price() {
        let json = r#"{
            "id": 1,
            "title": "Mochila urbana",
            "price": "109.95",
            "description": "Resistente al agua",
            "category": "accesorios",
            "image": "https://img.example/mochila.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }"#;
        let remote: RemoteProduct = serde_json::from_str(json).unwrap();
        assert_eq!(remote.id, ProductId::new("1"));
        assert_eq!(remote.name, "Mochila urbana");
        assert_eq!(remote.price, "109.95".parse().unwrap());
        let rating = remote.rating.unwrap();
        assert_eq!(rating.rate, "3.9".parse().unwrap());
        assert_eq!(rating.count, 120);
    }

    #[test]
    fn test_flat_variant_with_name_and_numeric_price() {
        let json = r#"{
            "id": "42",
            "name": "Lámpara de escritorio",
            "price": 24.5,
            "description": "",
            "category": "hogar",
            "image": "https://img.example/lampara.jpg"
        }"#;
        let remote: RemoteProduct = serde_json::from_str(json).unwrap();
        assert_eq!(remote.id, ProductId::new("42"));
        assert_eq!(remote.name, "Lámpara de escritorio");
        assert_eq!(remote.price, "24.5".parse().unwrap());
        assert!(remote.rating.is_none());
    }

    #[test]
    fn test_unparseable_price_is_an_error() {
        let json = r#"{"id": 1, "name": "x", "price": "gratis"}"#;
        assert!(serde_json::from_str::<RemoteProduct>(json).is_err());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id": 7, "title": "Mínimo", "price": "1.00"}"#;
        let remote: RemoteProduct = serde_json::from_str(json).unwrap();
        assert_eq!(remote.description, "");
        assert_eq!(remote.category, "");
        assert_eq!(remote.image, "");
    }
}
