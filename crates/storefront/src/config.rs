//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TIENDA_API_BASE_URL` - Base URL of the mock catalog API
//!   (default: the public MockAPI project)
//! - `TIENDA_DATA_DIR` - Directory for the file-backed local store
//!   (default: `.tienda`)
//! - `TIENDA_SHIPPING_FEE` - Flat shipping fee applied at checkout
//!   (default: none)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

use crate::services::checkout::CheckoutPolicy;

/// Default catalog API endpoint.
const DEFAULT_API_BASE_URL: &str = "https://68803b4ff1dcae717b615b5e.mockapi.io/api/v1";

/// Default data directory for persisted local state.
const DEFAULT_DATA_DIR: &str = ".tienda";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the catalog API.
    pub api_base_url: Url,
    /// Directory holding the file-backed key-value store.
    pub data_dir: PathBuf,
    /// Flat shipping fee applied at checkout, if configured.
    pub shipping_fee: Option<Decimal>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url =
            parse_base_url(&get_env_or_default("TIENDA_API_BASE_URL", DEFAULT_API_BASE_URL))?;
        let data_dir = PathBuf::from(get_env_or_default("TIENDA_DATA_DIR", DEFAULT_DATA_DIR));
        let shipping_fee = get_optional_env("TIENDA_SHIPPING_FEE")
            .map(|raw| parse_shipping_fee(&raw))
            .transpose()?;

        Ok(Self {
            api_base_url,
            data_dir,
            shipping_fee,
        })
    }

    /// The checkout pricing policy derived from this configuration.
    #[must_use]
    pub const fn checkout_policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            shipping_fee: self.shipping_fee,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("TIENDA_API_BASE_URL".to_string(), e.to_string()))
}

fn parse_shipping_fee(raw: &str) -> Result<Decimal, ConfigError> {
    let fee = raw.parse::<Decimal>().map_err(|e| {
        ConfigError::InvalidEnvVar("TIENDA_SHIPPING_FEE".to_string(), e.to_string())
    })?;
    if fee < Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar(
            "TIENDA_SHIPPING_FEE".to_string(),
            "must not be negative".to_string(),
        ));
    }
    Ok(fee)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_valid() {
        let url = parse_base_url(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_parse_shipping_fee() {
        assert_eq!(parse_shipping_fee("5.00").unwrap(), "5.00".parse().unwrap());
        assert!(parse_shipping_fee("free").is_err());
        assert!(parse_shipping_fee("-1").is_err());
    }

    #[test]
    fn test_checkout_policy_carries_fee() {
        let config = StoreConfig {
            api_base_url: parse_base_url(DEFAULT_API_BASE_URL).unwrap(),
            data_dir: PathBuf::from(".tienda"),
            shipping_fee: Some("5.00".parse().unwrap()),
        };
        assert_eq!(
            config.checkout_policy().shipping_fee,
            Some("5.00".parse().unwrap())
        );
    }
}
