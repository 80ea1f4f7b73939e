//! Local key-value persistence.
//!
//! Stands in for browser local storage: a handful of fixed keys, each
//! holding one JSON-serialized value, written synchronously on every
//! mutation. There is no schema versioning and no transactionality -
//! read-modify-write sequences (e.g., the order-history append) are not
//! atomic across process crashes.
//!
//! A malformed stored value is treated as absent: [`load_json`] discards the
//! corrupt entry and the owning workflow resets to its empty state.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys for persisted state.
pub mod keys {
    /// Key for the cart line-item collection.
    pub const CART: &str = "mi_tienda_cart";

    /// Key for the append-only order history.
    pub const ORDERS: &str = "mi_tienda_orders";

    /// Key for the opaque session token.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// Key for the signed-in user's profile data.
    pub const USER_DATA: &str = "user_data";
}

/// Errors that can occur when reading or writing the local store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        /// Storage key being accessed.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized.
    #[error("storage serialization error for key '{key}': {source}")]
    Serialize {
        /// Storage key being written.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A synchronous string key-value store.
///
/// The browser-local-storage analog: `get`/`set`/`remove` of string values
/// under fixed keys. All operations are blocking but fast; there are no
/// suspension points.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying delete fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and deserialize the JSON value under `key`.
///
/// Fail-safe, not fail-fatal: a missing, unreadable, or unparseable value
/// yields `None`. A corrupt entry is removed so the next read starts clean.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read persisted value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding corrupt persisted value");
            if let Err(err) = store.remove(key) {
                tracing::warn!(key, error = %err, "failed to remove corrupt value");
            }
            None
        }
    }
}

/// Serialize `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] if serialization or the underlying write fails.
pub fn store_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_missing_key() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<String>> = load_json(&store, keys::CART);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_store_and_load_roundtrip() {
        let store = MemoryStore::new();
        store_json(&store, keys::CART, &vec!["a".to_owned(), "b".to_owned()]).unwrap();
        let loaded: Vec<String> = load_json(&store, keys::CART).unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn test_corrupt_value_is_discarded() {
        let store = MemoryStore::new();
        store.set(keys::ORDERS, "{not json").unwrap();

        let loaded: Option<Vec<String>> = load_json(&store, keys::ORDERS);
        assert!(loaded.is_none());
        // The corrupt entry is gone, not just skipped
        assert!(store.get(keys::ORDERS).unwrap().is_none());
    }
}
