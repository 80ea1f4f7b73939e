//! Unified error handling.
//!
//! Workflows catch failures at their boundary and return `Result` rather
//! than letting anything propagate as a panic; the view layer renders the
//! error state and any retry affordance. Nothing here is fatal - worst case
//! is an empty list or a forced re-login.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog API operation failed (network error class: retryable by
    /// re-invoking the operation).
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Local persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
