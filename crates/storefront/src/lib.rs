//! Tienda Storefront - client-side e-commerce workflows.
//!
//! This library implements the business-logic core of a client-side
//! storefront: catalog browsing over a mock REST API, an in-memory shopping
//! cart persisted to a local key-value store, a mocked session/auth model
//! with role gating, a checkout workflow producing immutable order records,
//! and an admin CRUD workflow over the catalog.
//!
//! # Architecture
//!
//! - The catalog API is the source of truth for products - no local sync,
//!   direct calls via [`catalog::CatalogClient`]
//! - Cart, session, and order history persist to a [`storage::KeyValueStore`]
//!   (a JSON file per key, or in-memory for tests)
//! - Workflows return `Result` at their boundary; nothing here is fatal -
//!   worst case is an empty list or a forced re-login
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_storefront::config::StoreConfig;
//! use tienda_storefront::services::auth::AuthService;
//! use tienda_storefront::services::cart::CartService;
//! use tienda_storefront::services::checkout::CheckoutService;
//! use tienda_storefront::state::AppState;
//!
//! let state = AppState::new(StoreConfig::from_env()?)?;
//! let mut auth = AuthService::load(state.store());
//! auth.login("user@tienda.com", "user123")?;
//!
//! let product = state.catalog().fetch_product(&"1".into()).await?;
//! let mut cart = CartService::load(state.store());
//! cart.add_item(&product, 2)?;
//!
//! let checkout = CheckoutService::new(state.store(), state.config().checkout_policy());
//! let order = checkout.checkout(&mut cart)?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{AppError, Result};
