//! Tienda Core - Shared types library.
//!
//! This crate provides common types used across all Tienda components:
//! - `storefront` - Catalog, cart, session, checkout, and admin workflows
//! - `cli` - Command-line driver for the workflows
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, statuses,
//!   and monetary rounding helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
