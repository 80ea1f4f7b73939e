//! Domain types for the storefront.
//!
//! These are the normalized internal shapes, separate from the raw remote
//! catalog schema (see [`crate::catalog::types`]) and from what the view
//! layer renders.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartLineItem;
pub use order::Order;
pub use product::{Product, ProductInput, Rating};
pub use user::{RegisterProfile, Session, User};
