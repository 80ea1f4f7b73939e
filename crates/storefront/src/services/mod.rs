//! Workflow services.
//!
//! Each service owns the state it mutates and takes its collaborators
//! (store, catalog, credential verifier) by injection rather than ambient
//! lookup. Execution is single-threaded and event-driven: network calls are
//! the only suspension points, storage writes are synchronous.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;

pub use auth::{AuthService, CredentialVerifier, SeedCredentials};
pub use cart::CartService;
pub use checkout::{CheckoutError, CheckoutPolicy, CheckoutService};
pub use products::ProductWorkflow;
