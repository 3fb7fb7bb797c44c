//! Checkout sessions

pub mod errors;
pub mod models;
pub mod pricing;
pub mod service;
pub mod store;

pub use errors::{CheckoutServiceError, SessionStoreError};
pub use service::*;
pub use store::{InMemorySessionStore, MockSessionStore, PgSessionStore, SessionStore};
