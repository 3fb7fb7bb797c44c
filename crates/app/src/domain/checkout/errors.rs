//! Checkout service errors.

use sqlx::{
    Error as SqlxError,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use kasse::pricing::PricingError;

use crate::domain::{catalog::CatalogError, orders::OrderSinkError, payments::PaymentError};

/// Session store failures.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// A session with the same id already exists.
    #[error("checkout session already exists")]
    AlreadyExists,

    /// Underlying storage failure.
    #[error("session storage error")]
    Sql(#[source] SqlxError),

    /// The in-memory store's lock was poisoned.
    #[error("session store lock poisoned")]
    Poisoned,
}

impl From<SqlxError> for SessionStoreError {
    fn from(error: SqlxError) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}

/// Errors surfaced by the checkout service.
#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    /// The request carried no items.
    #[error("items must not be empty")]
    EmptyItems,

    /// An item carried a zero quantity.
    #[error("each item must have a positive quantity")]
    NonPositiveQuantity,

    /// The requested currency is not the supported session currency.
    #[error("only NOK currency is supported")]
    UnsupportedCurrency,

    /// An update carried none of its optional fields.
    #[error("at least one of items, shipping_option or shipping_address is required")]
    NoUpdateFields,

    /// No session with the given id exists.
    #[error("checkout session not found")]
    NotFound,

    /// The session is terminal and rejects further mutation.
    #[error("checkout session already completed")]
    AlreadyCompleted,

    /// Persisting or loading the session failed.
    #[error("session storage failed")]
    Storage(#[from] SessionStoreError),

    /// The catalog could not be resolved.
    #[error("catalog lookup failed")]
    Catalog(#[from] CatalogError),

    /// The pricing pass itself failed.
    #[error("cart pricing failed")]
    Pricing(#[from] PricingError),

    /// The payment delegate failed.
    #[error("payment failed")]
    Payment(#[from] PaymentError),

    /// The order could not be persisted.
    #[error("order persistence failed")]
    OrderSink(#[from] OrderSinkError),
}
