//! Order sink errors.

use thiserror::Error;

/// Failures while persisting a finalized order.
#[derive(Debug, Error)]
pub enum OrderSinkError {
    /// Underlying storage failure.
    #[error("order storage error")]
    Sql(#[from] sqlx::Error),
}
