//! Payment delegate errors.

use thiserror::Error;

/// Failures while talking to the payment provider.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP transport failure.
    #[error("payment request failed")]
    Http(#[from] reqwest::Error),

    /// The provider answered with something unusable.
    #[error("unexpected payment provider response: {0}")]
    UnexpectedResponse(String),
}
