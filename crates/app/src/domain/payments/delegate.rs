//! Payment delegate capability.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::payments::{
    errors::PaymentError,
    models::{HostedPaymentSession, HostedSessionRequest, PaymentReceipt},
};

/// The single payment collaborator completion runs through.
///
/// Two alternative strategies, never both: `confirm` settles a
/// pre-authorised token, `create_hosted_session` stands up a hosted payment
/// page when no token was supplied. Neither call is idempotent on the
/// provider side.
#[automock]
#[async_trait]
pub trait PaymentDelegate: Send + Sync {
    /// Confirm a delegated payment token for the given amount.
    async fn confirm(
        &self,
        token: &str,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentReceipt, PaymentError>;

    /// Stand up a hosted payment page for manual payment.
    async fn create_hosted_session(
        &self,
        request: HostedSessionRequest,
    ) -> Result<HostedPaymentSession, PaymentError>;
}
