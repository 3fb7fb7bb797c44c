//! Session stores.

mod memory;
mod postgres;

pub use memory::InMemorySessionStore;
pub use postgres::PgSessionStore;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::checkout::{
    errors::SessionStoreError,
    models::{CheckoutSession, SessionUpdate},
};

/// Durable keyed storage for checkout sessions.
///
/// The store is a passive ledger: it owns no lifecycle rules, and `update` on
/// an unknown id returns `None` rather than failing, so callers can translate
/// absence into their own not-found handling.
#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a freshly created session.
    async fn create(&self, session: CheckoutSession) -> Result<CheckoutSession, SessionStoreError>;

    /// Fetch the most recently persisted state of a session.
    async fn get(&self, id: &str) -> Result<Option<CheckoutSession>, SessionStoreError>;

    /// Apply a partial update and return the stored result, refreshing
    /// `updated_at`.
    async fn update(
        &self,
        id: &str,
        update: SessionUpdate,
    ) -> Result<Option<CheckoutSession>, SessionStoreError>;
}
