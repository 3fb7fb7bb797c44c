//! In-memory session store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use jiff::Timestamp;

use crate::domain::checkout::{
    errors::SessionStoreError,
    models::{CheckoutSession, SessionUpdate},
    store::SessionStore,
};

/// Session store for development and tests; state dies with the process.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, CheckoutSession>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: CheckoutSession) -> Result<CheckoutSession, SessionStoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_poisoned| SessionStoreError::Poisoned)?;

        if sessions.contains_key(&session.id) {
            return Err(SessionStoreError::AlreadyExists);
        }

        sessions.insert(session.id.clone(), session.clone());

        Ok(session)
    }

    async fn get(&self, id: &str) -> Result<Option<CheckoutSession>, SessionStoreError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_poisoned| SessionStoreError::Poisoned)?;

        Ok(sessions.get(id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        update: SessionUpdate,
    ) -> Result<Option<CheckoutSession>, SessionStoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_poisoned| SessionStoreError::Poisoned)?;

        let Some(session) = sessions.get_mut(id) else {
            return Ok(None);
        };

        session.apply(update);
        session.updated_at = Timestamp::now();

        Ok(Some(session.clone()))
    }
}
