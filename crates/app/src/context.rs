//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        catalog::{CatalogLookup, PgCatalogLookup},
        checkout::{
            CheckoutService, PgSessionStore, SessionStore,
            pricing::PricingCalculator,
            service::CheckoutEngine,
        },
        orders::{OrderSink, PgOrderSink},
        payments::{
            PaymentDelegate,
            stripe::{StripeConfig, StripeDelegate},
        },
    },
};

/// Failures while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database connection could not be established.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The wired application services handed to the HTTP layer.
#[derive(Clone)]
pub struct AppContext {
    /// The checkout session engine.
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build the application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing the database connection fails.
    pub async fn from_database_url(
        url: &str,
        stripe: StripeConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url).await.map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let catalog: Arc<dyn CatalogLookup> = Arc::new(PgCatalogLookup::new(db.clone()));
        let store: Arc<dyn SessionStore> = Arc::new(PgSessionStore::new(db.clone()));
        let payment: Arc<dyn PaymentDelegate> = Arc::new(StripeDelegate::new(stripe));
        let orders: Arc<dyn OrderSink> = Arc::new(PgOrderSink::new(db));

        let engine = CheckoutEngine::new(store, PricingCalculator::new(catalog), payment, orders);

        Ok(Self {
            checkout: Arc::new(engine),
        })
    }
}
