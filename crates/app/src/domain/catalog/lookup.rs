//! Catalog lookup capability.

use async_trait::async_trait;
use kasse::pricing::CatalogProduct;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    database::Db,
    domain::catalog::{errors::CatalogError, records::ProductRecord},
};

const RESOLVE_PRODUCTS_SQL: &str = include_str!("sql/resolve_products.sql");

/// Read-only access to the product catalog.
///
/// `resolve` is one batched call so that every line in a cart is priced
/// against the same catalog snapshot.
#[automock]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Resolve the given SKUs to their published catalog entries.
    ///
    /// SKUs without a published product are simply absent from the result.
    async fn resolve(
        &self,
        skus: &[String],
    ) -> Result<FxHashMap<String, CatalogProduct>, CatalogError>;
}

/// Catalog lookup backed by the `products` table.
#[derive(Debug, Clone)]
pub struct PgCatalogLookup {
    db: Db,
}

impl PgCatalogLookup {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogLookup for PgCatalogLookup {
    async fn resolve(
        &self,
        skus: &[String],
    ) -> Result<FxHashMap<String, CatalogProduct>, CatalogError> {
        let mut tx = self.db.begin().await?;

        let records: Vec<ProductRecord> = sqlx::query_as(RESOLVE_PRODUCTS_SQL)
            .bind(skus)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(records
            .into_iter()
            .map(|record| (record.sku.clone(), record.into()))
            .collect())
    }
}
