//! Catalog lookup errors.

use thiserror::Error;

/// Failures while resolving products from the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying storage failure.
    #[error("catalog storage error")]
    Sql(#[from] sqlx::Error),
}
