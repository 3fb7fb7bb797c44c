//! Catalog records.

use kasse::pricing::CatalogProduct;
use sqlx::{FromRow, Row, postgres::PgRow};

/// One published product row.
#[derive(Debug, Clone)]
pub(crate) struct ProductRecord {
    pub(crate) sku: String,
    pub(crate) name: String,
    pub(crate) unit_price: i64,
    pub(crate) currency: String,
    pub(crate) stock: u32,
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let stock = try_get_count(row, "inventory_count")?;

        Ok(Self {
            sku: row.try_get("sku")?,
            name: row.try_get("name")?,
            unit_price: row.try_get("unit_amount")?,
            currency: row.try_get("currency")?,
            stock,
        })
    }
}

impl From<ProductRecord> for CatalogProduct {
    fn from(record: ProductRecord) -> Self {
        Self {
            sku: record.sku,
            name: record.name,
            unit_price: record.unit_price,
            currency: record.currency,
            stock: record.stock,
        }
    }
}

fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i64: i64 = row.try_get(col)?;

    u32::try_from(count_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
