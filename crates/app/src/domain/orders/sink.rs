//! Order sink capability.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Row, postgres::PgRow, types::Json};

use crate::{
    database::Db,
    domain::orders::{
        errors::OrderSinkError,
        models::{NewOrder, Order, OrderLine},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const DECREMENT_INVENTORY_SQL: &str = include_str!("sql/decrement_inventory.sql");

/// Persists finalized orders and their lines, decrementing stock.
#[automock]
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Persist `order` with its `lines` and decrement product stock.
    async fn persist(&self, order: NewOrder, lines: &[OrderLine]) -> Result<Order, OrderSinkError>;
}

/// Order sink backed by the `orders` and `order_items` tables.
///
/// The order row, its lines and the stock decrements are written in one
/// transaction so a failure never records a partial order.
#[derive(Debug, Clone)]
pub struct PgOrderSink {
    db: Db,
}

impl PgOrderSink {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderSink for PgOrderSink {
    async fn persist(&self, order: NewOrder, lines: &[OrderLine]) -> Result<Order, OrderSinkError> {
        let mut tx = self.db.begin().await?;

        let created: Order = sqlx::query_as(CREATE_ORDER_SQL)
            .bind(&order.payment_reference)
            .bind(order.payment_intent_id.as_deref())
            .bind(&order.customer_email)
            .bind(order.customer_name.as_deref())
            .bind(order.total_amount)
            .bind(&order.currency)
            .bind(order.shipping_address.as_ref().map(Json))
            .fetch_one(&mut *tx)
            .await?;

        for line in lines {
            sqlx::query(CREATE_ORDER_ITEM_SQL)
                .bind(created.id)
                .bind(&line.sku)
                .bind(i64::from(line.quantity))
                .bind(line.unit_price)
                .bind(&line.currency)
                .execute(&mut *tx)
                .await?;

            sqlx::query(DECREMENT_INVENTORY_SQL)
                .bind(&line.sku)
                .bind(i64::from(line.quantity))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(created)
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            status: row.try_get("status")?,
            total_amount: row.try_get("total_amount")?,
            currency: row.try_get("currency")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
