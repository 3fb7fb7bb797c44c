//! Postgres session store.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow, types::Json};

use async_trait::async_trait;

use crate::{
    database::Db,
    domain::checkout::{
        errors::SessionStoreError,
        models::{
            CheckoutSession, PricedLineItem, SessionStatus, SessionUpdate, ShippingAddress,
            ShippingOption,
        },
        store::SessionStore,
    },
};

const CREATE_SESSION_SQL: &str = include_str!("../sql/create_session.sql");
const GET_SESSION_SQL: &str = include_str!("../sql/get_session.sql");
const UPDATE_SESSION_SQL: &str = include_str!("../sql/update_session.sql");

/// Durable session store backed by the `checkout_sessions` table.
///
/// Item, option and message sequences are stored as JSONB payloads; the
/// scalar monetary fields get their own columns so the ledger stays queryable.
#[derive(Debug, Clone)]
pub struct PgSessionStore {
    db: Db,
}

impl PgSessionStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, session: CheckoutSession) -> Result<CheckoutSession, SessionStoreError> {
        let mut tx = self.db.begin().await.map_err(SessionStoreError::Sql)?;

        let created: CheckoutSession = sqlx::query_as(CREATE_SESSION_SQL)
            .bind(&session.id)
            .bind(session.status.as_str())
            .bind(Json(&session.items))
            .bind(session.shipping_address.as_ref().map(Json))
            .bind(Json(&session.shipping_options))
            .bind(session.selected_shipping.as_deref())
            .bind(&session.currency)
            .bind(session.vat_rate)
            .bind(session.subtotal)
            .bind(session.shipping_amount)
            .bind(session.vat_amount)
            .bind(session.grand_total)
            .bind(Json(&session.messages))
            .bind(&session.idempotency_key)
            .bind(SqlxTimestamp::from(session.created_at))
            .bind(SqlxTimestamp::from(session.updated_at))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await.map_err(SessionStoreError::Sql)?;

        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Option<CheckoutSession>, SessionStoreError> {
        let mut tx = self.db.begin().await.map_err(SessionStoreError::Sql)?;

        let session: Option<CheckoutSession> = sqlx::query_as(GET_SESSION_SQL)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await.map_err(SessionStoreError::Sql)?;

        Ok(session)
    }

    async fn update(
        &self,
        id: &str,
        update: SessionUpdate,
    ) -> Result<Option<CheckoutSession>, SessionStoreError> {
        let mut tx = self.db.begin().await.map_err(SessionStoreError::Sql)?;

        let session: Option<CheckoutSession> = sqlx::query_as(UPDATE_SESSION_SQL)
            .bind(id)
            .bind(update.status.map(SessionStatus::as_str))
            .bind(update.items.map(Json))
            .bind(update.shipping_address.map(Json))
            .bind(update.shipping_options.map(Json))
            .bind(update.selected_shipping)
            .bind(update.subtotal)
            .bind(update.shipping_amount)
            .bind(update.vat_amount)
            .bind(update.grand_total)
            .bind(update.messages.map(Json))
            .bind(update.idempotency_key)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await.map_err(SessionStoreError::Sql)?;

        Ok(session)
    }
}

impl<'r> FromRow<'r, PgRow> for CheckoutSession {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<SessionStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            status,
            items: row.try_get::<Json<Vec<PricedLineItem>>, _>("items")?.0,
            shipping_address: row
                .try_get::<Option<Json<ShippingAddress>>, _>("shipping_address")?
                .map(|json| json.0),
            shipping_options: row
                .try_get::<Json<Vec<ShippingOption>>, _>("shipping_options")?
                .0,
            selected_shipping: row.try_get("selected_shipping")?,
            currency: row.try_get("currency")?,
            vat_rate: row.try_get::<Decimal, _>("vat_rate")?,
            subtotal: row.try_get("subtotal")?,
            shipping_amount: row.try_get("shipping_amount")?,
            vat_amount: row.try_get("vat_amount")?,
            grand_total: row.try_get("grand_total")?,
            messages: row.try_get::<Json<Vec<String>>, _>("messages")?.0,
            idempotency_key: row.try_get("idempotency_key")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
