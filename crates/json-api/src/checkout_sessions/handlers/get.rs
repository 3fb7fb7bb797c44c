//! Get Checkout Session Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use kasse_app::domain::checkout::models::{CheckoutSession, PricedLineItem, ShippingOption};

use crate::{
    checkout_sessions::{errors::into_status_error, handlers::create::ShippingAddressPayload},
    extensions::*,
    state::State,
};

/// Checkout Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutSessionResponse {
    /// Opaque session id
    pub id: String,

    /// Lifecycle status: `created`, `updated` or `completed`
    pub status: String,

    /// Priced cart lines
    pub items: Vec<PricedLineItemResponse>,

    /// Destination, when one has been provided
    pub shipping_address: Option<ShippingAddressPayload>,

    /// The menu the destination country offers
    pub shipping_options: Vec<ShippingOptionResponse>,

    /// The caller's last explicit shipping choice
    pub selected_shipping: Option<String>,

    /// Session currency
    pub currency: String,

    /// Jurisdiction VAT rate
    pub vat_rate: String,

    /// Item subtotal in minor units
    pub subtotal: i64,

    /// Shipping cost in minor units
    pub shipping_amount: i64,

    /// VAT amount in minor units
    pub vat_amount: i64,

    /// Grand total in minor units
    pub grand_total: i64,

    /// Warnings from the most recent pricing pass
    pub messages: Vec<String>,

    /// Caller-supplied idempotency token
    pub idempotency_key: String,

    /// Creation time
    pub created_at: String,

    /// Last update time
    pub updated_at: String,
}

impl From<CheckoutSession> for CheckoutSessionResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            id: session.id,
            status: session.status.as_str().to_owned(),
            items: session
                .items
                .into_iter()
                .map(PricedLineItemResponse::from)
                .collect(),
            shipping_address: session.shipping_address.map(ShippingAddressPayload::from),
            shipping_options: session
                .shipping_options
                .into_iter()
                .map(ShippingOptionResponse::from)
                .collect(),
            selected_shipping: session.selected_shipping,
            currency: session.currency,
            vat_rate: session.vat_rate.to_string(),
            subtotal: session.subtotal,
            shipping_amount: session.shipping_amount,
            vat_amount: session.vat_amount,
            grand_total: session.grand_total,
            messages: session.messages,
            idempotency_key: session.idempotency_key,
            created_at: session.created_at.to_string(),
            updated_at: session.updated_at.to_string(),
        }
    }
}

/// Priced Line Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PricedLineItemResponse {
    /// Product SKU
    pub sku: String,

    /// Display name
    pub name: String,

    /// Unit price in minor units
    pub unit_price: i64,

    /// Quantity, possibly clamped to stock
    pub quantity: u32,

    /// Per-line VAT rate
    pub vat_rate: String,
}

impl From<PricedLineItem> for PricedLineItemResponse {
    fn from(item: PricedLineItem) -> Self {
        Self {
            sku: item.sku,
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
            vat_rate: item.vat_rate.to_string(),
        }
    }
}

/// Shipping Option Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingOptionResponse {
    /// Option id
    pub id: String,

    /// Human-readable label
    pub label: String,

    /// Price in minor units
    pub amount: i64,
}

impl From<ShippingOption> for ShippingOptionResponse {
    fn from(option: ShippingOption) -> Self {
        Self {
            id: option.id,
            label: option.label,
            amount: option.amount,
        }
    }
}

/// Get Checkout Session Handler
///
/// Returns the most recently persisted state of a session.
#[endpoint(
    tags("checkout_sessions"),
    summary = "Get Checkout Session",
    responses(
        (status_code = StatusCode::OK, description = "Checkout session"),
        (status_code = StatusCode::NOT_FOUND, description = "Checkout session not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CheckoutSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .checkout
        .get(&id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}
