//! Create Checkout Session Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use kasse_app::domain::checkout::models::{
    LineItemRequest, NewCheckoutSession, ShippingAddress,
};

use crate::{
    checkout_sessions::{errors::into_status_error, handlers::get::CheckoutSessionResponse},
    extensions::*,
    state::State,
};

/// Line Item Payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemPayload {
    /// Product SKU
    pub sku: String,

    /// Requested quantity; must be positive
    pub quantity: u32,
}

impl From<LineItemPayload> for LineItemRequest {
    fn from(payload: LineItemPayload) -> Self {
        Self {
            sku: payload.sku,
            quantity: payload.quantity,
        }
    }
}

/// Shipping Address Payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingAddressPayload {
    /// Destination postal code
    pub postal_code: String,

    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

impl From<ShippingAddressPayload> for ShippingAddress {
    fn from(payload: ShippingAddressPayload) -> Self {
        Self {
            postal_code: payload.postal_code,
            country: payload.country,
        }
    }
}

impl From<ShippingAddress> for ShippingAddressPayload {
    fn from(address: ShippingAddress) -> Self {
        Self {
            postal_code: address.postal_code,
            country: address.country,
        }
    }
}

/// Create Checkout Session Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCheckoutSessionRequest {
    /// Requested cart lines
    pub items: Vec<LineItemPayload>,

    /// Optional destination
    pub shipping_address: Option<ShippingAddressPayload>,

    /// Session currency; only `NOK` is supported
    pub currency: String,

    /// Optional idempotency token, stored verbatim
    pub idempotency_key: Option<String>,
}

impl From<CreateCheckoutSessionRequest> for NewCheckoutSession {
    fn from(request: CreateCheckoutSessionRequest) -> Self {
        Self {
            items: request.items.into_iter().map(LineItemRequest::from).collect(),
            shipping_address: request.shipping_address.map(ShippingAddress::from),
            currency: request.currency,
            idempotency_key: request.idempotency_key,
        }
    }
}

/// Create Checkout Session Handler
#[endpoint(
    tags("checkout_sessions"),
    summary = "Create Checkout Session",
    responses(
        (status_code = StatusCode::CREATED, description = "Checkout session created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCheckoutSessionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .checkout
        .create(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/checkout_sessions/{}", session.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(session.into()))
}
