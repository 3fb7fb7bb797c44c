//! Complete Checkout Session Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kasse_app::domain::checkout::models::{CompleteCheckoutSession, CompletedCheckout};

use crate::{checkout_sessions::errors::into_status_error, extensions::*, state::State};

/// Complete Checkout Session Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompleteCheckoutSessionRequest {
    /// Pre-authorised payment token; absent means the hosted payment flow
    pub payment_token: Option<String>,

    /// Customer email for the order
    pub email: Option<String>,

    /// Customer name for the order
    pub name: Option<String>,
}

impl From<CompleteCheckoutSessionRequest> for CompleteCheckoutSession {
    fn from(request: CompleteCheckoutSessionRequest) -> Self {
        Self {
            payment_token: request.payment_token,
            email: request.email,
            name: request.name,
        }
    }
}

/// Checkout Totals Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutTotalsResponse {
    /// Item subtotal in minor units
    pub subtotal: i64,

    /// Shipping cost in minor units
    pub shipping: i64,

    /// VAT amount in minor units
    pub vat: i64,

    /// Grand total in minor units
    pub grand_total: i64,
}

/// Completed Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompletedCheckoutResponse {
    /// Id of the order the session produced
    pub order_id: Uuid,

    /// Always `completed`
    pub status: String,

    /// Final totals
    pub total: CheckoutTotalsResponse,

    /// Session currency
    pub currency: String,

    /// Hosted payment page, when the hosted flow was used
    pub payment_url: Option<String>,
}

impl From<CompletedCheckout> for CompletedCheckoutResponse {
    fn from(completed: CompletedCheckout) -> Self {
        Self {
            order_id: completed.order_id,
            status: completed.status.as_str().to_owned(),
            total: CheckoutTotalsResponse {
                subtotal: completed.total.subtotal,
                shipping: completed.total.shipping,
                vat: completed.total.vat,
                grand_total: completed.total.grand_total,
            },
            currency: completed.currency,
            payment_url: completed.payment_url,
        }
    }
}

/// Complete Checkout Session Handler
///
/// Takes payment, persists the order and marks the session terminal.
#[endpoint(
    tags("checkout_sessions"),
    summary = "Complete Checkout Session",
    responses(
        (status_code = StatusCode::OK, description = "Checkout session completed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Checkout session already completed"),
        (status_code = StatusCode::NOT_FOUND, description = "Checkout session not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<CompleteCheckoutSessionRequest>,
    depot: &mut Depot,
) -> Result<Json<CompletedCheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let completed = state
        .app
        .checkout
        .complete(&id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(completed.into()))
}
