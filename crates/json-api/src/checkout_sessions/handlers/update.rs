//! Update Checkout Session Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use kasse_app::domain::checkout::models::{
    CheckoutSessionUpdate, LineItemRequest, ShippingAddress,
};

use crate::{
    checkout_sessions::{
        errors::into_status_error,
        handlers::{
            create::{LineItemPayload, ShippingAddressPayload},
            get::CheckoutSessionResponse,
        },
    },
    extensions::*,
    state::State,
};

/// Update Checkout Session Request
///
/// At least one field must be present.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCheckoutSessionRequest {
    /// Replacement cart lines
    pub items: Option<Vec<LineItemPayload>>,

    /// New shipping option id
    pub shipping_option: Option<String>,

    /// New destination
    pub shipping_address: Option<ShippingAddressPayload>,
}

impl From<UpdateCheckoutSessionRequest> for CheckoutSessionUpdate {
    fn from(request: UpdateCheckoutSessionRequest) -> Self {
        Self {
            items: request
                .items
                .map(|items| items.into_iter().map(LineItemRequest::from).collect()),
            shipping_option: request.shipping_option,
            shipping_address: request.shipping_address.map(ShippingAddress::from),
        }
    }
}

/// Update Checkout Session Handler
///
/// Re-prices the session and replaces its derived monetary fields.
#[endpoint(
    tags("checkout_sessions"),
    summary = "Update Checkout Session",
    responses(
        (status_code = StatusCode::OK, description = "Checkout session updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Checkout session not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateCheckoutSessionRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let session = state
        .app
        .checkout
        .update(&id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}
