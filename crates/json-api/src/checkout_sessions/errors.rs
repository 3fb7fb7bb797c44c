//! Errors

use salvo::http::StatusError;
use tracing::error;

use kasse_app::domain::checkout::CheckoutServiceError;

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::EmptyItems
        | CheckoutServiceError::NonPositiveQuantity
        | CheckoutServiceError::UnsupportedCurrency
        | CheckoutServiceError::NoUpdateFields => {
            StatusError::bad_request().brief(error.to_string())
        }
        CheckoutServiceError::NotFound => {
            StatusError::not_found().brief("Checkout session not found")
        }
        CheckoutServiceError::AlreadyCompleted => {
            StatusError::bad_request().brief("Checkout session already completed")
        }
        CheckoutServiceError::Storage(source) => {
            error!("session storage failed: {source}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Catalog(source) => {
            error!("catalog lookup failed: {source}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Pricing(source) => {
            error!("cart pricing failed: {source}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Payment(source) => {
            error!("payment failed: {source}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::OrderSink(source) => {
            error!("order persistence failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
