//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use kasse_app::{
    context::AppContext,
    domain::checkout::{
        MockCheckoutService,
        models::{CheckoutSession, PricedLineItem, SessionStatus, ShippingAddress, ShippingOption},
    },
};

use crate::state::State;

/// Wire a mocked checkout service behind the given route.
pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    let app = AppContext {
        checkout: Arc::new(checkout),
    };

    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(app))))
            .push(route),
    )
}

/// A canonical one-line session priced to Norway with standard shipping.
pub(crate) fn make_session(id: &str) -> CheckoutSession {
    CheckoutSession {
        id: id.to_owned(),
        status: SessionStatus::Created,
        items: vec![PricedLineItem {
            sku: "A".to_owned(),
            name: "Genser".to_owned(),
            unit_price: 10_000,
            quantity: 1,
            vat_rate: Decimal::new(25, 2),
        }],
        shipping_address: Some(ShippingAddress {
            postal_code: "0150".to_owned(),
            country: "NO".to_owned(),
        }),
        shipping_options: vec![
            ShippingOption {
                id: "standard".to_owned(),
                label: "Standard levering".to_owned(),
                amount: 4_900,
            },
            ShippingOption {
                id: "express".to_owned(),
                label: "Ekspress levering".to_owned(),
                amount: 9_900,
            },
        ],
        selected_shipping: None,
        currency: "NOK".to_owned(),
        vat_rate: Decimal::new(25, 2),
        subtotal: 10_000,
        shipping_amount: 4_900,
        vat_amount: 2_500,
        grand_total: 17_400,
        messages: Vec::new(),
        idempotency_key: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
