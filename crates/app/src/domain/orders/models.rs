//! Order models.

use jiff::Timestamp;
use uuid::Uuid;

use kasse::shipping::ShippingAddress;

/// A finalized order, created once payment has succeeded.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub status: String,
    pub total_amount: i64,
    pub currency: String,
    pub created_at: Timestamp,
}

/// Input for persisting a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Payment provider reference: the hosted payment session id, or the
    /// checkout session id when payment was confirmed by token.
    pub payment_reference: String,

    /// Confirmed payment intent, when the token flow was used.
    pub payment_intent_id: Option<String>,

    pub customer_email: String,
    pub customer_name: Option<String>,

    /// Grand total in minor units.
    pub total_amount: i64,

    pub currency: String,
    pub shipping_address: Option<ShippingAddress>,
}

/// One order line; stock is decremented by `quantity` when persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub sku: String,
    pub quantity: u32,
    pub unit_price: i64,
    pub currency: String,
}
