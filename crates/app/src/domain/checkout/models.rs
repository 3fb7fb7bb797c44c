//! Checkout session models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use kasse::{
    pricing::{LineItemRequest, PricedLineItem},
    shipping::{ShippingAddress, ShippingOption},
};

/// Lifecycle states of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Freshly created, never updated.
    Created,

    /// Mutated at least once since creation.
    Updated,

    /// Paid and turned into an order; immutable from here on.
    Completed,
}

impl SessionStatus {
    /// The wire and storage representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Completed => "completed",
        }
    }
}

/// Raised when decoding an unknown stored status value.
#[derive(Debug, Error)]
#[error("unknown session status: {0}")]
pub struct UnknownStatusError(pub String);

impl std::str::FromStr for SessionStatus {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownStatusError(other.to_owned())),
        }
    }
}

/// The checkout session aggregate: a provisional, mutable cart-with-pricing
/// record that precedes a finalized order.
///
/// All derived monetary fields are replaced wholesale on every mutation, so
/// `grand_total == subtotal + shipping_amount + vat_amount` holds after any
/// persisted write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Opaque unique id, generated at creation and never reused.
    pub id: String,

    /// Lifecycle state.
    pub status: SessionStatus,

    /// Priced lines; never two entries for the same SKU.
    pub items: Vec<PricedLineItem>,

    /// Destination, when the caller has provided one.
    pub shipping_address: Option<ShippingAddress>,

    /// The menu the destination country offers; recomputed, never
    /// user-supplied.
    pub shipping_options: Vec<ShippingOption>,

    /// The caller's last explicit shipping choice. May transiently name an
    /// option the current menu does not contain; pricing then falls back to
    /// the default selection.
    pub selected_shipping: Option<String>,

    /// Fixed session currency.
    pub currency: String,

    /// Fixed jurisdiction VAT rate.
    pub vat_rate: Decimal,

    /// Sum of line totals, minor units.
    pub subtotal: i64,

    /// Shipping cost, minor units.
    pub shipping_amount: i64,

    /// VAT on the subtotal, minor units.
    pub vat_amount: i64,

    /// `subtotal + shipping_amount + vat_amount`, minor units.
    pub grand_total: i64,

    /// Warnings from the most recent pricing pass.
    pub messages: Vec<String>,

    /// Caller-supplied idempotency token. Advisory only: stored verbatim and
    /// never checked before payment runs.
    pub idempotency_key: String,

    /// Creation time.
    pub created_at: Timestamp,

    /// Last persisted mutation time.
    pub updated_at: Timestamp,
}

impl CheckoutSession {
    /// Whether the session has reached its terminal state.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Generate a fresh opaque session id.
    pub(crate) fn generate_id() -> String {
        format!("cs_{}", Uuid::now_v7().simple())
    }

    /// Apply a partial update, leaving absent fields untouched.
    pub(crate) fn apply(&mut self, update: SessionUpdate) {
        let SessionUpdate {
            status,
            items,
            shipping_address,
            shipping_options,
            selected_shipping,
            subtotal,
            shipping_amount,
            vat_amount,
            grand_total,
            messages,
            idempotency_key,
        } = update;

        if let Some(status) = status {
            self.status = status;
        }
        if let Some(items) = items {
            self.items = items;
        }
        if let Some(shipping_address) = shipping_address {
            self.shipping_address = Some(shipping_address);
        }
        if let Some(shipping_options) = shipping_options {
            self.shipping_options = shipping_options;
        }
        if let Some(selected_shipping) = selected_shipping {
            self.selected_shipping = Some(selected_shipping);
        }
        if let Some(subtotal) = subtotal {
            self.subtotal = subtotal;
        }
        if let Some(shipping_amount) = shipping_amount {
            self.shipping_amount = shipping_amount;
        }
        if let Some(vat_amount) = vat_amount {
            self.vat_amount = vat_amount;
        }
        if let Some(grand_total) = grand_total {
            self.grand_total = grand_total;
        }
        if let Some(messages) = messages {
            self.messages = messages;
        }
        if let Some(idempotency_key) = idempotency_key {
            self.idempotency_key = idempotency_key;
        }
    }
}

/// Input for creating a new checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckoutSession {
    /// Requested cart lines.
    pub items: Vec<LineItemRequest>,

    /// Optional destination.
    pub shipping_address: Option<ShippingAddress>,

    /// Requested session currency.
    pub currency: String,

    /// Optional idempotency token, stored verbatim.
    pub idempotency_key: Option<String>,
}

/// Caller-facing partial update of a session.
///
/// At least one field must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSessionUpdate {
    /// Replacement cart lines.
    pub items: Option<Vec<LineItemRequest>>,

    /// New explicit shipping selection.
    pub shipping_option: Option<String>,

    /// New destination.
    pub shipping_address: Option<ShippingAddress>,
}

impl CheckoutSessionUpdate {
    /// Whether the update carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_none() && self.shipping_option.is_none() && self.shipping_address.is_none()
    }
}

/// Input for completing a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteCheckoutSession {
    /// Pre-authorised payment token; absent means the hosted payment flow.
    pub payment_token: Option<String>,

    /// Customer email for the order.
    pub email: Option<String>,

    /// Customer name for the order.
    pub name: Option<String>,
}

/// Final totals echoed back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    /// Item subtotal, minor units.
    pub subtotal: i64,

    /// Shipping cost, minor units.
    pub shipping: i64,

    /// VAT amount, minor units.
    pub vat: i64,

    /// Grand total, minor units.
    pub grand_total: i64,
}

/// The outcome of a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCheckout {
    /// Id of the order the session produced.
    pub order_id: Uuid,

    /// Always [`SessionStatus::Completed`].
    pub status: SessionStatus,

    /// Final totals.
    pub total: CheckoutTotals,

    /// Session currency.
    pub currency: String,

    /// Hosted payment page, when the hosted flow was used.
    pub payment_url: Option<String>,
}

/// Store-level partial field set for a session update.
///
/// Absent fields keep their stored value; `updated_at` is always refreshed by
/// the store.
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    /// New lifecycle state.
    pub status: Option<SessionStatus>,

    /// Replacement priced lines.
    pub items: Option<Vec<PricedLineItem>>,

    /// Replacement destination.
    pub shipping_address: Option<ShippingAddress>,

    /// Replacement shipping menu.
    pub shipping_options: Option<Vec<ShippingOption>>,

    /// Replacement explicit selection.
    pub selected_shipping: Option<String>,

    /// Replacement subtotal.
    pub subtotal: Option<i64>,

    /// Replacement shipping cost.
    pub shipping_amount: Option<i64>,

    /// Replacement VAT amount.
    pub vat_amount: Option<i64>,

    /// Replacement grand total.
    pub grand_total: Option<i64>,

    /// Replacement warning list.
    pub messages: Option<Vec<String>>,

    /// Replacement idempotency token.
    pub idempotency_key: Option<String>,
}
