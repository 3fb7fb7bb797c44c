//! Payment models.

/// Receipt for a confirmed token payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Provider-side payment intent id.
    pub payment_intent_id: String,
}

/// A hosted payment page stood up for manual payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedPaymentSession {
    /// Provider-side session id.
    pub id: String,

    /// URL the customer must visit to pay.
    pub url: String,
}

/// One display line on a hosted payment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub name: String,
    pub unit_amount: i64,
    pub quantity: u32,
}

/// Everything the hosted flow needs to present and reconcile a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedSessionRequest {
    /// Checkout session id, threaded through provider metadata.
    pub session_id: String,

    /// Currency the page charges in.
    pub currency: String,

    /// Cart lines to display.
    pub lines: Vec<DisplayLine>,

    /// Shipping, shown as its own line.
    pub shipping_amount: i64,
}
