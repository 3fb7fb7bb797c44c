//! Stripe-backed payment delegate.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::payments::{
    delegate::PaymentDelegate,
    errors::PaymentError,
    models::{HostedPaymentSession, HostedSessionRequest, PaymentReceipt},
};

/// Configuration for the Stripe API.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (`sk_...`).
    pub secret_key: String,

    /// API base, e.g. `"https://api.stripe.com"`. Overridable for tests.
    pub api_base: String,

    /// Storefront base URL used to build hosted-payment return links.
    pub return_base_url: String,
}

/// HTTP client for the two completion strategies.
#[derive(Debug, Clone)]
pub struct StripeDelegate {
    config: StripeConfig,
    http: Client,
}

impl StripeDelegate {
    /// Create a new delegate from the given configuration.
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn post_form<T>(&self, path: &str, params: &[(String, String)]) -> Result<T, PaymentError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{path}", self.config.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentError::UnexpectedResponse(format!(
                "{path} failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PaymentDelegate for StripeDelegate {
    async fn confirm(
        &self,
        token: &str,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentReceipt, PaymentError> {
        // The delegated token stands in for a collected payment method; the
        // intent is created for the session total and confirmed immediately.
        let params = vec![
            ("amount".to_owned(), amount.to_string()),
            ("currency".to_owned(), currency.to_lowercase()),
            (
                "automatic_payment_methods[enabled]".to_owned(),
                "true".to_owned(),
            ),
            ("metadata[payment_token]".to_owned(), token.to_owned()),
        ];

        let intent: PaymentIntentResponse = self.post_form("/v1/payment_intents", &params).await?;

        let confirm_path = format!("/v1/payment_intents/{}/confirm", intent.id);
        let confirmed: PaymentIntentResponse = self.post_form(&confirm_path, &[]).await?;

        Ok(PaymentReceipt {
            payment_intent_id: confirmed.id,
        })
    }

    async fn create_hosted_session(
        &self,
        request: HostedSessionRequest,
    ) -> Result<HostedPaymentSession, PaymentError> {
        let currency = request.currency.to_lowercase();

        let mut params = vec![
            ("mode".to_owned(), "payment".to_owned()),
            (
                "success_url".to_owned(),
                format!(
                    "{}/return?session_id={{CHECKOUT_SESSION_ID}}&order_id={}",
                    self.config.return_base_url, request.session_id
                ),
            ),
            (
                "cancel_url".to_owned(),
                format!("{}/checkout?canceled=true", self.config.return_base_url),
            ),
            (
                "metadata[checkout_session_id]".to_owned(),
                request.session_id.clone(),
            ),
            ("payment_method_types[0]".to_owned(), "card".to_owned()),
        ];

        for (index, line) in request.lines.iter().enumerate() {
            params.push((
                format!("line_items[{index}][price_data][currency]"),
                currency.clone(),
            ));
            params.push((
                format!("line_items[{index}][price_data][product_data][name]"),
                line.name.clone(),
            ));
            params.push((
                format!("line_items[{index}][price_data][unit_amount]"),
                line.unit_amount.to_string(),
            ));
            params.push((
                format!("line_items[{index}][quantity]"),
                line.quantity.to_string(),
            ));
        }

        // Shipping is shown as its own line on the hosted page.
        let shipping_index = request.lines.len();

        params.push((
            format!("line_items[{shipping_index}][price_data][currency]"),
            currency,
        ));
        params.push((
            format!("line_items[{shipping_index}][price_data][product_data][name]"),
            "Shipping".to_owned(),
        ));
        params.push((
            format!("line_items[{shipping_index}][price_data][unit_amount]"),
            request.shipping_amount.to_string(),
        ));
        params.push((format!("line_items[{shipping_index}][quantity]"), "1".to_owned()));

        let session: HostedSessionResponse = self.post_form("/v1/checkout/sessions", &params).await?;

        let url = session
            .url
            .unwrap_or_else(|| format!("https://checkout.stripe.com/pay/{}", session.id));

        Ok(HostedPaymentSession {
            id: session.id,
            url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct HostedSessionResponse {
    id: String,
    url: Option<String>,
}
