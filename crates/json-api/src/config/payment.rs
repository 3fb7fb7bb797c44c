//! Payment Config

use clap::Args;

use kasse_app::domain::payments::stripe::StripeConfig;

/// Stripe payment settings.
#[derive(Debug, Args)]
pub struct PaymentConfig {
    /// Stripe secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY")]
    pub stripe_secret_key: String,

    /// Stripe API base URL
    #[arg(long, env = "STRIPE_API_BASE", default_value = "https://api.stripe.com")]
    pub stripe_api_base: String,

    /// Storefront base URL used for hosted-payment return links
    #[arg(
        long,
        env = "CHECKOUT_RETURN_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub return_base_url: String,
}

impl PaymentConfig {
    /// Build the payment delegate configuration.
    #[must_use]
    pub fn stripe_config(&self) -> StripeConfig {
        StripeConfig {
            secret_key: self.stripe_secret_key.clone(),
            api_base: self.stripe_api_base.clone(),
            return_base_url: self.return_base_url.clone(),
        }
    }
}
