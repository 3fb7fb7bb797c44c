//! Cart pricing against the live catalog.

use std::sync::Arc;

use kasse::{
    pricing::{self, CartCalculation, LineItemRequest},
    shipping::ShippingAddress,
};

use crate::domain::{catalog::CatalogLookup, checkout::errors::CheckoutServiceError};

/// Prices carts: one batched catalog resolve, then the pure calculation.
///
/// Idempotent and side-effect free beyond the single catalog read.
#[derive(Clone)]
pub struct PricingCalculator {
    catalog: Arc<dyn CatalogLookup>,
}

impl PricingCalculator {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogLookup>) -> Self {
        Self { catalog }
    }

    /// Price the requested lines against the current catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be resolved or the pricing
    /// pass overflows.
    pub async fn calculate(
        &self,
        line_items: &[LineItemRequest],
        address: Option<&ShippingAddress>,
        selected_shipping: Option<&str>,
    ) -> Result<CartCalculation, CheckoutServiceError> {
        let skus: Vec<String> = line_items.iter().map(|item| item.sku.clone()).collect();

        let catalog = self.catalog.resolve(&skus).await?;

        Ok(pricing::calculate(
            line_items,
            &catalog,
            address,
            selected_shipping,
        )?)
    }
}
