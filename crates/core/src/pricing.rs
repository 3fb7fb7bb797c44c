//! Cart pricing.
//!
//! [`calculate`] joins requested line items against a catalog snapshot and
//! produces priced lines, shipping, VAT and a grand total. It is a pure
//! function: the batched catalog resolve happens one layer up so that every
//! line in a cart is priced against the same snapshot.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    currency::SESSION_CURRENCY,
    shipping::{self, ShippingAddress, ShippingMenu},
    vat::{self, VatError},
};

/// A requested cart line: a SKU and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Product SKU.
    pub sku: String,

    /// Requested quantity; must be positive.
    pub quantity: u32,
}

/// A catalog snapshot entry that line items are priced against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    /// Product SKU.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Unit price in minor units.
    pub unit_price: i64,

    /// ISO-4217 currency the product is priced in.
    pub currency: String,

    /// Units currently in stock.
    pub stock: u32,
}

/// A priced cart line, derived from a request joined against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLineItem {
    /// Product SKU.
    pub sku: String,

    /// Display name at calculation time.
    pub name: String,

    /// Unit price in minor units at calculation time.
    pub unit_price: i64,

    /// Quantity, clamped down to available stock where necessary.
    pub quantity: u32,

    /// Per-line VAT rate; zero for products priced outside the session
    /// currency.
    pub vat_rate: Decimal,
}

/// The result of one pricing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CartCalculation {
    /// Priced lines, one per distinct SKU, in request order.
    pub items: Vec<PricedLineItem>,

    /// Sum of `unit_price * quantity` over `items`, minor units.
    pub subtotal: i64,

    /// Cost of the effective shipping selection, minor units.
    pub shipping_amount: i64,

    /// VAT on the subtotal, minor units.
    pub vat_amount: i64,

    /// `subtotal + shipping_amount + vat_amount`.
    pub grand_total: i64,

    /// The menu the destination country offers.
    pub shipping_options: ShippingMenu,

    /// The effective selection the shipping amount was priced with.
    pub selected_shipping: Option<String>,

    /// Human-readable warnings accumulated during the pass.
    pub messages: Vec<String>,
}

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A line or total exceeded what minor units can represent.
    #[error("cart total overflowed")]
    Overflow,

    /// Wrapped VAT conversion error.
    #[error(transparent)]
    Vat(#[from] VatError),
}

/// Price a cart against a catalog snapshot.
///
/// Rules:
///
/// - SKUs missing from the snapshot are dropped and recorded as a message;
///   they never abort the pass.
/// - Quantities above available stock are clamped down (never up) with a
///   message; zero stock yields a zero-quantity line that is kept so callers
///   can see the shortfall.
/// - A repeated SKU replaces the earlier line rather than appending.
/// - VAT is `round(subtotal * rate)` at the fixed Norwegian rate, half away
///   from zero on minor units.
/// - Shipping comes from the destination country's menu via
///   [`shipping::select_option`]; no menu means zero shipping.
///
/// Calling this twice with identical inputs yields identical output.
///
/// # Errors
///
/// Returns [`PricingError`] when a line total, the subtotal or the VAT amount
/// overflows.
pub fn calculate(
    line_items: &[LineItemRequest],
    catalog: &FxHashMap<String, CatalogProduct>,
    address: Option<&ShippingAddress>,
    selected_shipping: Option<&str>,
) -> Result<CartCalculation, PricingError> {
    let mut messages = Vec::new();
    let mut items: Vec<PricedLineItem> = Vec::with_capacity(line_items.len());

    for request in line_items {
        let Some(product) = catalog.get(&request.sku) else {
            messages.push(format!("Product {} not found", request.sku));
            continue;
        };

        let mut quantity = request.quantity;

        if quantity > product.stock {
            messages.push(format!(
                "Insufficient stock for {}. Available: {}",
                product.name, product.stock
            ));
            quantity = product.stock;
        }

        let vat_rate = if product.currency == SESSION_CURRENCY {
            vat::norway_vat_rate()
        } else {
            Decimal::ZERO
        };

        let line = PricedLineItem {
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity,
            vat_rate,
        };

        // Last write for a SKU replaces the earlier line.
        if let Some(existing) = items.iter_mut().find(|item| item.sku == line.sku) {
            *existing = line;
        } else {
            items.push(line);
        }
    }

    let subtotal = items
        .iter()
        .try_fold(0_i64, |acc, item| {
            let line_total = item.unit_price.checked_mul(i64::from(item.quantity))?;

            acc.checked_add(line_total)
        })
        .ok_or(PricingError::Overflow)?;

    let shipping_options = shipping::options_for_country(address.map(|a| a.country.as_str()));
    let selected = shipping::select_option(&shipping_options, selected_shipping);
    let shipping_amount = selected.map_or(0, |option| option.amount);
    let selected_shipping = selected.map(|option| option.id.clone());

    let vat_amount = vat::vat_of_minor(vat::norway_vat_rate(), subtotal)?;

    let grand_total = subtotal
        .checked_add(shipping_amount)
        .and_then(|total| total.checked_add(vat_amount))
        .ok_or(PricingError::Overflow)?;

    Ok(CartCalculation {
        items,
        subtotal,
        shipping_amount,
        vat_amount,
        grand_total,
        shipping_options,
        selected_shipping,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures;

    use super::*;

    fn request(sku: &str, quantity: u32) -> LineItemRequest {
        LineItemRequest {
            sku: sku.to_owned(),
            quantity,
        }
    }

    fn norway() -> ShippingAddress {
        ShippingAddress {
            postal_code: "0150".to_owned(),
            country: "NO".to_owned(),
        }
    }

    #[test]
    fn single_line_to_norway_with_default_shipping() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 10)]);

        let calculation = calculate(&[request("A", 1)], &catalog, Some(&norway()), None)?;

        assert_eq!(calculation.subtotal, 10_000);
        assert_eq!(calculation.shipping_amount, 4_900);
        assert_eq!(calculation.vat_amount, 2_500);
        assert_eq!(calculation.grand_total, 17_400);
        assert_eq!(calculation.selected_shipping.as_deref(), Some("standard"));
        assert!(calculation.messages.is_empty(), "no warnings expected");

        Ok(())
    }

    #[test]
    fn express_shipping_changes_only_the_shipping_amount() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 10)]);

        let standard = calculate(&[request("A", 1)], &catalog, Some(&norway()), None)?;
        let express = calculate(&[request("A", 1)], &catalog, Some(&norway()), Some("express"))?;

        assert_eq!(express.items, standard.items, "items must be unchanged");
        assert_eq!(express.shipping_amount, 9_900);
        assert_eq!(express.grand_total, 10_000 + 9_900 + 2_500);

        Ok(())
    }

    #[test]
    fn unknown_sku_is_dropped_with_a_message() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 10)]);

        let calculation = calculate(
            &[request("A", 1), request("GHOST", 2)],
            &catalog,
            Some(&norway()),
            None,
        )?;

        assert_eq!(calculation.items.len(), 1);
        assert_eq!(
            calculation.messages,
            vec!["Product GHOST not found".to_owned()]
        );

        Ok(())
    }

    #[test]
    fn quantity_is_clamped_to_available_stock() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 2)]);

        let calculation = calculate(&[request("A", 5)], &catalog, Some(&norway()), None)?;

        let line = calculation.items.first().expect("expected a priced line");

        assert_eq!(line.quantity, 2);
        assert_eq!(calculation.subtotal, 20_000);
        assert_eq!(
            calculation.messages,
            vec!["Insufficient stock for Genser. Available: 2".to_owned()]
        );

        Ok(())
    }

    #[test]
    fn zero_stock_keeps_a_zero_quantity_line() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 0)]);

        let calculation = calculate(&[request("A", 1)], &catalog, None, None)?;

        let line = calculation.items.first().expect("expected a priced line");

        assert_eq!(line.quantity, 0);
        assert_eq!(calculation.subtotal, 0);
        assert_eq!(
            calculation.messages,
            vec!["Insufficient stock for Genser. Available: 0".to_owned()]
        );

        Ok(())
    }

    #[test]
    fn repeated_sku_replaces_the_earlier_line() -> TestResult {
        let catalog = fixtures::catalog([
            fixtures::product("A", "Genser", 10_000, 10),
            fixtures::product("B", "Lue", 5_000, 10),
        ]);

        let calculation = calculate(
            &[request("A", 1), request("B", 1), request("A", 3)],
            &catalog,
            None,
            None,
        )?;

        assert_eq!(calculation.items.len(), 2, "SKUs must stay unique");

        let line_a = calculation
            .items
            .iter()
            .find(|item| item.sku == "A")
            .expect("expected line A");

        assert_eq!(line_a.quantity, 3);
        assert_eq!(calculation.subtotal, 3 * 10_000 + 5_000);

        Ok(())
    }

    #[test]
    fn unsupported_country_ships_nothing() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 10)]);

        let address = ShippingAddress {
            postal_code: "11111".to_owned(),
            country: "SE".to_owned(),
        };

        let calculation = calculate(&[request("A", 1)], &catalog, Some(&address), Some("express"))?;

        assert!(calculation.shipping_options.is_empty());
        assert_eq!(calculation.shipping_amount, 0);
        assert_eq!(calculation.selected_shipping, None);
        assert_eq!(calculation.grand_total, 10_000 + 2_500);

        Ok(())
    }

    #[test]
    fn unknown_selection_falls_back_to_standard() -> TestResult {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", 10_000, 10)]);

        let calculation = calculate(
            &[request("A", 1)],
            &catalog,
            Some(&norway()),
            Some("overnight"),
        )?;

        assert_eq!(calculation.shipping_amount, 4_900);
        assert_eq!(calculation.selected_shipping.as_deref(), Some("standard"));

        Ok(())
    }

    #[test]
    fn foreign_currency_products_carry_zero_line_vat_rate() -> TestResult {
        let mut product = fixtures::product("USB", "Kabel", 1_000, 10);
        product.currency = "USD".to_owned();

        let catalog = fixtures::catalog([product]);

        let calculation = calculate(&[request("USB", 1)], &catalog, None, None)?;

        let line = calculation.items.first().expect("expected a priced line");

        assert_eq!(line.vat_rate, rust_decimal::Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn calculation_is_idempotent() -> TestResult {
        let catalog = fixtures::catalog([
            fixtures::product("A", "Genser", 10_000, 2),
            fixtures::product("B", "Lue", 5_000, 10),
        ]);

        let requests = [request("A", 5), request("B", 1), request("GHOST", 1)];

        let first = calculate(&requests, &catalog, Some(&norway()), Some("express"))?;
        let second = calculate(&requests, &catalog, Some(&norway()), Some("express"))?;

        assert_eq!(first, second, "identical inputs must price identically");

        Ok(())
    }

    #[test]
    fn grand_total_is_the_sum_of_its_parts() -> TestResult {
        let catalog = fixtures::catalog([
            fixtures::product("A", "Genser", 10_000, 10),
            fixtures::product("B", "Lue", 4_999, 10),
        ]);

        let calculation = calculate(
            &[request("A", 2), request("B", 3)],
            &catalog,
            Some(&norway()),
            Some("express"),
        )?;

        assert_eq!(
            calculation.grand_total,
            calculation.subtotal + calculation.shipping_amount + calculation.vat_amount
        );

        Ok(())
    }

    #[test]
    fn overflowing_line_total_returns_error() {
        let catalog = fixtures::catalog([fixtures::product("A", "Genser", i64::MAX, 10)]);

        let result = calculate(&[request("A", 2)], &catalog, None, None);

        assert!(matches!(result, Err(PricingError::Overflow)));
    }
}
