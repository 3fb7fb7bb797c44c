//! Shipping menus and selection.
//!
//! Each destination country maps to a fixed menu of shipping options. A
//! destination without a menu ships nothing and costs nothing; the caller sees
//! an empty menu rather than an error.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// The only destination country with a shipping menu.
pub const NORWAY: &str = "NO";

/// The option id used when the caller has not made an explicit choice.
pub const DEFAULT_OPTION_ID: &str = "standard";

/// A selectable shipping option, priced in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Stable identifier, e.g. `"standard"`.
    pub id: String,

    /// Human-readable label.
    pub label: String,

    /// Price in minor units.
    pub amount: i64,
}

/// Minimal destination address: enough to pick a tax and shipping regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Destination postal code.
    pub postal_code: String,

    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// The fixed menu of options for one destination country.
pub type ShippingMenu = SmallVec<[ShippingOption; 2]>;

/// The shipping menu for a destination country.
///
/// Unsupported or absent destinations get an empty menu.
pub fn options_for_country(country: Option<&str>) -> ShippingMenu {
    match country {
        Some(NORWAY) => smallvec![
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
        _ => SmallVec::new(),
    }
}

/// Resolve the effective selection for a menu.
///
/// An explicit id wins when the menu contains it. An id the menu does not
/// contain is treated as no selection rather than an error, since address and
/// selection can be updated independently and be transiently inconsistent.
/// With no usable selection the option named [`DEFAULT_OPTION_ID`] applies,
/// if present.
pub fn select_option<'a>(
    menu: &'a [ShippingOption],
    selected: Option<&str>,
) -> Option<&'a ShippingOption> {
    selected
        .and_then(|id| menu.iter().find(|option| option.id == id))
        .or_else(|| menu.iter().find(|option| option.id == DEFAULT_OPTION_ID))
}
