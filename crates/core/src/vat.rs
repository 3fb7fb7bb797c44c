//! VAT arithmetic on minor currency units.
//!
//! All money in this crate is integer minor units (øre); VAT is computed with
//! [`rust_decimal`] and rounded half away from zero back to minor units.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use thiserror::Error;

/// Errors specific to VAT calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VatError {
    /// The multiplication overflowed or could not be represented.
    #[error("VAT conversion overflowed or was not finite")]
    Conversion,
}

/// The fixed Norwegian VAT rate (25%).
pub fn norway_vat_rate() -> Decimal {
    Decimal::new(25, 2)
}

/// Calculate the VAT amount in minor units for a taxable base.
///
/// # Errors
///
/// Returns [`VatError::Conversion`] if the calculation overflows or cannot be
/// safely represented in minor units.
pub fn vat_of_minor(rate: Decimal, minor: i64) -> Result<i64, VatError> {
    let minor = Decimal::from_i64(minor).ok_or(VatError::Conversion)?;

    rate.checked_mul(minor)
        .ok_or(VatError::Conversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(VatError::Conversion)
}
