//! Conversions between the engine's `f64` arithmetic and `Decimal` money.

use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// Rounds a decimal amount to display precision, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Converts an unrounded `f64` into a display amount.
///
/// This is the only place valuation figures are rounded.
pub fn to_money(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(round_money)
        .ok_or_else(|| Error::Calculation(format!("{} is not representable as money", value)))
}

/// Converts an `f64` input into a `Decimal` without rounding it.
pub fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| Error::Calculation(format!("{} is not representable as a decimal", value)))
}
