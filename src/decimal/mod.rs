//! Lossless base-unit ⇄ decimal string conversion.
//!
//! ## Overview
//!
//! Token amounts are integers in base units. Humans read and type them as
//! decimal strings scaled by `10^decimals`. Every conversion in this module
//! is done on digit strings and big integers; no `f64` is involved.
//!
//! ## Round Trip
//!
//! For every non-negative quantity `q` and decimals `d`:
//!
//! ```
//! use cardano_value_codec::decimal::{format_with_decimals, parse_decimal_to_base_units};
//! use cardano_value_codec::types::Quantity;
//!
//! let q: Quantity = "123456789012345678901234567".parse().unwrap();
//! let shown = format_with_decimals(&q, 8, false);
//! assert_eq!(shown.combined, "1,234,567,890,123,456,789.01234567");
//! assert_eq!(parse_decimal_to_base_units(&shown.combined, 8), q);
//! ```
//!
//! ## Functions
//!
//! - [`format_grouped`]: Thousands separators on a digit string
//! - [`format_with_decimals`]: Split into integer and fraction parts
//! - [`format_compact`]: Lossy "1.5K" style display
//! - [`parse_decimal_to_base_units`]: Human input back to base units
//! - [`to_decimal`]: Interop with `rust_decimal` for bounded values

mod compact;
mod format;
mod parse;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

pub use compact::{format_compact, format_compact_with, COMPACT_FRACTION_DIGITS};
pub use format::{format_grouped, format_with_decimals, FormattedQuantity};
pub use parse::parse_decimal_to_base_units;

use crate::types::Quantity;

/// `10^exponent` as a big integer
pub(crate) fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u8).pow(exponent)
}

/// Convert a base-unit quantity to a `rust_decimal::Decimal`
///
/// The conversion is exact: the quantity becomes the mantissa and
/// `decimals` the scale.
///
/// # Returns
///
/// * `Some(Decimal)` - The display-unit value
/// * `None` - If the quantity exceeds the 96-bit mantissa or `decimals > 28`
///
/// # Example
///
/// ```
/// use cardano_value_codec::decimal::to_decimal;
/// use cardano_value_codec::types::Quantity;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ada = to_decimal(&Quantity::from(1_500_000u64), 6).unwrap();
/// assert_eq!(ada, Decimal::from_str("1.5").unwrap());
/// ```
pub fn to_decimal(quantity: &Quantity, decimals: u8) -> Option<Decimal> {
    let mantissa = quantity.as_bigint().to_i128()?;
    Decimal::try_from_i128_with_scale(mantissa, u32::from(decimals)).ok()
}

// ============================================================================
// Unit Tests
// ============================================================================
