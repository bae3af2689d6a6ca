//! Compact "1.5K" style rendering.
//!
//! Display only. The output is truncated and must never be parsed back into
//! an amount.

use num_bigint::BigUint;
use num_traits::Zero;

use super::pow10;
use crate::types::Quantity;

/// Default maximum fractional digits in compact output
pub const COMPACT_FRACTION_DIGITS: u8 = 2;

const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Render a quantity as a short magnitude-suffixed string.
///
/// The display value (`quantity / 10^decimals`) is bucketed by powers of
/// 1000 into no suffix, K, M, B or T, and shown with at most two fractional
/// digits with trailing zeros trimmed. Digits beyond that are truncated, so a
/// value never rounds up into the next suffix (999,999 is "999.99K", not
/// "1M"). Values of 1000T and above stay in T.
///
/// # Example
///
/// ```
/// use cardano_value_codec::decimal::format_compact;
/// use cardano_value_codec::types::Quantity;
///
/// assert_eq!(format_compact(&Quantity::from(1_500_000_000u64), 6), "1.5K");
/// assert_eq!(format_compact(&Quantity::from(2_000_000u64), 6), "2");
/// ```
pub fn format_compact(quantity: &Quantity, decimals: u8) -> String {
    format_compact_with(quantity, decimals, COMPACT_FRACTION_DIGITS)
}

/// [`format_compact`] with an explicit fractional digit limit
pub fn format_compact_with(quantity: &Quantity, decimals: u8, fraction_digits: u8) -> String {
    let magnitude = quantity.magnitude();
    let whole_units = magnitude / pow10(u32::from(decimals));
    let tier = suffix_tier(&whole_units);

    let divisor = pow10(u32::from(decimals) + 3 * tier as u32);
    let precision = pow10(u32::from(fraction_digits));
    let scaled = magnitude * &precision / divisor;

    let mut text = (&scaled / &precision).to_string();
    let fraction = &scaled % &precision;
    if !fraction.is_zero() {
        let padded = format!(
            "{:0>width$}",
            fraction.to_string(),
            width = usize::from(fraction_digits)
        );
        text.push('.');
        text.push_str(padded.trim_end_matches('0'));
    }

    if quantity.is_negative() && text != "0" {
        text.insert(0, '-');
    }
    text.push_str(SUFFIXES[tier]);
    text
}

/// Index into [`SUFFIXES`] for a whole-unit magnitude
fn suffix_tier(whole_units: &BigUint) -> usize {
    let digits = if whole_units.is_zero() {
        1
    } else {
        whole_units.to_string().len()
    };
    ((digits - 1) / 3).min(SUFFIXES.len() - 1)
}

// ============================================================================
// Unit Tests
// ============================================================================
