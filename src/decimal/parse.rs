//! Human decimal input → base units.

use num_bigint::BigUint;
use tracing::trace;

use super::pow10;
use crate::types::Quantity;

/// Convert a human-entered decimal string to base units.
///
/// Every character other than ASCII digits and `.` is dropped first, so
/// `"1,234.5 ADA"` reads as `1234.5`. Only the first `.` is a decimal point;
/// anything from a second `.` onward is ignored. The magnitude is scaled by
/// `10^decimals` and rounded half away from zero on the first discarded
/// digit.
///
/// Never fails: empty or digit-free input yields zero.
///
/// # Example
///
/// ```
/// use cardano_value_codec::decimal::parse_decimal_to_base_units;
/// use cardano_value_codec::types::Quantity;
///
/// assert_eq!(parse_decimal_to_base_units("1.5", 6), Quantity::from(1_500_000u64));
/// assert_eq!(parse_decimal_to_base_units("1,000", 0), Quantity::from(1_000u64));
/// assert_eq!(parse_decimal_to_base_units("0.125", 2), Quantity::from(13u64));
/// assert_eq!(parse_decimal_to_base_units("", 6), Quantity::zero());
/// ```
pub fn parse_decimal_to_base_units(input: &str, decimals: u8) -> Quantity {
    let sanitized: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if sanitized.len() != input.len() {
        trace!(input, sanitized = %sanitized, "dropped non-numeric characters");
    }

    let mut parts = sanitized.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    let scale = usize::from(decimals);
    let kept = &fraction[..fraction.len().min(scale)];

    let whole_units = BigUint::parse_bytes(whole.as_bytes(), 10).unwrap_or_default();
    let fraction_units = BigUint::parse_bytes(kept.as_bytes(), 10).unwrap_or_default()
        * pow10((scale - kept.len()) as u32);

    let mut base_units = whole_units * pow10(u32::from(decimals)) + fraction_units;
    if fraction.as_bytes().get(scale).is_some_and(|digit| *digit >= b'5') {
        base_units += 1u32;
    }

    Quantity::from(base_units)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str, decimals: u8) -> String {
        parse_decimal_to_base_units(input, decimals).to_string()
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("1", 6), "1000000");
        assert_eq!(parse("1.0", 6), "1000000");
        assert_eq!(parse("1.234560", 6), "1234560");
        assert_eq!(parse("0.000001", 6), "1");
        assert_eq!(parse(".5", 6), "500000");
        assert_eq!(parse("5.", 6), "5000000");
        assert_eq!(parse("42", 0), "42");
    }

    #[test]
    fn test_parse_empty_and_junk() {
        assert_eq!(parse("", 6), "0");
        assert_eq!(parse(".", 6), "0");
        assert_eq!(parse("abc", 6), "0");
        assert_eq!(parse("   ", 0), "0");
    }

    #[test]
    fn test_parse_strips_separators() {
        assert_eq!(parse("1,234,567.89", 2), "123456789");
        assert_eq!(parse(" 12 ADA", 6), "12000000");
        // The sign is not a digit and is dropped
        assert_eq!(parse("-3", 0), "3");
    }

    #[test]
    fn test_parse_second_point_ignored() {
        assert_eq!(parse("1.2.3", 1), "12");
        assert_eq!(parse("1..9", 1), "10");
    }

    #[test]
    fn test_parse_rounds_half_away_from_zero() {
        assert_eq!(parse("0.5", 0), "1");
        assert_eq!(parse("0.4999", 0), "0");
        assert_eq!(parse("2.5", 0), "3");
        assert_eq!(parse("1.0000005", 6), "1000001");
        assert_eq!(parse("1.0000004", 6), "1000000");
        assert_eq!(parse("9.995", 2), "1000");
    }

    #[test]
    fn test_parse_beyond_u64() {
        let digits = "123456789012345678901234567890";
        assert_eq!(parse(digits, 8), format!("{}00000000", digits));
    }
}
