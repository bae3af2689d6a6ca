//! Exact decimal rendering of base-unit quantities.

use serde::Serialize;

use crate::types::Quantity;

const GROUP_SEPARATOR: char = ',';

/// A quantity split for display.
///
/// `combined` is `integer_part` and `fraction_part` joined by `.`, or just
/// `integer_part` when there is no fraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedQuantity {
    /// Sign and comma-grouped whole units, e.g. "-1,234"
    pub integer_part: String,
    /// Exactly `decimals` digits, or empty
    pub fraction_part: String,
    pub combined: String,
}

impl FormattedQuantity {
    fn zero() -> Self {
        Self {
            integer_part: "0".to_string(),
            fraction_part: String::new(),
            combined: "0".to_string(),
        }
    }
}

/// Insert a `,` every three digits of the integer portion.
///
/// A leading `-` and any `.fraction` suffix pass through untouched.
/// Leading zeros of the integer portion are collapsed, and empty or
/// all-zero input yields `"0"`.
///
/// # Example
///
/// ```
/// use cardano_value_codec::decimal::format_grouped;
///
/// assert_eq!(format_grouped("1234567"), "1,234,567");
/// assert_eq!(format_grouped("-1234.5678"), "-1,234.5678");
/// assert_eq!(format_grouped(""), "0");
/// ```
pub fn format_grouped(digits: &str) -> String {
    let trimmed = digits.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    if integer == "0" && fraction.is_none() {
        return "0".to_string();
    }

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = integer.len();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Split a base-unit quantity into display parts at `decimals`.
///
/// # Arguments
///
/// * `quantity` - Amount in base units
/// * `decimals` - Number of fractional digits in display units
/// * `skip_zero_to_empty` - Render an exact zero as `"0"` instead of `"0.000000"`
///
/// Negative quantities keep their sign on `integer_part` and `combined`.
///
/// # Example
///
/// ```
/// use cardano_value_codec::decimal::format_with_decimals;
/// use cardano_value_codec::types::Quantity;
///
/// let shown = format_with_decimals(&Quantity::from(1_234_560u64), 6, false);
/// assert_eq!(shown.integer_part, "1");
/// assert_eq!(shown.fraction_part, "234560");
/// assert_eq!(shown.combined, "1.234560");
/// ```
pub fn format_with_decimals(
    quantity: &Quantity,
    decimals: u8,
    skip_zero_to_empty: bool,
) -> FormattedQuantity {
    if skip_zero_to_empty && quantity.is_zero() {
        return FormattedQuantity::zero();
    }

    let digits = quantity.magnitude().to_string();
    let scale = usize::from(decimals);

    let (whole, fraction_part) = if scale == 0 {
        (digits.as_str(), String::new())
    } else if digits.len() > scale {
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        (whole, fraction.to_string())
    } else {
        ("0", format!("{:0>width$}", digits, width = scale))
    };

    let sign = if quantity.is_negative() { "-" } else { "" };
    let integer_part = format!("{}{}", sign, format_grouped(whole));
    let combined = if fraction_part.is_empty() {
        integer_part.clone()
    } else {
        format!("{}.{}", integer_part, fraction_part)
    };

    FormattedQuantity {
        integer_part,
        fraction_part,
        combined,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
