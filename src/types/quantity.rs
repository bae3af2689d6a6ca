//! Arbitrary-precision base-unit quantity.
//!
//! Token supplies with 8 decimals routinely exceed `u64`, so quantities are
//! backed by [`BigInt`]. Arithmetic can never overflow and never goes
//! through floating point.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, ParseBigIntError};
use num_traits::{Signed, Zero};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An exact integer amount in base units.
///
/// Signed so that display deltas (e.g. a balance change) can be represented;
/// output values and asset quantities are non-negative in practice.
///
/// ## Example
///
/// ```
/// use cardano_value_codec::types::Quantity;
///
/// let a = Quantity::from(5u64);
/// let b: Quantity = "7".parse().unwrap();
/// assert_eq!(a + b, Quantity::from(12u64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(BigInt);

impl Quantity {
    /// The zero quantity
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value, without the sign
    pub fn magnitude(&self) -> &BigUint {
        self.0.magnitude()
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<BigInt> for Quantity {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<BigUint> for Quantity {
    fn from(value: BigUint) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u128> for Quantity {
    fn from(value: u128) -> Self {
        Self(BigInt::from(value))
    }
}

/// Parses a plain base-10 integer ("-12", "1000000").
///
/// This is the strict form; human decimal input goes through
/// [`crate::decimal::parse_decimal_to_base_units`].
impl FromStr for Quantity {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Quantity> for Quantity {
    type Output = Quantity;

    fn add(self, rhs: &'a Quantity) -> Quantity {
        Quantity(self.0 + &rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl<'a> AddAssign<&'a Quantity> for Quantity {
    fn add_assign(&mut self, rhs: &'a Quantity) {
        self.0 += &rhs.0;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), |acc, q| acc + q)
    }
}

impl<'a> Sum<&'a Quantity> for Quantity {
    fn sum<I: Iterator<Item = &'a Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), |acc, q| acc + q)
    }
}

// ============================================================================
// Serde
// ============================================================================

// Serialized as a decimal string: JSON numbers lose precision past 2^53.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityRepr {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match QuantityRepr::deserialize(deserializer)? {
            QuantityRepr::Text(text) => text.parse().map_err(D::Error::custom),
            QuantityRepr::Unsigned(value) => Ok(Quantity::from(value)),
            QuantityRepr::Signed(value) => Ok(Quantity::from(value)),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
