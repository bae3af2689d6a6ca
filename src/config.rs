//! Configuration for the value codec

use std::env;

use serde::Deserialize;

use crate::decimal::COMPACT_FRACTION_DIGITS;
use crate::types::PRINCIPAL_DECIMALS;

/// Tunables for formatting and output building.
///
/// The defaults are the chain's fixed values; overriding
/// `principal_decimals` is only meaningful for test networks that
/// denominate differently.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Decimals of the principal currency (lovelace → ADA)
    pub principal_decimals: u8,
    /// Maximum fractional digits shown by compact formatting
    pub compact_fraction_digits: u8,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            principal_decimals: PRINCIPAL_DECIMALS,
            compact_fraction_digits: COMPACT_FRACTION_DIGITS,
        }
    }
}

impl CodecConfig {
    /// Create a new configuration using environment variables
    ///
    /// Reads `CODEC_PRINCIPAL_DECIMALS` and `CODEC_COMPACT_FRACTION_DIGITS`;
    /// missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            principal_decimals: env_u8("CODEC_PRINCIPAL_DECIMALS")
                .unwrap_or(defaults.principal_decimals),
            compact_fraction_digits: env_u8("CODEC_COMPACT_FRACTION_DIGITS")
                .unwrap_or(defaults.compact_fraction_digits),
        }
    }

    /// Create a new configuration with custom values
    pub fn new(principal_decimals: u8, compact_fraction_digits: u8) -> Self {
        Self {
            principal_decimals,
            compact_fraction_digits,
        }
    }
}

fn env_u8(key: &str) -> Option<u8> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
