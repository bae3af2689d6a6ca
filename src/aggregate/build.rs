//! Output records from raw form input.

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::decimal::parse_decimal_to_base_units;
use crate::types::{AssetBundle, AssetId, OutputRecord};

/// One asset line as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    #[serde(flatten)]
    pub asset: AssetId,
    /// Decimal string in display units, e.g. "12.5"
    #[serde(default)]
    pub quantity: String,
    /// Decimals declared for this asset by the wallet holdings
    #[serde(default)]
    pub decimals: u8,
}

impl AssetEntry {
    pub fn new(asset: AssetId, quantity: impl Into<String>, decimals: u8) -> Self {
        Self {
            asset,
            quantity: quantity.into(),
            decimals,
        }
    }

    /// Entry keyed by a concatenated unit string
    pub fn from_unit(unit: &str, quantity: impl Into<String>, decimals: u8) -> Self {
        Self::new(AssetId::from_unit(unit), quantity, decimals)
    }

    fn is_blank(&self) -> bool {
        self.asset.policy_id.is_empty() || self.quantity.trim().is_empty()
    }
}

/// One destination as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputEntry {
    #[serde(default)]
    pub address: String,
    /// Principal currency amount in display units
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

impl OutputEntry {
    pub fn new(address: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            value: value.into(),
            assets: Vec::new(),
        }
    }

    pub fn with_asset(mut self, asset: AssetEntry) -> Self {
        self.assets.push(asset);
        self
    }

    /// Both fields empty. Whitespace counts as content.
    fn is_blank(&self) -> bool {
        self.address.is_empty() && self.value.is_empty()
    }
}

/// Build output records using the default configuration.
///
/// See [`build_outputs_with`].
pub fn build_outputs(entries: &[OutputEntry]) -> Vec<OutputRecord> {
    build_outputs_with(entries, &CodecConfig::default())
}

/// Build output records from form entries.
///
/// - Entries with neither address nor value are skipped
/// - The value is converted with `config.principal_decimals`
/// - Asset lines without an asset or quantity are skipped
/// - Each asset line is converted with its own decimals; repeated assets
///   within one entry are summed into the first occurrence
///
/// Output order follows the surviving entries.
pub fn build_outputs_with(entries: &[OutputEntry], config: &CodecConfig) -> Vec<OutputRecord> {
    entries
        .iter()
        .filter(|entry| !entry.is_blank())
        .map(|entry| {
            let mut assets = AssetBundle::new();
            for line in entry.assets.iter().filter(|line| !line.is_blank()) {
                let quantity = parse_decimal_to_base_units(&line.quantity, line.decimals);
                assets.add(line.asset.clone(), quantity, line.decimals);
            }

            OutputRecord {
                address: entry.address.clone(),
                value: parse_decimal_to_base_units(&entry.value, config.principal_decimals),
                assets,
            }
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
