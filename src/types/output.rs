//! Transaction output records and their flattened totals.

use serde::{Deserialize, Serialize};

use super::{AssetBundle, Quantity};

/// One destination of a transaction.
///
/// Records are built from user form input or from a parsed transaction and
/// are treated as immutable values: aggregation always produces new records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Destination address (not validated here)
    pub address: String,

    /// Principal currency amount in base units (lovelace)
    pub value: Quantity,

    /// Native assets carried by this output
    #[serde(default)]
    pub assets: AssetBundle,
}

impl OutputRecord {
    pub fn new(address: impl Into<String>, value: Quantity) -> Self {
        Self {
            address: address.into(),
            value,
            assets: AssetBundle::new(),
        }
    }

    pub fn with_assets(mut self, assets: AssetBundle) -> Self {
        self.assets = assets;
        self
    }
}

/// Sum of principal value and per-asset quantities across many outputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlattenedTotals {
    pub value: Quantity,
    pub assets: AssetBundle,
}
