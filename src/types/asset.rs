//! Native token identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MAX_ASSET_NAME_HEX_LEN, POLICY_ID_HEX_LEN};
use crate::asset_name::{decode_asset_name, DecodedAssetName};
use crate::error::{CodecError, Result};

/// The (policy id, asset name) pair that uniquely names a native token.
///
/// Both halves are hex strings. The policy id is 28 bytes (56 hex chars);
/// the asset name is 0 to 32 bytes.
///
/// ## Example
///
/// ```
/// use cardano_value_codec::types::AssetId;
///
/// let policy = "a".repeat(56);
/// let id = AssetId::new(&policy, "68656c6c6f").unwrap();
/// assert_eq!(id.unit(), format!("{}68656c6c6f", policy));
/// assert_eq!(AssetId::from_unit(&id.unit()), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetId {
    /// Minting policy hash, hex encoded
    pub policy_id: String,

    /// Asset name bytes, hex encoded (may be empty)
    pub asset_name: String,
}

impl AssetId {
    /// Create a validated identifier
    ///
    /// Both parts are checked for hex alphabet and length and are
    /// normalized to lowercase.
    ///
    /// # Errors
    ///
    /// * [`CodecError::InvalidPolicyId`] - not exactly 56 hex characters
    /// * [`CodecError::InvalidAssetName`] - odd length, over 64 characters, or not hex
    pub fn new(policy_id: &str, asset_name: &str) -> Result<Self> {
        if policy_id.len() != POLICY_ID_HEX_LEN || !is_hex(policy_id) {
            return Err(CodecError::InvalidPolicyId(policy_id.to_string()));
        }
        if asset_name.len() > MAX_ASSET_NAME_HEX_LEN
            || asset_name.len() % 2 != 0
            || !is_hex(asset_name)
        {
            return Err(CodecError::InvalidAssetName(asset_name.to_string()));
        }

        Ok(Self {
            policy_id: policy_id.to_ascii_lowercase(),
            asset_name: asset_name.to_ascii_lowercase(),
        })
    }

    /// Split a concatenated unit string (`policy_id ++ asset_name`).
    ///
    /// Lenient: no validation is performed, and a unit shorter than a policy
    /// id is taken as a bare policy id with an empty name.
    pub fn from_unit(unit: &str) -> Self {
        match (unit.get(..POLICY_ID_HEX_LEN), unit.get(POLICY_ID_HEX_LEN..)) {
            (Some(policy_id), Some(asset_name)) => Self {
                policy_id: policy_id.to_string(),
                asset_name: asset_name.to_string(),
            },
            _ => Self {
                policy_id: unit.to_string(),
                asset_name: String::new(),
            },
        }
    }

    /// Concatenated unit string
    pub fn unit(&self) -> String {
        format!("{}{}", self.policy_id, self.asset_name)
    }

    /// Human view of the asset name
    pub fn decoded_name(&self) -> DecodedAssetName {
        decode_asset_name(&self.asset_name)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.policy_id, self.asset_name)
    }
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}
