//! Human view of a hex asset name.

use serde::Serialize;
use tracing::debug;

use super::{AssetLabel, LABEL_HEX_LEN};
use crate::error::Result;

/// Punctuation allowed in a display name besides ASCII letters and digits
const DISPLAY_PUNCTUATION: &str = " /\\[]*<>(),.!?@+=%&$#^'\"|_-";

/// Decoded, read-only view of an asset name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedAssetName {
    /// Raw hex as given
    pub asset_name: String,
    /// UTF-8 (lossy) decode of the whole blob, label bytes included
    pub ascii: String,
    /// UTF-8 decode with a recognized label prefix stripped
    pub ascii_no_label: String,
    /// `ascii_no_label` if it is printable-safe, otherwise the raw hex
    pub display_name: String,
    /// `display_name` prefixed with `"(<label>) "` when labeled
    pub display_name_with_label: String,
    pub label: AssetLabel,
}

impl DecodedAssetName {
    /// Result for a blob that could not be decoded at all
    fn undecodable(asset_name: &str) -> Self {
        Self {
            asset_name: asset_name.to_string(),
            ascii: asset_name.to_string(),
            ascii_no_label: asset_name.to_string(),
            display_name: asset_name.to_string(),
            display_name_with_label: asset_name.to_string(),
            label: AssetLabel::Unlabeled,
        }
    }
}

/// Decode a hex asset name into label metadata and a display name.
///
/// Never fails. Malformed hex produces a result whose display fields are all
/// the raw input and whose label is [`AssetLabel::Unlabeled`].
///
/// # Example
///
/// ```
/// use cardano_value_codec::asset_name::{decode_asset_name, AssetClass};
///
/// let plain = decode_asset_name("68656c6c6f");
/// assert_eq!(plain.display_name, "hello");
/// assert!(!plain.label.is_labeled());
///
/// let nft = decode_asset_name("000de14068656c6c6f");
/// assert_eq!(nft.display_name, "hello");
/// assert_eq!(nft.display_name_with_label, "(222) hello");
/// assert_eq!(nft.label.class(), Some(AssetClass::Nft));
/// ```
pub fn decode_asset_name(asset_name: &str) -> DecodedAssetName {
    match try_decode(asset_name) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(asset_name, error = %err, "asset name not decodable, showing raw hex");
            DecodedAssetName::undecodable(asset_name)
        }
    }
}

fn try_decode(asset_name: &str) -> Result<DecodedAssetName> {
    let ascii = hex_to_text(asset_name)?;

    let label = AssetLabel::from_prefix(asset_name);
    let stripped = if label.is_labeled() {
        hex_to_text(&asset_name[LABEL_HEX_LEN..])?
    } else {
        String::new()
    };
    // A label with nothing after it shows the whole blob instead.
    let ascii_no_label = if stripped.is_empty() {
        ascii.clone()
    } else {
        stripped
    };

    let display_name = if is_display_safe(&ascii_no_label) {
        ascii_no_label.clone()
    } else {
        asset_name.to_string()
    };
    let display_name_with_label = match label.number() {
        Some(number) => format!("({}) {}", number, display_name),
        None => display_name.clone(),
    };

    Ok(DecodedAssetName {
        asset_name: asset_name.to_string(),
        ascii,
        ascii_no_label,
        display_name,
        display_name_with_label,
        label,
    })
}

fn hex_to_text(hex_str: &str) -> Result<String> {
    let bytes = hex::decode(hex_str)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_display_safe(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || DISPLAY_PUNCTUATION.contains(c))
}

// ============================================================================
// Unit Tests
// ============================================================================
