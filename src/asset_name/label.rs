//! CIP-67 label prefix encoding and classification.

use serde::Serialize;

use super::crc8;

/// Length of the label prefix in hex characters (4 bytes)
pub const LABEL_HEX_LEN: usize = 8;

// ============================================================================
// AssetClass
// ============================================================================

/// Token standard signalled by a known label number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetClass {
    /// (100) Reference NFT holding metadata for a user token
    Reference,
    /// (222) Non-fungible user token
    Nft,
    /// (333) Fungible user token
    FungibleToken,
    /// (444) Rich fungible token
    RichFungibleToken,
    /// (500) Royalty information token
    Royalty,
}

impl AssetClass {
    /// Classify a label number; `None` for numbers outside the table
    pub fn from_label(number: u16) -> Option<Self> {
        match number {
            100 => Some(AssetClass::Reference),
            222 => Some(AssetClass::Nft),
            333 => Some(AssetClass::FungibleToken),
            444 => Some(AssetClass::RichFungibleToken),
            500 => Some(AssetClass::Royalty),
            _ => None,
        }
    }

    pub fn label(self) -> u16 {
        match self {
            AssetClass::Reference => 100,
            AssetClass::Nft => 222,
            AssetClass::FungibleToken => 333,
            AssetClass::RichFungibleToken => 444,
            AssetClass::Royalty => 500,
        }
    }

    /// Short tag shown next to asset names ("ref", "nft", "ft", "rft", "royalty")
    pub fn tag(self) -> &'static str {
        match self {
            AssetClass::Reference => "ref",
            AssetClass::Nft => "nft",
            AssetClass::FungibleToken => "ft",
            AssetClass::RichFungibleToken => "rft",
            AssetClass::Royalty => "royalty",
        }
    }
}

// ============================================================================
// AssetLabel
// ============================================================================

/// Outcome of looking for a label prefix.
///
/// `Unlabeled` covers both "no prefix" and "prefix with a bad checksum";
/// neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssetLabel {
    Labeled {
        number: u16,
        class: Option<AssetClass>,
    },
    #[default]
    Unlabeled,
}

impl AssetLabel {
    pub fn from_number(number: u16) -> Self {
        AssetLabel::Labeled {
            number,
            class: AssetClass::from_label(number),
        }
    }

    /// Inspect the first [`LABEL_HEX_LEN`] characters of an asset name
    pub fn from_prefix(asset_name: &str) -> Self {
        asset_name
            .get(..LABEL_HEX_LEN)
            .and_then(decode_label)
            .map_or(AssetLabel::Unlabeled, AssetLabel::from_number)
    }

    pub fn number(&self) -> Option<u16> {
        match self {
            AssetLabel::Labeled { number, .. } => Some(*number),
            AssetLabel::Unlabeled => None,
        }
    }

    pub fn class(&self) -> Option<AssetClass> {
        match self {
            AssetLabel::Labeled { class, .. } => *class,
            AssetLabel::Unlabeled => None,
        }
    }

    pub fn is_labeled(&self) -> bool {
        matches!(self, AssetLabel::Labeled { .. })
    }
}

// ============================================================================
// Prefix codec
// ============================================================================

/// Decode an 8-hex-char label prefix to its label number.
///
/// # Returns
///
/// * `Some(number)` - Well-formed prefix with a matching checksum
/// * `None` - Wrong length, missing `0` delimiters, bad hex, or checksum mismatch
///
/// # Example
///
/// ```
/// use cardano_value_codec::asset_name::decode_label;
///
/// assert_eq!(decode_label("000de140"), Some(222));
/// assert_eq!(decode_label("000de150"), None);
/// ```
pub fn decode_label(label_hex: &str) -> Option<u16> {
    if label_hex.len() != LABEL_HEX_LEN
        || !label_hex.is_ascii()
        || !label_hex.starts_with('0')
        || !label_hex.ends_with('0')
    {
        return None;
    }

    let bytes = hex::decode(&label_hex[1..5]).ok()?;
    let number = u16::from_be_bytes([bytes[0], bytes[1]]);

    // Compared as text: the checksum digits must be lowercase.
    let expected = format!("{:02x}", crc8(&bytes));
    (label_hex[5..7] == expected).then_some(number)
}

/// Build the 8-hex-char prefix for a label number.
///
/// ```
/// use cardano_value_codec::asset_name::encode_label;
///
/// assert_eq!(encode_label(222), "000de140");
/// ```
pub fn encode_label(number: u16) -> String {
    let bytes = number.to_be_bytes();
    format!("0{}{:02x}0", hex::encode(bytes), crc8(&bytes))
}

// ============================================================================
// Unit Tests
// ============================================================================
