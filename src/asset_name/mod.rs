//! CIP-67 aware asset name decoding.
//!
//! ## Label Prefix
//!
//! An asset name may start with a 4-byte label:
//!
//! ```text
//!  0  | label (2 bytes, big-endian) | crc8 (1 byte) |  0
//! '0' |        4 hex chars          |  2 hex chars  | '0'
//! ```
//!
//! The checksum is CRC-8 (poly 0x07) over the two label bytes. A prefix whose
//! checksum does not match is not an error: the name is simply unlabeled
//! data that happens to start with `0...0`.
//!
//! ## Components
//!
//! - [`crc8`]: The checksum
//! - [`decode_label`] / [`encode_label`]: The 8-hex-char prefix
//! - [`AssetClass`]: Known label numbers (reference, NFT, FT, RFT, royalty)
//! - [`decode_asset_name`]: Full human view of an asset name

mod crc8;
mod decoder;
mod label;

pub use crc8::crc8;
pub use decoder::{decode_asset_name, DecodedAssetName};
pub use label::{decode_label, encode_label, AssetClass, AssetLabel, LABEL_HEX_LEN};
