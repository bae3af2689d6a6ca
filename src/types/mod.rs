//! Core value types for the codec
//!
//! ## Types
//!
//! - [`Quantity`]: Arbitrary-precision integer amount in base units
//! - [`AssetId`]: (policy id, asset name) pair naming a native token
//! - [`AssetAmount`]: A quantity paired with its display decimals
//! - [`AssetBundle`]: Insertion-ordered map of assets to amounts
//! - [`OutputRecord`]: One destination with principal value and assets
//! - [`FlattenedTotals`]: Sums across a collection of output records
//!
//! ## Base Units
//!
//! Quantities are always integers in the smallest denomination. The paired
//! `decimals` count only matters for display: 1_500_000 lovelace with
//! 6 decimals renders as "1.500000".

mod asset;
mod bundle;
mod output;
mod quantity;

pub use asset::AssetId;
pub use bundle::{AssetAmount, AssetBundle, AssetLine};
pub use output::{FlattenedTotals, OutputRecord};
pub use quantity::Quantity;

/// Decimals of the principal currency (1 ADA = 10^6 lovelace)
pub const PRINCIPAL_DECIMALS: u8 = 6;

/// Length of a policy id in hex characters (28 bytes)
pub const POLICY_ID_HEX_LEN: usize = 56;

/// Maximum length of an asset name in hex characters (32 bytes)
pub const MAX_ASSET_NAME_HEX_LEN: usize = 64;
