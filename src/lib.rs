//! # Cardano Value Codec
//!
//! Lossless token quantity formatting, CIP-67 asset name decoding and
//! multi-asset output aggregation for wallet front-ends.
//!
//! ## Architecture
//!
//! The codec consists of:
//! - **Decimal**: Base-unit integer ⇄ human decimal string conversion
//! - **Asset Name**: CIP-67 label prefix and display name decoding
//! - **Aggregate**: Output records from form input, flattening, parsed transactions
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: Quantities are arbitrary-precision integers in base units
//! 2. **Tolerant Input**: Malformed numbers become zero, malformed names show as hex
//! 3. **Pure Functions**: No I/O, no shared state, safe to call from any thread
//! 4. **Stable Ordering**: Asset collections iterate in first-insertion order

// ============================================================================
// Module declarations
// ============================================================================

/// Value types: Quantity, AssetId, AssetBundle, OutputRecord
pub mod types;

/// Decimal quantity engine
pub mod decimal;

/// CIP-67 asset name decoder
pub mod asset_name;

/// Output building and aggregation
pub mod aggregate;

pub mod config;
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use aggregate::{
    backfill_decimals, build_outputs, flatten_outputs, parse_json_tx, AssetEntry, OutputEntry,
    ParsedTransaction,
};
pub use asset_name::{decode_asset_name, decode_label, AssetClass, AssetLabel, DecodedAssetName};
pub use config::CodecConfig;
pub use decimal::{
    format_compact, format_grouped, format_with_decimals, parse_decimal_to_base_units,
    FormattedQuantity,
};
pub use error::{CodecError, Result};
pub use types::{AssetAmount, AssetBundle, AssetId, FlattenedTotals, OutputRecord, Quantity};
