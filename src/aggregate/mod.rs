//! Output building and aggregation.
//!
//! ## Flow
//!
//! ```text
//! form entries ──build_outputs──► OutputRecord[] ──flatten_outputs──► FlattenedTotals
//! tx JSON ──parse_json_tx──► ParsedTransaction ──with_decimals──► OutputRecord[]
//! ```
//!
//! Everything here is tolerant of in-progress input: unparseable numbers
//! become zero so a live recomputation never fails half-way through a form.
//!
//! ## Example
//!
//! ```
//! use cardano_value_codec::aggregate::{build_outputs, flatten_outputs, AssetEntry, OutputEntry};
//! use cardano_value_codec::types::{AssetId, Quantity};
//!
//! let token = AssetId::from_unit(&format!("{}{}", "ab".repeat(28), "68656c6c6f"));
//! let entries = vec![
//!     OutputEntry::new("addr1qx...", "1.5")
//!         .with_asset(AssetEntry::new(token.clone(), "5", 0)),
//!     OutputEntry::new("addr1qy...", "2")
//!         .with_asset(AssetEntry::new(token.clone(), "7", 0)),
//! ];
//!
//! let totals = flatten_outputs(&build_outputs(&entries));
//! assert_eq!(totals.value, Quantity::from(3_500_000u64));
//! assert_eq!(totals.assets.get(&token).unwrap().quantity, Quantity::from(12u64));
//! ```

mod build;
mod flatten;
mod transaction;

pub use build::{build_outputs, build_outputs_with, AssetEntry, OutputEntry};
pub use flatten::flatten_outputs;
pub use transaction::{backfill_decimals, parse_json_tx, ParsedTransaction};
