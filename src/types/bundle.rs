//! Insertion-ordered asset collections.
//!
//! ## Design
//!
//! An `AssetBundle` maps [`AssetId`] to [`AssetAmount`]. Entries live in a
//! `Vec` in first-insertion order and a `HashMap` indexes into it:
//!
//! ```text
//! index: { id_b -> 0, id_a -> 1 }
//! entries: [ (id_b, 12), (id_a, 3) ]
//! ```
//!
//! - Adding an existing id sums into the existing slot (position unchanged)
//! - Iteration always follows `entries`, so display order is stable
//! - Equality is map equality and ignores order

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AssetId, Quantity};

/// A quantity paired with the decimals used to display it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetAmount {
    pub quantity: Quantity,
    pub decimals: u8,
}

impl AssetAmount {
    pub fn new(quantity: Quantity, decimals: u8) -> Self {
        Self { quantity, decimals }
    }
}

/// Flat wire form of one bundle entry.
///
/// This is the shape wallets exchange: `{policyId, assetName, quantity, decimals}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLine {
    #[serde(flatten)]
    pub asset: AssetId,
    pub quantity: Quantity,
    #[serde(default)]
    pub decimals: u8,
}

/// Insertion-ordered map from asset identifier to amount.
///
/// ## Example
///
/// ```
/// use cardano_value_codec::types::{AssetBundle, AssetId, Quantity};
///
/// let id = AssetId::from_unit(&"ab".repeat(28));
/// let mut bundle = AssetBundle::new();
/// bundle.add(id.clone(), Quantity::from(5u64), 0);
/// bundle.add(id.clone(), Quantity::from(7u64), 0);
///
/// assert_eq!(bundle.len(), 1);
/// assert_eq!(bundle.get(&id).unwrap().quantity, Quantity::from(12u64));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<AssetLine>", into = "Vec<AssetLine>")]
pub struct AssetBundle {
    entries: Vec<(AssetId, AssetAmount)>,
    index: HashMap<AssetId, usize>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, asset: &AssetId) -> Option<&AssetAmount> {
        self.index.get(asset).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, asset: &AssetId) -> bool {
        self.index.contains_key(asset)
    }

    /// Iterate entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &AssetAmount)> {
        self.entries.iter().map(|(id, amount)| (id, amount))
    }

    /// Add a quantity for an asset, summing into any existing entry.
    ///
    /// The first occurrence fixes both the position and the decimals of the
    /// entry. A later occurrence with different decimals is logged and its
    /// decimals ignored; its quantity is still summed.
    pub fn add(&mut self, asset: AssetId, quantity: Quantity, decimals: u8) {
        match self.index.get(&asset) {
            Some(&slot) => {
                let existing = &mut self.entries[slot].1;
                if existing.decimals != decimals {
                    warn!(
                        asset = %asset,
                        kept = existing.decimals,
                        ignored = decimals,
                        "conflicting decimals for the same asset"
                    );
                }
                existing.quantity += quantity;
            }
            None => {
                self.index.insert(asset.clone(), self.entries.len());
                self.entries.push((asset, AssetAmount::new(quantity, decimals)));
            }
        }
    }

    /// Sum every entry of `other` into this bundle
    pub fn merge(&mut self, other: &AssetBundle) {
        for (asset, amount) in other.iter() {
            self.add(asset.clone(), amount.quantity.clone(), amount.decimals);
        }
    }

    /// Copy of this bundle with decimals taken from `holdings` where the
    /// asset is known there. Order and quantities are unchanged.
    pub fn with_decimals_from(&self, holdings: &AssetBundle) -> AssetBundle {
        let mut bundle = AssetBundle::new();
        for (asset, amount) in self.iter() {
            let decimals = holdings
                .get(asset)
                .map_or(amount.decimals, |held| held.decimals);
            bundle.add(asset.clone(), amount.quantity.clone(), decimals);
        }
        bundle
    }

    /// Entries in their flat wire form
    pub fn lines(&self) -> Vec<AssetLine> {
        self.iter()
            .map(|(asset, amount)| AssetLine {
                asset: asset.clone(),
                quantity: amount.quantity.clone(),
                decimals: amount.decimals,
            })
            .collect()
    }
}

impl PartialEq for AssetBundle {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(asset, amount)| other.get(asset) == Some(amount))
    }
}

impl Eq for AssetBundle {}

impl FromIterator<AssetLine> for AssetBundle {
    fn from_iter<I: IntoIterator<Item = AssetLine>>(iter: I) -> Self {
        let mut bundle = AssetBundle::new();
        for line in iter {
            bundle.add(line.asset, line.quantity, line.decimals);
        }
        bundle
    }
}

impl From<Vec<AssetLine>> for AssetBundle {
    fn from(lines: Vec<AssetLine>) -> Self {
        lines.into_iter().collect()
    }
}

impl From<AssetBundle> for Vec<AssetLine> {
    fn from(bundle: AssetBundle) -> Self {
        bundle.lines()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
