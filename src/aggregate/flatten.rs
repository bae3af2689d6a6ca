use crate::types::{FlattenedTotals, OutputRecord};

/// Sum principal value and assets across every record.
///
/// Assets are keyed by identifier across all records and appear in order of
/// first occurrence. Zero quantities are kept; filtering them is up to the
/// display layer. Decimals come from the first occurrence of each asset.
pub fn flatten_outputs(records: &[OutputRecord]) -> FlattenedTotals {
    records
        .iter()
        .fold(FlattenedTotals::default(), |mut totals, record| {
            totals.value += &record.value;
            totals.assets.merge(&record.assets);
            totals
        })
}
