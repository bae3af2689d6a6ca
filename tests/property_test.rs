//! Randomized property tests for the value codec.
//!
//! These tests verify:
//! 1. Decimal formatting and parsing round-trip exactly for large quantities
//! 2. CIP-67 labels round-trip and reject any checksum tampering
//! 3. Flattening is invariant under reordering of the records
//!
//! All randomness is seeded, so a failure reproduces with the same seed.
//!
//! ```bash
//! cargo test --test property_test -- --nocapture
//! ```

use cardano_value_codec::asset_name::encode_label;
use cardano_value_codec::{
    build_outputs, decode_asset_name, decode_label, flatten_outputs, format_with_decimals,
    parse_decimal_to_base_units, AssetEntry, AssetId, OutputEntry, OutputRecord, Quantity,
};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of random quantities per round-trip run
const ROUNDTRIP_CASES: usize = 20_000;

/// Largest quantity width in digits (exclusive bound 10^30)
const MAX_DIGITS: usize = 30;

/// Largest decimals value exercised
const MAX_DECIMALS: u8 = 8;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Random non-negative quantity below 10^MAX_DIGITS.
///
/// Widths are uniform so small and huge values are equally likely.
fn random_quantity(rng: &mut ChaCha8Rng) -> Quantity {
    let width = rng.gen_range(1..=MAX_DIGITS);
    let digits: String = (0..width)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    digits.parse().expect("digit string")
}

fn random_asset(rng: &mut ChaCha8Rng, pool: usize) -> AssetId {
    let policy = format!("{:02x}", rng.gen_range(0..pool)).repeat(28);
    AssetId::from_unit(&format!("{}{:02x}", policy, rng.gen_range(0..pool)))
}

fn random_records(rng: &mut ChaCha8Rng, count: usize) -> Vec<OutputRecord> {
    let entries: Vec<OutputEntry> = (0..count)
        .map(|i| {
            let mut entry = OutputEntry::new(
                format!("addr_{}", i),
                format!("{}.{}", rng.gen_range(0..10_000u32), rng.gen_range(0..1_000_000u32)),
            );
            for _ in 0..rng.gen_range(0..5) {
                let decimals = rng.gen_range(0..=MAX_DECIMALS);
                entry = entry.with_asset(AssetEntry::new(
                    random_asset(rng, 4),
                    rng.gen_range(0..1_000_000u64).to_string(),
                    decimals,
                ));
            }
            entry
        })
        .collect();
    build_outputs(&entries)
}

// ============================================================================
// DECIMAL ENGINE
// ============================================================================

#[test]
fn roundtrip_random_quantities() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..ROUNDTRIP_CASES {
        let quantity = random_quantity(&mut rng);
        let decimals = rng.gen_range(0..=MAX_DECIMALS);

        let shown = format_with_decimals(&quantity, decimals, false);
        let parsed = parse_decimal_to_base_units(&shown.combined, decimals);
        assert_eq!(
            parsed, quantity,
            "round trip failed for {} at {} decimals ({})",
            quantity, decimals, shown.combined
        );
    }
}

#[test]
fn roundtrip_edges() {
    let max: Quantity = "9".repeat(MAX_DIGITS).parse().unwrap();
    for quantity in [Quantity::zero(), Quantity::from(1u64), Quantity::from(u64::MAX), max] {
        for decimals in 0..=MAX_DECIMALS {
            let shown = format_with_decimals(&quantity, decimals, false);
            assert_eq!(parse_decimal_to_base_units(&shown.combined, decimals), quantity);

            let skipped = format_with_decimals(&quantity, decimals, true);
            assert_eq!(parse_decimal_to_base_units(&skipped.combined, decimals), quantity);
        }
    }
}

#[test]
fn fraction_width_matches_decimals() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..1_000 {
        let quantity = random_quantity(&mut rng);
        let decimals = rng.gen_range(1..=MAX_DECIMALS);
        let shown = format_with_decimals(&quantity, decimals, false);
        assert_eq!(shown.fraction_part.len(), usize::from(decimals));
    }
}

// ============================================================================
// ASSET NAME DECODER
// ============================================================================

#[test]
fn label_roundtrip_all_numbers() {
    for number in 0..=u16::MAX {
        let prefix = encode_label(number);
        assert_eq!(prefix.len(), 8);
        assert_eq!(decode_label(&prefix), Some(number), "label {}", number);
    }
}

#[test]
fn label_222_checksum_tampering() {
    let prefix = encode_label(222);
    assert_eq!(&prefix[1..5], "00de");
    assert_eq!(decode_label(&prefix), Some(222));

    for position in [5, 6] {
        for digit in "0123456789abcdef".chars() {
            let mut chars: Vec<char> = prefix.chars().collect();
            if chars[position] == digit {
                continue;
            }
            chars[position] = digit;
            let tampered: String = chars.into_iter().collect();
            assert_eq!(decode_label(&tampered), None, "accepted {}", tampered);
        }
    }
}

#[test]
fn random_blobs_never_panic() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..5_000 {
        let len = rng.gen_range(0..40);
        let blob: String = (0..len)
            .map(|_| *b"0123456789abcdefXYZ ".choose(&mut rng).unwrap() as char)
            .collect();
        let decoded = decode_asset_name(&blob);
        assert_eq!(decoded.asset_name, blob);
        if decoded.label.is_labeled() {
            assert!(decoded.display_name_with_label.starts_with('('));
        } else {
            assert_eq!(decoded.display_name_with_label, decoded.display_name);
        }
    }
}

// ============================================================================
// OUTPUT AGGREGATOR
// ============================================================================

#[test]
fn flatten_is_order_independent() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    for _ in 0..50 {
        let records = random_records(&mut rng, 12);
        let expected = flatten_outputs(&records);

        let mut shuffled = records.clone();
        shuffled.shuffle(&mut rng);
        let actual = flatten_outputs(&shuffled);

        assert_eq!(actual.value, expected.value);
        // Decimals follow first occurrence, so compare quantities only
        assert_eq!(actual.assets.len(), expected.assets.len());
        for (asset, amount) in expected.assets.iter() {
            let other = actual.assets.get(asset).expect("asset present");
            assert_eq!(other.quantity, amount.quantity);
        }
    }
}

#[test]
fn flatten_total_equals_sum_of_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let records = random_records(&mut rng, 100);

    let expected: Quantity = records.iter().map(|r| &r.value).sum();
    assert_eq!(flatten_outputs(&records).value, expected);
}

#[test]
fn duplicate_lines_merge_within_entry() {
    let token = AssetId::from_unit(&format!("{}{}", "ab".repeat(28), "01"));
    let entry = OutputEntry::new("addr", "1")
        .with_asset(AssetEntry::new(token.clone(), "5", 0))
        .with_asset(AssetEntry::new(token.clone(), "7", 0));

    let records = build_outputs(&[entry]);
    assert_eq!(records[0].assets.len(), 1);
    assert_eq!(records[0].assets.get(&token).unwrap().quantity, Quantity::from(12u64));
}
