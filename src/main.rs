//! Cardano Value Codec - demo binary
//!
//! Runs the codec over a few literal inputs and logs the results.
//! Set `RUST_LOG=debug` to see recovered decode failures.

use cardano_value_codec::aggregate::build_outputs_with;
use cardano_value_codec::decimal::format_compact_with;
use cardano_value_codec::{
    decode_asset_name, flatten_outputs, format_with_decimals, AssetEntry, AssetId, CodecConfig,
    OutputEntry,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CodecConfig::from_env();
    info!(?config, "loaded codec configuration");

    let policy = "ab".repeat(28);
    let nft = AssetId::from_unit(&format!("{}000de14068656c6c6f", policy));
    let fungible = AssetId::from_unit(&format!("{}0014df10574f524c44", policy));

    for asset in [&nft, &fungible] {
        let decoded = decode_asset_name(&asset.asset_name);
        info!(
            asset_name = %decoded.asset_name,
            display = %decoded.display_name_with_label,
            class = ?decoded.label.class(),
            "decoded asset name"
        );
    }

    let entries = vec![
        OutputEntry::new("addr_test1_alice", "1,500.25")
            .with_asset(AssetEntry::new(nft.clone(), "1", 0))
            .with_asset(AssetEntry::new(fungible.clone(), "12.5", 2)),
        OutputEntry::new("addr_test1_bob", "0.75")
            .with_asset(AssetEntry::new(fungible.clone(), "7.5", 2)),
    ];

    let records = build_outputs_with(&entries, &config);
    let totals = flatten_outputs(&records);

    let value = format_with_decimals(&totals.value, config.principal_decimals, true);
    info!(
        outputs = records.len(),
        total = %value.combined,
        short = %format_compact_with(
            &totals.value,
            config.principal_decimals,
            config.compact_fraction_digits
        ),
        "flattened outputs"
    );
    for (asset, amount) in totals.assets.iter() {
        info!(
            asset = %asset.decoded_name().display_name,
            quantity = %format_with_decimals(&amount.quantity, amount.decimals, true).combined,
            "asset total"
        );
    }
}
