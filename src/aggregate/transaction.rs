//! Ingestion of transactions built by an external transaction builder.
//!
//! The builder hands back its transaction as JSON. Asset quantities in it
//! carry no decimals, so they are back-filled from the wallet's holdings.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::types::{AssetBundle, AssetId, OutputRecord, Quantity};

// ============================================================================
// Wire shapes
// ============================================================================

#[derive(Deserialize)]
struct RawTransaction {
    body: RawBody,
    #[serde(default = "default_valid")]
    is_valid: bool,
}

#[derive(Deserialize)]
struct RawBody {
    fee: u64,
    #[serde(default)]
    outputs: Vec<RawOutput>,
}

#[derive(Deserialize)]
enum RawOutput {
    AlonzoFormatTxOut(RawTxOut),
    ConwayFormatTxOut(RawTxOut),
}

#[derive(Deserialize)]
struct RawTxOut {
    address: String,
    amount: RawValue,
}

#[derive(Deserialize)]
struct RawValue {
    coin: u64,
    /// policy id -> asset name -> quantity
    #[serde(default)]
    multiasset: Option<DocumentOrder<DocumentOrder<u64>>>,
}

fn default_valid() -> bool {
    true
}

/// JSON object entries in the order they appear in the document
#[derive(Default)]
struct DocumentOrder<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for DocumentOrder<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = DocumentOrder<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map keyed by hex strings")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(DocumentOrder(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl From<RawOutput> for OutputRecord {
    fn from(output: RawOutput) -> Self {
        let (RawOutput::AlonzoFormatTxOut(out) | RawOutput::ConwayFormatTxOut(out)) = output;

        let mut assets = AssetBundle::new();
        for (policy_id, names) in out.amount.multiasset.unwrap_or_default().0 {
            for (asset_name, quantity) in names.0 {
                let asset = AssetId {
                    policy_id: policy_id.clone(),
                    asset_name,
                };
                assets.add(asset, Quantity::from(quantity), 0);
            }
        }

        OutputRecord {
            address: out.address,
            value: Quantity::from(out.amount.coin),
            assets,
        }
    }
}

// ============================================================================
// ParsedTransaction
// ============================================================================

/// The parts of a built transaction the wallet shows before signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTransaction {
    pub is_valid: bool,
    /// Fee in lovelace
    pub fee: Quantity,
    /// Outputs with every asset at `decimals = 0` until back-filled
    pub outputs: Vec<OutputRecord>,
}

impl ParsedTransaction {
    /// Copy with asset decimals taken from wallet holdings
    pub fn with_decimals(&self, holdings: &AssetBundle) -> ParsedTransaction {
        ParsedTransaction {
            is_valid: self.is_valid,
            fee: self.fee.clone(),
            outputs: backfill_decimals(&self.outputs, holdings),
        }
    }
}

/// Parse the builder's JSON form of a transaction.
///
/// Within an output, assets keep the order the builder wrote them in.
///
/// # Errors
///
/// [`crate::CodecError::Transaction`] if the JSON does not have the expected shape.
///
/// # Example
///
/// ```
/// use cardano_value_codec::aggregate::parse_json_tx;
/// use cardano_value_codec::types::Quantity;
///
/// let json = r#"{
///     "body": {
///         "fee": 170000,
///         "outputs": [
///             {"AlonzoFormatTxOut": {"address": "addr1...", "amount": {"coin": 2000000}}}
///         ]
///     },
///     "is_valid": true
/// }"#;
/// let tx = parse_json_tx(json).unwrap();
/// assert_eq!(tx.fee, Quantity::from(170_000u64));
/// assert_eq!(tx.outputs[0].value, Quantity::from(2_000_000u64));
/// ```
pub fn parse_json_tx(json: &str) -> Result<ParsedTransaction> {
    let raw: RawTransaction = serde_json::from_str(json)?;
    Ok(ParsedTransaction {
        is_valid: raw.is_valid,
        fee: Quantity::from(raw.body.fee),
        outputs: raw.body.outputs.into_iter().map(OutputRecord::from).collect(),
    })
}

/// New records whose asset decimals come from `holdings` by identifier.
///
/// Assets absent from `holdings` keep the decimals they had.
pub fn backfill_decimals(records: &[OutputRecord], holdings: &AssetBundle) -> Vec<OutputRecord> {
    records
        .iter()
        .map(|record| OutputRecord {
            address: record.address.clone(),
            value: record.value.clone(),
            assets: record.assets.with_decimals_from(holdings),
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::flatten_outputs;
    use crate::error::CodecError;

    fn policy(byte: &str) -> String {
        byte.repeat(28)
    }

    fn sample_json() -> String {
        format!(
            r#"{{
                "auxiliary_data": null,
                "body": {{
                    "fee": 180000,
                    "inputs": [],
                    "outputs": [
                        {{"AlonzoFormatTxOut": {{
                            "address": "addr_dest",
                            "amount": {{
                                "coin": 1500000,
                                "multiasset": {{
                                    "{p1}": {{"68656c6c6f": 5, "776f726c64": 1}},
                                    "{p2}": {{"": 9}}
                                }}
                            }},
                            "datum_hash": null
                        }}}},
                        {{"ConwayFormatTxOut": {{
                            "address": "addr_change",
                            "amount": {{"coin": 8000000, "multiasset": {{"{p1}": {{"68656c6c6f": 3}}}}}}
                        }}}}
                    ]
                }},
                "witness_set": {{}},
                "is_valid": true
            }}"#,
            p1 = policy("aa"),
            p2 = policy("bb"),
        )
    }

    #[test]
    fn test_parse_outputs() {
        let tx = parse_json_tx(&sample_json()).unwrap();
        assert!(tx.is_valid);
        assert_eq!(tx.fee, Quantity::from(180_000u64));
        assert_eq!(tx.outputs.len(), 2);

        let dest = &tx.outputs[0];
        assert_eq!(dest.address, "addr_dest");
        assert_eq!(dest.value, Quantity::from(1_500_000u64));
        assert_eq!(dest.assets.len(), 3);

        let hello = AssetId::from_unit(&format!("{}68656c6c6f", policy("aa")));
        let amount = dest.assets.get(&hello).unwrap();
        assert_eq!(amount.quantity, Quantity::from(5u64));
        assert_eq!(amount.decimals, 0);

        let bare = AssetId::from_unit(&policy("bb"));
        assert_eq!(dest.assets.get(&bare).unwrap().quantity, Quantity::from(9u64));

        assert_eq!(tx.outputs[1].address, "addr_change");
    }

    #[test]
    fn test_parse_without_assets_or_validity() {
        let tx = parse_json_tx(
            r#"{"body": {"fee": 1, "outputs": [
                {"AlonzoFormatTxOut": {"address": "a", "amount": {"coin": 2, "multiasset": null}}}
            ]}}"#,
        )
        .unwrap();
        assert!(tx.is_valid);
        assert!(tx.outputs[0].assets.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(parse_json_tx("{"), Err(CodecError::Transaction(_))));
        assert!(matches!(
            parse_json_tx(r#"{"body": {"outputs": []}}"#),
            Err(CodecError::Transaction(_))
        ));
        assert!(parse_json_tx(r#"{"body": {"fee": 1, "outputs": [{"Unknown": {}}]}}"#).is_err());
    }

    #[test]
    fn test_assets_keep_document_order() {
        let json = format!(
            r#"{{"body": {{"fee": 1, "outputs": [
                {{"AlonzoFormatTxOut": {{"address": "a", "amount": {{"coin": 2, "multiasset": {{
                    "{ff}": {{"ff": 1, "01": 2}},
                    "{zero}": {{"aa": 3}}
                }}}}}}}}
            ]}}}}"#,
            ff = policy("ff"),
            zero = policy("00"),
        );
        let tx = parse_json_tx(&json).unwrap();

        let order: Vec<String> = tx.outputs[0]
            .assets
            .iter()
            .map(|(asset, _)| format!("{}{}", &asset.policy_id[..2], asset.asset_name))
            .collect();
        assert_eq!(order, vec!["ffff", "ff01", "00aa"]);
    }

    #[test]
    fn test_backfill_decimals() {
        let tx = parse_json_tx(&sample_json()).unwrap();
        let hello = AssetId::from_unit(&format!("{}68656c6c6f", policy("aa")));
        let world = AssetId::from_unit(&format!("{}776f726c64", policy("aa")));

        let mut holdings = AssetBundle::new();
        holdings.add(hello.clone(), Quantity::from(1_000u64), 3);

        let annotated = tx.with_decimals(&holdings);
        assert_eq!(annotated.outputs[0].assets.get(&hello).unwrap().decimals, 3);
        assert_eq!(annotated.outputs[1].assets.get(&hello).unwrap().decimals, 3);
        assert_eq!(annotated.outputs[0].assets.get(&world).unwrap().decimals, 0);
        // Original is left as parsed
        assert_eq!(tx.outputs[0].assets.get(&hello).unwrap().decimals, 0);

        let totals = flatten_outputs(&annotated.outputs);
        let merged = totals.assets.get(&hello).unwrap();
        assert_eq!(merged.quantity, Quantity::from(8u64));
        assert_eq!(merged.decimals, 3);
        assert_eq!(totals.value, Quantity::from(9_500_000u64));
    }
}
