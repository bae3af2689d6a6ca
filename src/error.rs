//! Error types for the value codec.
//!
//! Most of the codec is tolerant by construction: malformed quantities become
//! zero and malformed asset names fall back to their raw hex. Errors are only
//! returned by strict constructors and by ingestion of collaborator data.

use thiserror::Error;

/// Codec error type
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input was not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Policy id has the wrong length or alphabet
    #[error("Invalid policy id: {0}")]
    InvalidPolicyId(String),

    /// Asset name is longer than 32 bytes or not hex
    #[error("Invalid asset name: {0}")]
    InvalidAssetName(String),

    /// Parsed transaction JSON did not have the expected shape
    #[error("Malformed transaction: {0}")]
    Transaction(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CodecError>;
