//! Error types for digest parsing and algorithm selection

use thiserror::Error;

/// Errors that can occur while building digests or algorithm tags from text
#[derive(Debug, Error)]
pub enum DigestError {
    /// Hex string does not encode exactly 32 bytes
    #[error("Invalid digest length: expected 64 hex characters, got {0}")]
    InvalidHexLength(usize),

    /// Hex string contains characters outside [0-9a-fA-F]
    #[error("Invalid hex digest")]
    InvalidHex(#[from] hex::FromHexError),

    /// Algorithm tag is not one this crate implements
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
