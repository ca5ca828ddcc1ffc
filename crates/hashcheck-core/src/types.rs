//! Core types shared by the engines and the verification harness

use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;

/// Digest size in bytes for every algorithm in this crate
pub const DIGEST_BYTES: usize = 32;

/// Hash algorithm under verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Sha256,
    Sha3_256,
}

impl Algorithm {
    /// Every algorithm, in report order
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Sha3_256];

    /// Returns the output size in bits
    pub const fn output_bits(&self) -> usize {
        256
    }

    /// Returns the output size in bytes
    pub const fn output_bytes(&self) -> usize {
        self.output_bits() / 8
    }

    /// Returns the number of message bytes consumed per compression or permutation
    pub const fn block_bytes(&self) -> usize {
        match self {
            Algorithm::Sha256 => 64,    // 512 bits
            Algorithm::Sha3_256 => 136, // 1088 bits = rate
        }
    }

    /// Returns the sponge capacity in bytes (rate + capacity = 200 bytes),
    /// or `None` for Merkle-Damgard constructions
    pub const fn capacity_bytes(&self) -> Option<usize> {
        match self {
            Algorithm::Sha256 => None,
            Algorithm::Sha3_256 => Some(200 - self.block_bytes()),
        }
    }

    /// Returns the first padding byte appended to the message
    pub const fn padding_byte(&self) -> u8 {
        match self {
            Algorithm::Sha256 => 0x80,
            Algorithm::Sha3_256 => 0x06, // SHA-3 domain separation
        }
    }

    /// Human-readable name used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha3_256 => "SHA-3-256",
        }
    }

    /// The hardware testbench whose stimulus/response pairs this algorithm's vectors mirror
    pub fn testbench(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "testbench/sha256_tb.v",
            Algorithm::Sha3_256 => "testbench/sha3_tb.v",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_lowercase().as_str() {
            "sha256" | "sha-256" | "sha2-256" => Ok(Algorithm::Sha256),
            "sha3-256" | "sha3_256" | "sha-3-256" => Ok(Algorithm::Sha3_256),
            _ => Err(DigestError::UnsupportedAlgorithm(tag.to_string())),
        }
    }
}

/// A 256-bit digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Parses a 64-character hex string; upper-case input is accepted
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        if s.len() != DIGEST_BYTES * 2 {
            return Err(DigestError::InvalidHexLength(s.len()));
        }
        let mut bytes = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Lowercase hex encoding (64 characters)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex encoding split into space-separated chunks of `width` characters
    pub fn grouped(&self, width: usize) -> String {
        let hex = self.to_hex();
        if width == 0 {
            return hex;
        }
        hex.as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<[u8; DIGEST_BYTES]> for Digest {
    fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
