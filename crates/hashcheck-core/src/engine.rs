//! Engine seam used by the verification harness

use crate::keccak::sha3_256;
use crate::sha256::sha256;
use crate::types::{Algorithm, Digest};

/// A one-shot hash engine producing a 256-bit digest
pub trait HashEngine {
    /// The algorithm this engine computes
    fn algorithm(&self) -> Algorithm;

    /// Hash a complete message. Engines carry no state between calls.
    fn digest(&self, message: &[u8]) -> Digest;
}

/// SHA-256 engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Engine;

impl HashEngine for Sha256Engine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha256
    }

    fn digest(&self, message: &[u8]) -> Digest {
        sha256(message)
    }
}

/// SHA3-256 engine built on Keccak-f[1600]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256Engine;

impl HashEngine for Sha3_256Engine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sha3_256
    }

    fn digest(&self, message: &[u8]) -> Digest {
        sha3_256(message)
    }
}

/// Returns the built-in engine for `algorithm`
pub fn engine_for(algorithm: Algorithm) -> Box<dyn HashEngine> {
    match algorithm {
        Algorithm::Sha256 => Box::new(Sha256Engine),
        Algorithm::Sha3_256 => Box::new(Sha3_256Engine),
    }
}
