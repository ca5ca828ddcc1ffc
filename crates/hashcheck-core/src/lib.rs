//! From-scratch SHA-256 and SHA3-256 engines
//!
//! These are deliberately independent of any hashing library so that their
//! output can serve as a second opinion on a hardware hash core.

pub mod bits;
pub mod engine;
pub mod error;
pub mod keccak;
pub mod sha256;
pub mod types;

pub use engine::{engine_for, HashEngine, Sha256Engine, Sha3_256Engine};
pub use error::DigestError;
pub use keccak::sha3_256;
pub use sha256::sha256;
pub use types::*;
