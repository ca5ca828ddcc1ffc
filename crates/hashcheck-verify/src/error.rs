//! Verification error types

use hashcheck_core::{Algorithm, Digest, DigestError};
use thiserror::Error;

/// Fatal errors. A digest mismatch is a normal result, never one of these.
///
/// Messages never repeat their cause; callers walk [`std::error::Error::source`]
/// to print it.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Core digest error")]
    Core(#[from] DigestError),

    #[error("Invalid {algorithm} test case {id} ({description})")]
    Construction {
        algorithm: String,
        /// 1-based position within the algorithm group
        id: usize,
        description: String,
        #[source]
        source: DigestError,
    },

    /// A raw row names an algorithm tag with no known algorithm, so it has no group id
    #[error("Vector row {row} ({description}) has an unknown algorithm tag")]
    UnknownAlgorithm {
        /// 1-based position among the rows passed to the table builder
        row: usize,
        description: String,
        #[source]
        source: DigestError,
    },

    #[error(
        "{algorithm} test case {id} ({description}) disagrees with the reference value: \
         table has {expected}, reference is {reference}"
    )]
    AnchorMismatch {
        algorithm: Algorithm,
        id: usize,
        description: String,
        expected: Digest,
        reference: Digest,
    },

    #[error("No engine registered for {0}")]
    UnsupportedAlgorithm(Algorithm),

    #[error("Report output failed")]
    Io(#[from] std::io::Error),
}
