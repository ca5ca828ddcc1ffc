//! Embedded testbench vectors
//!
//! The rows below reproduce the literal stimulus/expected-response pairs of
//! `testbench/sha256_tb.v` and `testbench/sha3_tb.v`, in testbench order.
//! They are checked against [`ANCHORS`] when the table is built.

use hashcheck_core::{Algorithm, Digest};

use crate::error::VerifyError;

/// A single named test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position within its algorithm group
    pub id: usize,
    pub description: String,
    pub algorithm: Algorithm,
    pub input: Vec<u8>,
    pub expected: Digest,
}

impl TestCase {
    /// Builds a case from an expected digest given as 64 hex characters
    pub fn new(
        id: usize,
        description: impl Into<String>,
        algorithm: Algorithm,
        input: impl Into<Vec<u8>>,
        expected_hex: &str,
    ) -> Result<Self, VerifyError> {
        let description = description.into();
        let expected =
            expected_hex.parse::<Digest>().map_err(|source| VerifyError::Construction {
                algorithm: algorithm.to_string(),
                id,
                description: description.clone(),
                source,
            })?;
        Ok(Self { id, description, algorithm, input: input.into(), expected })
    }
}

/// A raw table row as it appears in the testbench
#[derive(Debug, Clone, Copy)]
pub struct VectorRow {
    pub algorithm: &'static str,
    pub description: &'static str,
    pub message: &'static str,
    pub expected: &'static str,
}

/// Authoritative digests used to validate the embedded table
pub const ANCHORS: &[(Algorithm, &[u8], &str)] = &[
    (Algorithm::Sha256, b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    (Algorithm::Sha256, b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    (Algorithm::Sha3_256, b"", "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
    (Algorithm::Sha3_256, b"abc", "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
];

/// SHA-256 vectors from testbench/sha256_tb.v
pub const SHA256_ROWS: &[VectorRow] = &[
    VectorRow {
        algorithm: "sha256",
        description: "Empty string",
        message: "",
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    VectorRow {
        algorithm: "sha256",
        description: "'abc'",
        message: "abc",
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    VectorRow {
        algorithm: "sha256",
        description: "'hello'",
        message: "hello",
        expected: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
    },
    // Zero-length block: same stimulus as the empty string
    VectorRow {
        algorithm: "sha256",
        description: "Block of zeros with length 0",
        message: "",
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    VectorRow {
        algorithm: "sha256",
        description: "'test'",
        message: "test",
        expected: "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
    },
    VectorRow {
        algorithm: "sha256",
        description: "Back-to-back 'abc' hashes #1",
        message: "abc",
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    VectorRow {
        algorithm: "sha256",
        description: "Back-to-back 'abc' hashes #2",
        message: "abc",
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
];

/// SHA3-256 vectors from testbench/sha3_tb.v
pub const SHA3_256_ROWS: &[VectorRow] = &[
    VectorRow {
        algorithm: "sha3-256",
        description: "Empty string",
        message: "",
        expected: "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "'abc'",
        message: "abc",
        expected: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "'abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq'",
        message: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        expected: "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "'a'",
        message: "a",
        expected: "80084bf2fba02475726feb2cab2d8215eab14bc6bdd8bfb2c8151257032ecd8b",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "'The quick brown fox jumps over the lazy dog'",
        message: "The quick brown fox jumps over the lazy dog",
        expected: "69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "Back-to-back 'abc' hashes #1",
        message: "abc",
        expected: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "Back-to-back 'abc' hashes #2",
        message: "abc",
        expected: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    },
    VectorRow {
        algorithm: "sha3-256",
        description: "Block of zeros",
        message: "",
        expected: "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    },
];

/// Immutable, ordered registry of test cases
#[derive(Debug, Clone)]
pub struct VectorTable {
    cases: Vec<TestCase>,
}

impl VectorTable {
    /// Builds the table from the embedded testbench rows and validates it
    pub fn embedded() -> Result<Self, VerifyError> {
        let rows: Vec<VectorRow> = SHA256_ROWS.iter().chain(SHA3_256_ROWS).copied().collect();
        Self::from_rows(&rows)
    }

    /// Builds a table from raw rows, numbering cases per algorithm group
    ///
    /// Fails on an unknown algorithm tag (reported by row position, since such
    /// a row belongs to no group), malformed expected hex, or a row that
    /// contradicts one of the [`ANCHORS`].
    pub fn from_rows(rows: &[VectorRow]) -> Result<Self, VerifyError> {
        let mut cases = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let algorithm: Algorithm =
                row.algorithm.parse().map_err(|source| VerifyError::UnknownAlgorithm {
                    row: index + 1,
                    description: row.description.to_string(),
                    source,
                })?;
            let id = cases.iter().filter(|c: &&TestCase| c.algorithm == algorithm).count() + 1;
            cases.push(TestCase::new(
                id,
                row.description,
                algorithm,
                row.message.as_bytes(),
                row.expected,
            )?);
        }

        let table = Self { cases };
        table.validate_anchors()?;
        Ok(table)
    }

    /// Every case whose input is an anchor input must expect the anchor digest
    fn validate_anchors(&self) -> Result<(), VerifyError> {
        for &(algorithm, input, reference) in ANCHORS {
            let reference: Digest = reference.parse()?;
            let contradicting = self
                .group(algorithm)
                .find(|case| case.input == input && case.expected != reference);
            if let Some(case) = contradicting {
                return Err(VerifyError::AnchorMismatch {
                    algorithm,
                    id: case.id,
                    description: case.description.clone(),
                    expected: case.expected,
                    reference,
                });
            }
        }
        Ok(())
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Cases for one algorithm, in table order
    pub fn group(&self, algorithm: Algorithm) -> impl Iterator<Item = &TestCase> + '_ {
        self.cases.iter().filter(move |case| case.algorithm == algorithm)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
