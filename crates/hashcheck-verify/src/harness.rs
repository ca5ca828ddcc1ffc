//! Verification harness: dispatch, compare, aggregate

use std::collections::BTreeMap;

use hashcheck_core::{Algorithm, Digest, HashEngine, Sha256Engine, Sha3_256Engine};

use crate::error::VerifyError;
use crate::vectors::TestCase;

/// Outcome of one test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult<'a> {
    pub case: &'a TestCase,
    pub computed: Digest,
    pub passed: bool,
}

impl<'a> TestResult<'a> {
    fn compare(case: &'a TestCase, computed: Digest) -> Self {
        Self { case, computed, passed: computed == case.expected }
    }
}

/// Pass/fail counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Per-algorithm and overall counts folded from a result sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub groups: BTreeMap<Algorithm, Tally>,
    pub overall: Tally,
}

impl Summary {
    pub fn from_results(results: &[TestResult<'_>]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.groups.entry(result.case.algorithm).or_default().record(result.passed);
            summary.overall.record(result.passed);
            summary
        })
    }

    /// Counts for one algorithm (zero when it had no cases)
    pub fn group(&self, algorithm: Algorithm) -> Tally {
        self.groups.get(&algorithm).copied().unwrap_or_default()
    }

    pub fn all_passed(&self) -> bool {
        self.overall.failed == 0
    }

    /// Process exit status: 0 when every case passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs test cases against registered engines
pub struct Harness {
    engines: Vec<Box<dyn HashEngine>>,
}

impl Harness {
    /// A harness with no engines; every dispatch fails until one is registered
    pub fn new() -> Self {
        Self { engines: Vec::new() }
    }

    /// Registers an engine, replacing any earlier one for the same algorithm
    pub fn with_engine(mut self, engine: impl HashEngine + 'static) -> Self {
        self.engines.retain(|e| e.algorithm() != engine.algorithm());
        self.engines.push(Box::new(engine));
        self
    }

    /// Algorithms this harness can dispatch
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.engines.iter().map(|e| e.algorithm()).collect()
    }

    fn engine(&self, algorithm: Algorithm) -> Result<&dyn HashEngine, VerifyError> {
        self.engines
            .iter()
            .find(|e| e.algorithm() == algorithm)
            .map(|e| &**e)
            .ok_or(VerifyError::UnsupportedAlgorithm(algorithm))
    }

    /// Hash a single case and compare it against its expected digest
    pub fn check<'a>(&self, case: &'a TestCase) -> Result<TestResult<'a>, VerifyError> {
        let computed = self.engine(case.algorithm)?.digest(&case.input);
        Ok(TestResult::compare(case, computed))
    }

    /// Run every case in order
    ///
    /// Mismatches are recorded and the run continues. A case with no engine
    /// aborts the run with [`VerifyError::UnsupportedAlgorithm`].
    pub fn run<'a>(&self, cases: &'a [TestCase]) -> Result<Vec<TestResult<'a>>, VerifyError> {
        cases.iter().map(|case| self.check(case)).collect()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new().with_engine(Sha256Engine).with_engine(Sha3_256Engine)
    }
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness").field("algorithms", &self.algorithms()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::VectorTable;

    /// Engine that always returns the same digest
    struct StuckEngine(Algorithm);

    impl HashEngine for StuckEngine {
        fn algorithm(&self) -> Algorithm {
            self.0
        }

        fn digest(&self, _message: &[u8]) -> Digest {
            Digest::from([0u8; 32])
        }
    }

    #[test]
    fn test_embedded_table_all_pass() {
        let table = VectorTable::embedded().unwrap();
        let results = Harness::default().run(table.cases()).unwrap();
        let summary = Summary::from_results(&results);

        assert_eq!(results.len(), table.len());
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(summary.overall, Tally { passed: 15, failed: 0 });
        assert_eq!(summary.group(Algorithm::Sha256).total(), 7);
        assert_eq!(summary.group(Algorithm::Sha3_256).total(), 8);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_results_preserve_input_order() {
        let table = VectorTable::embedded().unwrap();
        let results = Harness::default().run(table.cases()).unwrap();
        for (result, case) in results.iter().zip(table.cases()) {
            assert!(std::ptr::eq(result.case, case));
        }
    }

    #[test]
    fn test_mismatch_does_not_short_circuit() {
        let cases = vec![
            TestCase::new(1, "wrong", Algorithm::Sha256, "abc", &"00".repeat(32)).unwrap(),
            TestCase::new(
                2,
                "right",
                Algorithm::Sha256,
                "abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            )
            .unwrap(),
        ];
        let results = Harness::default().run(&cases).unwrap();

        assert_eq!(results.len(), 2);
        assert!(!results[0].passed);
        assert!(results[1].passed);
        assert_eq!(results[0].computed, results[1].computed);

        let summary = Summary::from_results(&results);
        assert_eq!(summary.overall, Tally { passed: 1, failed: 1 });
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_missing_engine_is_fatal() {
        let table = VectorTable::embedded().unwrap();
        let harness = Harness::new().with_engine(Sha256Engine);
        let err = harness.run(table.cases()).unwrap_err();
        assert!(matches!(err, VerifyError::UnsupportedAlgorithm(Algorithm::Sha3_256)));
    }

    #[test]
    fn test_faulty_engine_is_reported_not_fatal() {
        let table = VectorTable::embedded().unwrap();
        let harness = Harness::default().with_engine(StuckEngine(Algorithm::Sha3_256));
        let results = harness.run(table.cases()).unwrap();
        let summary = Summary::from_results(&results);

        assert_eq!(summary.group(Algorithm::Sha256), Tally { passed: 7, failed: 0 });
        assert_eq!(summary.group(Algorithm::Sha3_256), Tally { passed: 0, failed: 8 });
        assert_eq!(harness.algorithms().len(), 2);
    }

    #[test]
    fn test_empty_run() {
        let results = Harness::default().run(&[]).unwrap();
        let summary = Summary::from_results(&results);
        assert_eq!(summary.overall.total(), 0);
        assert!(summary.all_passed());
    }
}
