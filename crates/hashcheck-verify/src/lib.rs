//! Replays hardware testbench vectors against the from-scratch engines
//!
//! Typical flow:
//!
//! ```
//! use hashcheck_verify::{Harness, Reporter, Summary, TextReporter, VectorTable};
//!
//! let table = VectorTable::embedded()?;
//! let results = Harness::default().run(table.cases())?;
//! let summary = Summary::from_results(&results);
//! TextReporter::new(std::io::sink()).report(&results, &summary)?;
//! assert!(summary.all_passed());
//! # Ok::<(), hashcheck_verify::VerifyError>(())
//! ```

pub mod error;
pub mod harness;
pub mod report;
pub mod vectors;

pub use error::VerifyError;
pub use harness::{Harness, Summary, Tally, TestResult};
pub use report::{ReportConfig, Reporter, TextReporter};
pub use vectors::{TestCase, VectorRow, VectorTable};
