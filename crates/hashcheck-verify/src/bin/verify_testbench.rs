//! Verify the SHA-256 and SHA3-256 testbench vectors
//!
//! Exit status: 0 when every vector matches, 1 on any mismatch, 2 when the
//! vector table is invalid or a vector cannot be dispatched.

use std::error::Error;
use std::io;
use std::process::ExitCode;

use hashcheck_verify::{Harness, Reporter, Summary, TextReporter, VectorTable, VerifyError};

const FATAL_EXIT: u8 = 2;

fn run() -> Result<Summary, VerifyError> {
    let table = VectorTable::embedded()?;
    let harness = Harness::default();

    let results = harness.run(table.cases())?;
    let summary = Summary::from_results(&results);

    TextReporter::new(io::stdout().lock()).report(&results, &summary)?;
    Ok(summary)
}

fn main() -> ExitCode {
    match run() {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::from(FATAL_EXIT)
        }
    }
}
