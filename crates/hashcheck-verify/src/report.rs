//! Human-readable verification reports

use std::io::{self, Write};

use hashcheck_core::{Algorithm, Digest};

use crate::harness::{Summary, TestResult};

const RULE_WIDTH: usize = 80;
const ELLIPSIS: &str = "...";

/// Presentation parameters for [`TextReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Inputs longer than this many characters are truncated with "..."
    pub max_input_chars: usize,
    /// Split hex digests into chunks of this many characters
    pub group_width: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { max_input_chars: 40, group_width: Some(8) }
    }
}

impl ReportConfig {
    pub fn with_max_input_chars(mut self, chars: usize) -> Self {
        self.max_input_chars = chars;
        self
    }

    pub fn with_group_width(mut self, width: usize) -> Self {
        self.group_width = Some(width);
        self
    }

    /// Print digests as one unbroken 64-character string
    pub fn ungrouped(mut self) -> Self {
        self.group_width = None;
        self
    }

    fn digest(&self, digest: &Digest) -> String {
        match self.group_width {
            Some(width) => digest.grouped(width),
            None => digest.to_hex(),
        }
    }

    /// Display form of a message: text when it is UTF-8, hex otherwise
    pub fn input(&self, input: &[u8]) -> String {
        let text = match std::str::from_utf8(input) {
            Ok(text) => text.to_string(),
            Err(_) => hex::encode(input),
        };
        if text.chars().count() <= self.max_input_chars {
            return text;
        }
        let keep = self.max_input_chars.saturating_sub(ELLIPSIS.len());
        let mut truncated: String = text.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    }
}

/// Consumer of verification results
pub trait Reporter {
    fn report(&mut self, results: &[TestResult<'_>], summary: &Summary) -> io::Result<()>;
}

/// Plain-text report grouped by algorithm
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    config: ReportConfig,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, ReportConfig::default())
    }

    pub fn with_config(out: W, config: ReportConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, lines: &[&str]) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{rule}")
    }

    fn group(&mut self, algorithm: Algorithm, results: &[&TestResult<'_>]) -> io::Result<()> {
        let title = format!("{} Test Vector Verification", algorithm.display_name());
        let source = format!("From: {}", algorithm.testbench());
        self.banner(&[title.as_str(), source.as_str()])?;
        writeln!(self.out)?;

        for result in results {
            let case = result.case;
            let status = if result.passed { "PASS" } else { "FAIL" };
            writeln!(self.out, "Test {}: {} - {}", case.id, status, case.description)?;
            writeln!(self.out, "  Input:    '{}'", self.config.input(&case.input))?;
            writeln!(self.out, "  Expected: {}", self.config.digest(&case.expected))?;
            writeln!(self.out, "  Computed: {}", self.config.digest(&result.computed))?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        self.banner(&["Summary"])?;
        writeln!(self.out)?;

        for (algorithm, tally) in &summary.groups {
            let label = format!("{}:", algorithm.display_name());
            writeln!(self.out, "{label:<11}{}/{} passed", tally.passed, tally.total())?;
        }

        let overall = summary.overall;
        writeln!(self.out)?;
        writeln!(self.out, "{:<11}{}/{} tests passed", "Total:", overall.passed, overall.total())?;
        writeln!(self.out)?;

        if summary.all_passed() {
            writeln!(self.out, "*** ALL TESTS PASSED ***")?;
            writeln!(self.out, "All testbench values are correct and match NIST test vectors.")?;
        } else {
            writeln!(self.out, "*** {} TEST(S) FAILED ***", overall.failed)?;
            writeln!(self.out, "Some testbench values do not match expected outputs.")?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, results: &[TestResult<'_>], summary: &Summary) -> io::Result<()> {
        writeln!(self.out, "Testbench Hash Verification Tool")?;
        writeln!(self.out, "Verifying from-scratch engines against testbench and NIST test vectors")?;

        for algorithm in Algorithm::ALL {
            let group: Vec<&TestResult<'_>> =
                results.iter().filter(|r| r.case.algorithm == algorithm).collect();
            if !group.is_empty() {
                self.group(algorithm, &group)?;
            }
        }

        self.summary(summary)?;
        self.out.flush()
    }
}
