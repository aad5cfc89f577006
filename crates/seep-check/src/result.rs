//! Check results: the owned outcome of one checker invocation.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use seep_core::{ReportLevel, Severity};

use crate::table::{PassedChecks, SummaryTable};

/// The outcome of one `check` invocation, package- or model-level.
///
/// Constructed fresh on every call and owned exclusively by the caller;
/// nothing is cached or mutated after construction. The summary table keeps
/// one row per detected instance in rule-evaluation order.
#[derive(Clone, Debug)]
pub struct CheckResult {
    target: String,
    table: SummaryTable,
    passed: PassedChecks,
    failed: IndexSet<String>,
    level: ReportLevel,
    verbose: bool,
    output_path: Option<PathBuf>,
}

impl CheckResult {
    /// Assemble a result. Used by the runner; not normally constructed by
    /// callers.
    pub(crate) fn new(
        target: impl Into<String>,
        table: SummaryTable,
        passed: PassedChecks,
        failed: IndexSet<String>,
        level: ReportLevel,
        verbose: bool,
        output_path: Option<PathBuf>,
    ) -> Self {
        Self {
            target: target.into(),
            table,
            passed,
            failed,
            level,
            verbose,
            output_path,
        }
    }

    /// Name of the checked package or model.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The summary table of findings.
    pub fn table(&self) -> &SummaryTable {
        &self.table
    }

    /// Rules that evaluated and found nothing wrong.
    pub fn passed(&self) -> &PassedChecks {
        &self.passed
    }

    /// Names of rules that produced at least one finding.
    pub fn failed(&self) -> &IndexSet<String> {
        &self.failed
    }

    /// The report level this result was produced under.
    pub fn level(&self) -> ReportLevel {
        self.level
    }

    /// Whether verbose rendering was requested.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The delimited summary file path, if one was written.
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Whether no errors and no warnings were found.
    pub fn is_clean(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.table.count(Severity::Error)
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.table.count(Severity::Warning)
    }
}
