//! Summary table and passed-checks registry.

use indexmap::IndexSet;
use seep_core::{Finding, Severity};

/// Append-only table of findings for one check run.
///
/// Rows preserve the order rules were evaluated in; one row is kept per
/// detected instance. Rendering may merge identical `(package, desc)` pairs
/// into an instance count, but the underlying table is never collapsed.
#[derive(Clone, Debug, Default)]
pub struct SummaryTable {
    rows: Vec<Finding>,
}

impl SummaryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finding.
    pub fn push(&mut self, finding: Finding) {
        self.rows.push(finding);
    }

    /// Append every finding from `other`, preserving order.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.rows.extend(findings);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no findings.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows in insertion order.
    pub fn rows(&self) -> &[Finding] {
        &self.rows
    }

    /// Iterate rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.rows.iter()
    }

    /// Number of rows with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.rows.iter().filter(|f| f.severity == severity).count()
    }

    /// Distinct `(package, desc)` groups of the given severity with their
    /// instance counts, in first-appearance order.
    pub fn grouped(&self, severity: Severity) -> Vec<(&str, &str, usize)> {
        let mut groups: Vec<(&str, &str, usize)> = Vec::new();
        for f in self.rows.iter().filter(|f| f.severity == severity) {
            match groups
                .iter_mut()
                .find(|(p, d, _)| *p == f.package && *d == f.desc)
            {
                Some(entry) => entry.2 += 1,
                None => groups.push((&f.package, &f.desc, 1)),
            }
        }
        groups
    }
}

/// The set of rule names that evaluated and found nothing wrong.
///
/// Complements the summary table, which holds only failures. Insertion
/// order is preserved and duplicates are ignored, so a rule evaluated
/// per-layer internally still appears exactly once.
#[derive(Clone, Debug, Default)]
pub struct PassedChecks {
    names: IndexSet<String>,
}

impl PassedChecks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule as passed. Returns `false` if it was already recorded.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_owned())
    }

    /// Whether the rule is recorded as passed.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Drop every name present in `failed`.
    ///
    /// Used by the model-level merge: a rule passes at model level only if
    /// it failed for no package it applies to.
    pub fn subtract(&mut self, failed: &IndexSet<String>) {
        self.names.retain(|n| !failed.contains(n));
    }

    /// Merge another registry into this one, preserving insertion order.
    pub fn merge(&mut self, other: &PassedChecks) {
        for name in &other.names {
            self.names.insert(name.clone());
        }
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no rule has passed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}
