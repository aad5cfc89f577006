//! Human-readable report rendering.
//!
//! The template is fixed: a title line naming the target, the banner, one
//! block per severity with grouped instance counts, the optional pointer to
//! the detailed file, the "Checks that passed" section, and (at
//! [`ReportLevel::Full`]) a tab-separated dump of every row.

use std::fmt::Write;

use seep_core::{ReportLevel, Severity};

use crate::output::format_value;
use crate::result::CheckResult;

/// Render the full report text for a check result.
pub fn render_report(result: &CheckResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} VALIDATION SUMMARY:", result.target());
    let _ = writeln!(out);

    if result.is_clean() {
        let _ = writeln!(out, "  No errors or warnings encountered.");
    } else {
        let _ = writeln!(out, "Errors and/or Warnings encountered.");
        let _ = writeln!(out);
        render_severity(&mut out, result, Severity::Error);
        render_severity(&mut out, result, Severity::Warning);
        if result.level() >= ReportLevel::Summary {
            if let Some(path) = result.output_path() {
                let _ = writeln!(out, "  see {} for details.", path.display());
                let _ = writeln!(out);
            }
        }
    }

    if !result.passed().is_empty() {
        let _ = writeln!(out, "  Checks that passed:");
        for name in result.passed().iter() {
            let _ = writeln!(out, "    {name}");
        }
        let _ = writeln!(out);
    }

    if result.level() >= ReportLevel::Full && !result.is_clean() {
        render_detail(&mut out, result);
    }

    out
}

fn render_severity(out: &mut String, result: &CheckResult, severity: Severity) {
    let total = result.table().count(severity);
    if total == 0 {
        return;
    }
    let noun = match (severity, total) {
        (Severity::Error, 1) => "Error",
        (Severity::Error, _) => "Errors",
        (Severity::Warning, 1) => "Warning",
        (Severity::Warning, _) => "Warnings",
    };
    let _ = writeln!(out, "  {total} {noun}:");
    for (package, desc, count) in result.table().grouped(severity) {
        let plural = if count == 1 { "instance" } else { "instances" };
        if package == result.target() {
            let _ = writeln!(out, "    {count} {plural} of {desc}");
        } else {
            let _ = writeln!(out, "    {count} {plural} of {package}: {desc}");
        }
    }
    let _ = writeln!(out);
}

fn render_detail(out: &mut String, result: &CheckResult) {
    let _ = writeln!(out, "  DETAILED REPORT:");
    let _ = writeln!(out, "    type\tpackage\tk\ti\tj\tvalue\tdesc");
    for f in result.table().iter() {
        let (k, i, j) = f.indices();
        let _ = writeln!(
            out,
            "    {}\t{}\t{k}\t{i}\t{j}\t{}\t{}",
            f.severity,
            f.package,
            format_value(f.value),
            f.desc,
        );
    }
}
