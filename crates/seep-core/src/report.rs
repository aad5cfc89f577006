//! Report output: verbosity levels and the reporter collaborator.

use std::io::Write;

/// How much of the check report is rendered through the reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportLevel {
    /// Severity-grouped summary counts and the passed-checks list only.
    Counts,
    /// Same as [`Counts`](ReportLevel::Counts), plus a note that a detailed
    /// report exists (written to file when an output path was given).
    Summary,
    /// Same as [`Summary`](ReportLevel::Summary), plus the full per-row
    /// detailed dump inline.
    Full,
}

impl ReportLevel {
    /// Map the conventional numeric level (0, 1, 2) to a report level.
    /// Values above 2 are treated as [`Full`](ReportLevel::Full).
    pub fn from_numeric(level: u8) -> Self {
        match level {
            0 => Self::Counts,
            1 => Self::Summary,
            _ => Self::Full,
        }
    }
}

impl Default for ReportLevel {
    fn default() -> Self {
        Self::Summary
    }
}

/// Destination for human-readable check output.
///
/// Output emission is an explicit collaborator passed into the checker, not
/// a process-wide global, so tests can capture report text deterministically
/// without intercepting the real output stream.
pub trait Reporter {
    /// Emit a chunk of report text. Implementations must not reorder or
    /// buffer across calls in a way that changes the observed text.
    fn emit(&mut self, text: &str);
}

/// Reporter that writes to the process's standard output.
///
/// Write failures on stdout are ignored; validation output is best-effort
/// and never turns a check into a failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn emit(&mut self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(text.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_levels_map_in_order() {
        assert_eq!(ReportLevel::from_numeric(0), ReportLevel::Counts);
        assert_eq!(ReportLevel::from_numeric(1), ReportLevel::Summary);
        assert_eq!(ReportLevel::from_numeric(2), ReportLevel::Full);
        assert_eq!(ReportLevel::from_numeric(9), ReportLevel::Full);
        assert!(ReportLevel::Counts < ReportLevel::Full);
    }

    #[test]
    fn default_level_is_summary() {
        assert_eq!(ReportLevel::default(), ReportLevel::Summary);
    }
}
