//! Finding records: the unit of output of every validation rule.

use std::fmt;

/// Classification of a validation finding.
///
/// An [`Error`](Severity::Error) marks a configuration that would make the
/// downstream simulator fail or silently misrepresent the model. A
/// [`Warning`](Severity::Warning) marks something suspicious but possibly
/// intentional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Would break or misrepresent the simulation.
    Error,
    /// Suspicious but possibly intentional.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A 3-D grid cell address: layer, row, column (all zero-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellAddr {
    /// Layer index (`k`).
    pub layer: usize,
    /// Row index (`i`).
    pub row: usize,
    /// Column index (`j`).
    pub col: usize,
}

impl CellAddr {
    /// Create a cell address from `(layer, row, col)`.
    pub fn new(layer: usize, row: usize, col: usize) -> Self {
        Self { layer, row, col }
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.layer, self.row, self.col)
    }
}

/// One validation result, immutable once created.
///
/// Identity is structural; the summary table preserves insertion order, so
/// no per-finding id is needed. `loc` is `None` for non-spatial findings
/// (unit-number conflicts, solver checks) and renders as `0,0,0` in
/// delimited output.
#[derive(Clone, Debug, PartialEq)]
pub struct Finding {
    /// Error or Warning.
    pub severity: Severity,
    /// Name of the package the finding belongs to.
    pub package: String,
    /// Grid location, if the finding is spatial.
    pub loc: Option<CellAddr>,
    /// The offending numeric value.
    pub value: f64,
    /// Free-text description of the problem.
    pub desc: String,
}

impl Finding {
    /// Create a spatial finding at a grid cell.
    pub fn at_cell(
        severity: Severity,
        package: impl Into<String>,
        loc: CellAddr,
        value: f64,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            package: package.into(),
            loc: Some(loc),
            value,
            desc: desc.into(),
        }
    }

    /// Create a non-spatial finding (no grid location).
    pub fn global(
        severity: Severity,
        package: impl Into<String>,
        value: f64,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            package: package.into(),
            loc: None,
            value,
            desc: desc.into(),
        }
    }

    /// The `(k, i, j)` indices for rendering; `(0, 0, 0)` when non-spatial.
    pub fn indices(&self) -> (usize, usize, usize) {
        match self.loc {
            Some(c) => (c.layer, c.row, c.col),
            None => (0, 0, 0),
        }
    }
}
