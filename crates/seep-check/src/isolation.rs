//! Isolated-cell detection over the active mask.

use seep_core::{CellAddr, Finding, Severity};
use seep_model::Package;

use crate::rule::{PackageContext, Rule, RuleOutcome};

/// Flags active cells with no active face neighbour.
///
/// A cell connected to nothing cannot exchange flow with the rest of the
/// model and is almost certainly a digitization mistake, so it is reported
/// as a warning rather than an error.
pub struct IsolatedCells;

impl Rule for IsolatedCells {
    fn name(&self) -> &'static str {
        "isolated active cells"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.grid_geometry
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let mut findings = Vec::new();
        for k in 0..grid.nlay() {
            for i in 0..grid.nrow() {
                for j in 0..grid.ncol() {
                    if grid.is_active(k, i, j) && !grid.has_active_neighbour(k, i, j) {
                        findings.push(Finding::at_cell(
                            Severity::Warning,
                            &ctx.package.name,
                            CellAddr::new(k, i, j),
                            1.0,
                            self.name(),
                        ));
                    }
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}
