//! Boundary-condition table rules: index validity, cell activity, NaN
//! values, and elevation plausibility.
//!
//! These apply to any package carrying a stress-period table — river,
//! drain, general-head, well — the rules only see the declared columns,
//! not the package type.

use seep_core::{CellAddr, Finding, Severity};
use seep_model::{ColumnKind, Package};

use crate::rule::{PackageContext, Rule, RuleOutcome};

/// Flags entries whose `(k, i, j)` indices fall outside the grid.
pub struct BcIndicesValid;

impl Rule for BcIndicesValid {
    fn name(&self) -> &'static str {
        "BC indices valid"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.has_bc_table()
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let mut findings = Vec::new();
        for period in &ctx.package.periods {
            for row in &period.rows {
                if !ctx.grid.contains(row.layer, row.row, row.col) {
                    findings.push(Finding::global(
                        Severity::Error,
                        &ctx.package.name,
                        0.0,
                        "BC indices outside of model grid",
                    ));
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags entries addressing inactive cells.
///
/// A boundary condition in an inactive cell is silently dropped by the
/// simulator, which almost always means the model is not what the author
/// intended.
pub struct BcActiveCells;

impl Rule for BcActiveCells {
    fn name(&self) -> &'static str {
        "BC in inactive cells"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.has_bc_table()
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let mut findings = Vec::new();
        for period in &ctx.package.periods {
            for row in &period.rows {
                if !grid.contains(row.layer, row.row, row.col) {
                    continue;
                }
                let addr =
                    CellAddr::new(row.layer as usize, row.row as usize, row.col as usize);
                if !grid.is_active(addr.layer, addr.row, addr.col) {
                    findings.push(Finding::at_cell(
                        Severity::Error,
                        &ctx.package.name,
                        addr,
                        0.0,
                        "BC in inactive cells",
                    ));
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags NaN in any boundary-condition value column.
pub struct BcNanValues;

impl Rule for BcNanValues {
    fn name(&self) -> &'static str {
        "NaN values in BC data"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.has_bc_table()
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let mut findings = Vec::new();
        for period in &ctx.package.periods {
            for row in &period.rows {
                let loc = if grid.contains(row.layer, row.row, row.col) {
                    Some(CellAddr::new(
                        row.layer as usize,
                        row.row as usize,
                        row.col as usize,
                    ))
                } else {
                    None
                };
                for &v in &row.values {
                    if v.is_nan() {
                        findings.push(Finding {
                            severity: Severity::Error,
                            package: ctx.package.name.clone(),
                            loc,
                            value: f64::NAN,
                            desc: "NaN values in BC data".to_owned(),
                        });
                    }
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags elevation-kind values below the referenced cell's bottom.
///
/// A stage or boundary head below the cell bottom is physically dubious
/// but occasionally intentional, so this is a warning.
pub struct BcElevation;

impl Rule for BcElevation {
    fn name(&self) -> &'static str {
        "BC elevation below cell bottom"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.has_bc_table()
            && package
                .bc_columns
                .iter()
                .any(|c| c.kind == ColumnKind::Elevation)
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let mut findings = Vec::new();
        for period in &ctx.package.periods {
            for row in &period.rows {
                if !grid.contains(row.layer, row.row, row.col) {
                    continue;
                }
                let addr =
                    CellAddr::new(row.layer as usize, row.row as usize, row.col as usize);
                if !grid.is_active(addr.layer, addr.row, addr.col) {
                    continue;
                }
                let bottom = grid.botm(addr.layer, addr.row, addr.col);
                for (col, &v) in ctx.package.bc_columns.iter().zip(&row.values) {
                    if col.kind == ColumnKind::Elevation && !v.is_nan() && v < bottom {
                        findings.push(Finding::at_cell(
                            Severity::Warning,
                            &ctx.package.name,
                            addr,
                            v,
                            "BC elevation below cell bottom",
                        ));
                    }
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}
