//! NaN detection across layer elevations and array-valued properties.

use seep_core::{CellAddr, Finding, Severity};
use seep_model::Package;

use crate::rule::{PackageContext, Rule, RuleOutcome};

/// Flags NaN values at active cells.
///
/// Scans the grid's top/bottom elevations when the package owns the
/// discretization, and every array-valued property the package carries.
/// NaN anywhere the simulator would read is an error. A property whose
/// length does not match the grid cannot be addressed by cell and is left
/// unscanned; when nothing scannable remains the rule is skipped.
pub struct NanScan;

impl Rule for NanScan {
    fn name(&self) -> &'static str {
        "NaN values"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.grid_geometry || package.has_properties()
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let mut findings = Vec::new();
        let mut evaluated = false;

        if ctx.package.grid_geometry {
            evaluated = true;
            for k in 0..grid.nlay() {
                for i in 0..grid.nrow() {
                    for j in 0..grid.ncol() {
                        if !grid.is_active(k, i, j) {
                            continue;
                        }
                        let roof_nan = k == 0 && grid.top(i, j).is_nan();
                        if roof_nan || grid.botm(k, i, j).is_nan() {
                            findings.push(Finding::at_cell(
                                Severity::Error,
                                &ctx.package.name,
                                CellAddr::new(k, i, j),
                                f64::NAN,
                                "NaN values in layer elevations",
                            ));
                        }
                    }
                }
            }
        }

        for prop in &ctx.package.properties {
            // A misshapen array cannot be addressed by cell; skip it.
            if prop.data.len() != grid.cell_count() {
                continue;
            }
            evaluated = true;
            for k in 0..grid.nlay() {
                for i in 0..grid.nrow() {
                    for j in 0..grid.ncol() {
                        if !grid.is_active(k, i, j) {
                            continue;
                        }
                        if prop.data[grid.cell_index(k, i, j)].is_nan() {
                            findings.push(Finding::at_cell(
                                Severity::Error,
                                &ctx.package.name,
                                CellAddr::new(k, i, j),
                                f64::NAN,
                                format!("NaN values in {} array", prop.name),
                            ));
                        }
                    }
                }
            }
        }

        if !evaluated {
            return RuleOutcome::Skipped;
        }
        RuleOutcome::Evaluated(findings)
    }
}
