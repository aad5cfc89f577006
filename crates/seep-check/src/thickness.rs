//! Layer-thickness rules: inverted cells and thin cells.

use seep_core::{CellAddr, Finding, Severity};
use seep_model::Package;

use crate::rule::{PackageContext, Rule, RuleOutcome};

/// Flags active cells whose computed thickness is zero or negative.
///
/// Thickness is the overlying surface (model top for layer 0, the layer
/// above's bottom otherwise) minus the cell bottom. A non-positive value
/// means the elevations are inverted or degenerate and the simulator would
/// misrepresent the cell.
pub struct ZeroThickness;

impl Rule for ZeroThickness {
    fn name(&self) -> &'static str {
        "zero or negative cell thickness"
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
                    if !grid.is_active(k, i, j) {
                        continue;
                    }
                    let t = grid.thickness(k, i, j);
                    if t.is_nan() {
                        continue;
                    }
                    if t <= 0.0 {
                        findings.push(Finding::at_cell(
                            Severity::Error,
                            &ctx.package.name,
                            CellAddr::new(k, i, j),
                            t,
                            self.name(),
                        ));
                    }
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags active cells thinner than the configured threshold.
///
/// Positive but very thin cells tend to produce numerical trouble; the
/// threshold shares the grid's length units and defaults to 1.0.
pub struct ThinCells;

impl Rule for ThinCells {
    fn name(&self) -> &'static str {
        "thin cells (less than checker threshold)"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.grid_geometry
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let threshold = ctx.config.thin_cell_threshold;
        let mut findings = Vec::new();
        for k in 0..grid.nlay() {
            for i in 0..grid.nrow() {
                for j in 0..grid.ncol() {
                    if !grid.is_active(k, i, j) {
                        continue;
                    }
                    let t = grid.thickness(k, i, j);
                    if t > 0.0 && t < threshold {
                        findings.push(Finding::at_cell(
                            Severity::Warning,
                            &ctx.package.name,
                            CellAddr::new(k, i, j),
                            t,
                            self.name(),
                        ));
                    }
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seep_core::CheckConfig;
    use seep_grid::StructuredGrid;

    fn ctx<'a>(
        grid: &'a StructuredGrid,
        package: &'a Package,
        config: &'a CheckConfig,
    ) -> PackageContext<'a> {
        PackageContext {
            grid,
            package,
            config,
            n_periods: 1,
            siblings: &[],
        }
    }

    #[test]
    fn inverted_cell_yields_error_at_matching_address() {
        // top = 10, bottom = 12 at one cell: thickness -2.
        let grid = StructuredGrid::new(
            1,
            1,
            2,
            vec![10.0, 10.0],
            vec![12.0, 8.0],
            vec![true, true],
        )
        .unwrap();
        let pkg = {
            let mut p = Package::new("DIS");
            p.grid_geometry = true;
            p
        };
        let config = CheckConfig::default();
        match ZeroThickness.evaluate(&ctx(&grid, &pkg, &config)) {
            RuleOutcome::Evaluated(f) => {
                assert_eq!(f.len(), 1);
                assert_eq!(f[0].severity, Severity::Error);
                assert_eq!(f[0].indices(), (0, 0, 0));
                assert_eq!(f[0].value, -2.0);
            }
            RuleOutcome::Skipped => panic!("rule must evaluate"),
        }
    }

    #[test]
    fn inactive_inverted_cell_is_ignored() {
        let grid = StructuredGrid::new(1, 1, 1, vec![10.0], vec![12.0], vec![false]).unwrap();
        let pkg = {
            let mut p = Package::new("DIS");
            p.grid_geometry = true;
            p
        };
        let config = CheckConfig::default();
        assert_eq!(
            ZeroThickness.evaluate(&ctx(&grid, &pkg, &config)),
            RuleOutcome::clean()
        );
    }

    #[test]
    fn thin_cell_threshold_is_configurable() {
        let grid =
            StructuredGrid::new(1, 1, 1, vec![10.0], vec![9.5], vec![true]).unwrap();
        let pkg = {
            let mut p = Package::new("DIS");
            p.grid_geometry = true;
            p
        };
        let default_cfg = CheckConfig::default();
        match ThinCells.evaluate(&ctx(&grid, &pkg, &default_cfg)) {
            RuleOutcome::Evaluated(f) => {
                assert_eq!(f.len(), 1);
                assert_eq!(f[0].severity, Severity::Warning);
                assert_eq!(f[0].value, 0.5);
            }
            RuleOutcome::Skipped => panic!("rule must evaluate"),
        }

        let loose = CheckConfig {
            thin_cell_threshold: 0.1,
            ..CheckConfig::default()
        };
        assert_eq!(
            ThinCells.evaluate(&ctx(&grid, &pkg, &loose)),
            RuleOutcome::clean()
        );
    }

    #[test]
    fn does_not_apply_without_grid_geometry() {
        let pkg = Package::new("RIV");
        assert!(!ZeroThickness.applies_to(&pkg));
        assert!(!ThinCells.applies_to(&pkg));
    }
}
