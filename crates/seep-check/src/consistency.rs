//! Option and cross-array consistency rules.

use seep_core::{Finding, Severity};
use seep_model::{Package, PropertyArray, PropertyKind};

use crate::rule::{PackageContext, Rule, RuleOutcome};

/// Flags stress-period entries referencing periods the discretization does
/// not define. The simulator ignores such entries, so the data is inert.
pub struct StressPeriodBounds;

impl Rule for StressPeriodBounds {
    fn name(&self) -> &'static str {
        "stress periods defined by DIS"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package.has_bc_table()
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let mut findings = Vec::new();
        for period in &ctx.package.periods {
            if period.period >= ctx.n_periods {
                findings.push(Finding::global(
                    Severity::Warning,
                    &ctx.package.name,
                    period.period as f64,
                    "stress period ignored, not part of stress periods defined by DIS",
                ));
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags a large mean-recharge to mean-transmissivity ratio.
///
/// Transmissivity is taken from a conductivity array in the same package,
/// or any sibling package during a model-level run, times the top-layer
/// thickness. With no conductivity available, or with arrays whose length
/// does not match the grid, the rule cannot evaluate and is skipped.
pub struct RechargeRatio;

fn shaped_conductivity(package: &Package, cells: usize) -> Option<&PropertyArray> {
    package.properties.iter().find(|prop| {
        prop.kind == PropertyKind::HorizontalConductivity && prop.data.len() == cells
    })
}

impl Rule for RechargeRatio {
    fn name(&self) -> &'static str {
        "recharge to transmissivity ratio"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package
            .properties
            .iter()
            .any(|p| p.kind == PropertyKind::Recharge)
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let cells = grid.cell_count();
        let recharge = match ctx
            .package
            .property_of_kind(PropertyKind::Recharge)
            .filter(|p| p.data.len() == cells)
        {
            Some(p) => p,
            None => return RuleOutcome::Skipped,
        };
        let conductivity = match shaped_conductivity(ctx.package, cells)
            .or_else(|| ctx.siblings.iter().find_map(|p| shaped_conductivity(p, cells)))
        {
            Some(p) => p,
            None => return RuleOutcome::Skipped,
        };

        let mut rech_sum = 0.0;
        let mut trans_sum = 0.0;
        let mut n = 0usize;
        for i in 0..grid.nrow() {
            for j in 0..grid.ncol() {
                if !grid.is_active(0, i, j) {
                    continue;
                }
                let idx = grid.cell_index(0, i, j);
                let r = recharge.data[idx];
                let t = conductivity.data[idx] * grid.thickness(0, i, j);
                if r.is_nan() || t.is_nan() {
                    continue;
                }
                rech_sum += r;
                trans_sum += t;
                n += 1;
            }
        }
        if n == 0 || trans_sum <= 0.0 {
            return RuleOutcome::Skipped;
        }

        let ratio = (rech_sum / n as f64) / (trans_sum / n as f64);
        if ratio >= ctx.config.recharge_ratio_threshold {
            return RuleOutcome::Evaluated(vec![Finding::global(
                Severity::Warning,
                &ctx.package.name,
                ratio,
                "mean recharge to transmissivity ratio exceeds checker threshold",
            )]);
        }
        RuleOutcome::clean()
    }
}

/// Flags option flags set to a value other than the recommended one.
pub struct OptionFlags;

impl Rule for OptionFlags {
    fn name(&self) -> &'static str {
        "recommended option values"
    }

    fn applies_to(&self, package: &Package) -> bool {
        !package.options.is_empty()
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let mut findings = Vec::new();
        for flag in &ctx.package.options {
            if flag.value != flag.recommended {
                findings.push(Finding::global(
                    Severity::Warning,
                    &ctx.package.name,
                    flag.value as f64,
                    format!("{} set to non-recommended value", flag.name),
                ));
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
    use seep_model::{BcRow, OptionFlag, PropertyArray, StressPeriod};
    use smallvec::smallvec;

    fn grid() -> StructuredGrid {
        StructuredGrid::new(1, 1, 2, vec![10.0; 2], vec![0.0; 2], vec![true; 2]).unwrap()
    }

    #[test]
    fn undefined_stress_period_is_flagged() {
        let grid = grid();
        let mut pkg = Package::new("WEL");
        pkg.bc_columns = vec![seep_model::BcColumn::generic("flux")];
        pkg.periods.push(StressPeriod {
            period: 0,
            rows: vec![BcRow::new(0, 0, 0, smallvec![-5.0_f64])],
        });
        pkg.periods.push(StressPeriod {
            period: 3,
            rows: vec![BcRow::new(0, 0, 1, smallvec![-5.0_f64])],
        });
        let config = CheckConfig::default();
        let ctx = PackageContext {
            grid: &grid,
            package: &pkg,
            config: &config,
            n_periods: 2,
            siblings: &[],
        };
        match StressPeriodBounds.evaluate(&ctx) {
            RuleOutcome::Evaluated(f) => {
                assert_eq!(f.len(), 1);
                assert_eq!(f[0].value, 3.0);
                assert!(f[0].desc.contains("not part of stress periods defined by DIS"));
            }
            RuleOutcome::Skipped => panic!("rule must evaluate"),
        }
    }

    #[test]
    fn recharge_ratio_skips_without_conductivity() {
        let grid = grid();
        let mut rch = Package::new("RCH");
        rch.properties.push(PropertyArray::new(
            "rech",
            PropertyKind::Recharge,
            vec![1.0; 2],
        ));
        let config = CheckConfig::default();
        let ctx = PackageContext {
            grid: &grid,
            package: &rch,
            config: &config,
            n_periods: 1,
            siblings: &[],
        };
        assert_eq!(RechargeRatio.evaluate(&ctx), RuleOutcome::Skipped);
    }

    #[test]
    fn recharge_ratio_skips_misshapen_arrays() {
        let grid = grid();
        let mut rch = Package::new("RCH");
        // One value on a two-cell grid.
        rch.properties.push(PropertyArray::new(
            "rech",
            PropertyKind::Recharge,
            vec![1.0],
        ));
        let mut lpf = Package::new("LPF");
        lpf.properties.push(PropertyArray::new(
            "hk",
            PropertyKind::HorizontalConductivity,
            vec![1.0; 2],
        ));
        let siblings = vec![lpf];
        let config = CheckConfig::default();
        let ctx = PackageContext {
            grid: &grid,
            package: &rch,
            config: &config,
            n_periods: 1,
            siblings: &siblings,
        };
        assert_eq!(RechargeRatio.evaluate(&ctx), RuleOutcome::Skipped);

        // Misshapen conductivity is passed over in favour of a well-shaped
        // sibling array.
        let mut rch = Package::new("RCH");
        rch.properties.push(PropertyArray::new(
            "rech",
            PropertyKind::Recharge,
            vec![1.0; 2],
        ));
        rch.properties.push(PropertyArray::new(
            "hk",
            PropertyKind::HorizontalConductivity,
            vec![1.0],
        ));
        let ctx = PackageContext {
            grid: &grid,
            package: &rch,
            config: &config,
            n_periods: 1,
            siblings: &siblings,
        };
        match RechargeRatio.evaluate(&ctx) {
            RuleOutcome::Evaluated(f) => assert_eq!(f.len(), 1),
            RuleOutcome::Skipped => panic!("rule must evaluate"),
        }
    }

    #[test]
    fn recharge_ratio_uses_sibling_conductivity() {
        let grid = grid();
        let mut rch = Package::new("RCH");
        rch.properties.push(PropertyArray::new(
            "rech",
            PropertyKind::Recharge,
            vec![1.0; 2],
        ));
        let mut lpf = Package::new("LPF");
        lpf.properties.push(PropertyArray::new(
            "hk",
            PropertyKind::HorizontalConductivity,
            vec![1.0; 2],
        ));
        let siblings = vec![lpf];
        let config = CheckConfig::default();
        let ctx = PackageContext {
            grid: &grid,
            package: &rch,
            config: &config,
            n_periods: 1,
            siblings: &siblings,
        };
        // mean recharge 1.0, mean transmissivity 10.0: ratio 0.1, well above
        // the 2e-8 default threshold.
        match RechargeRatio.evaluate(&ctx) {
            RuleOutcome::Evaluated(f) => {
                assert_eq!(f.len(), 1);
                assert!((f[0].value - 0.1).abs() < 1e-12);
            }
            RuleOutcome::Skipped => panic!("rule must evaluate"),
        }
    }

    #[test]
    fn non_recommended_option_is_a_warning() {
        let grid = grid();
        let mut pkg = Package::new("BAS6");
        pkg.options.push(OptionFlag {
            name: "ICHFLG".into(),
            value: 1,
            recommended: 0,
        });
        pkg.options.push(OptionFlag {
            name: "IFREFM".into(),
            value: 1,
            recommended: 1,
        });
        let config = CheckConfig::default();
        let ctx = PackageContext {
            grid: &grid,
            package: &pkg,
            config: &config,
            n_periods: 1,
            siblings: &[],
        };
        match OptionFlags.evaluate(&ctx) {
            RuleOutcome::Evaluated(f) => {
                assert_eq!(f.len(), 1);
                assert_eq!(f[0].desc, "ICHFLG set to non-recommended value");
            }
            RuleOutcome::Skipped => panic!("rule must evaluate"),
        }
    }
}
