//! Hydraulic-property range rules: positivity, low/high thresholds,
//! anisotropy sign.

use seep_core::{CellAddr, Finding, Severity};
use seep_model::{Package, PropertyKind};

use crate::rule::{PackageContext, Rule, RuleOutcome};

fn is_conductivity(kind: PropertyKind) -> bool {
    matches!(
        kind,
        PropertyKind::HorizontalConductivity | PropertyKind::VerticalConductivity
    )
}

fn has_conductivity(package: &Package) -> bool {
    package.properties.iter().any(|p| is_conductivity(p.kind))
}

/// Visit every conductivity value at an active cell.
///
/// Returns whether any array was actually visited. A misshapen array
/// cannot be addressed by cell and is left unvisited.
fn for_each_conductivity(
    ctx: &PackageContext<'_>,
    mut visit: impl FnMut(&str, CellAddr, f64),
) -> bool {
    let grid = ctx.grid;
    let mut visited = false;
    for prop in &ctx.package.properties {
        if !is_conductivity(prop.kind) {
            continue;
        }
        if prop.data.len() != grid.cell_count() {
            continue;
        }
        visited = true;
        for k in 0..grid.nlay() {
            for i in 0..grid.nrow() {
                for j in 0..grid.ncol() {
                    if !grid.is_active(k, i, j) {
                        continue;
                    }
                    let v = prop.data[grid.cell_index(k, i, j)];
                    if v.is_nan() {
                        continue;
                    }
                    visit(&prop.name, CellAddr::new(k, i, j), v);
                }
            }
        }
    }
    visited
}

/// Flags zero or negative conductivity at active cells.
///
/// A non-positive conductivity makes the cell impermeable in a way the
/// solver cannot represent; the simulator would fail or silently produce a
/// disconnected domain.
pub struct ZeroConductivity;

impl Rule for ZeroConductivity {
    fn name(&self) -> &'static str {
        "zero or negative hydraulic conductivity"
    }

    fn applies_to(&self, package: &Package) -> bool {
        has_conductivity(package)
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let mut findings = Vec::new();
        let visited = for_each_conductivity(ctx, |_, addr, v| {
            if v <= 0.0 {
                findings.push(Finding::at_cell(
                    Severity::Error,
                    &ctx.package.name,
                    addr,
                    v,
                    "zero or negative hydraulic conductivity",
                ));
            }
        });
        if !visited {
            return RuleOutcome::Skipped;
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags positive conductivity below the configured low threshold.
pub struct ConductivityBelowThreshold;

impl Rule for ConductivityBelowThreshold {
    fn name(&self) -> &'static str {
        "hydraulic conductivity below checker threshold"
    }

    fn applies_to(&self, package: &Package) -> bool {
        has_conductivity(package)
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let lo = ctx.config.property_lo;
        let mut findings = Vec::new();
        let visited = for_each_conductivity(ctx, |name, addr, v| {
            if v > 0.0 && v < lo {
                findings.push(Finding::at_cell(
                    Severity::Warning,
                    &ctx.package.name,
                    addr,
                    v,
                    format!("{name} values below checker threshold"),
                ));
            }
        });
        if !visited {
            return RuleOutcome::Skipped;
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags conductivity above the configured high threshold.
pub struct ConductivityAboveThreshold;

impl Rule for ConductivityAboveThreshold {
    fn name(&self) -> &'static str {
        "hydraulic conductivity above checker threshold"
    }

    fn applies_to(&self, package: &Package) -> bool {
        has_conductivity(package)
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let hi = ctx.config.property_hi;
        let mut findings = Vec::new();
        let visited = for_each_conductivity(ctx, |name, addr, v| {
            if v > hi {
                findings.push(Finding::at_cell(
                    Severity::Warning,
                    &ctx.package.name,
                    addr,
                    v,
                    format!("{name} values above checker threshold"),
                ));
            }
        });
        if !visited {
            return RuleOutcome::Skipped;
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags negative vertical anisotropy ratios.
pub struct NegativeAnisotropy;

impl Rule for NegativeAnisotropy {
    fn name(&self) -> &'static str {
        "negative anisotropy ratio"
    }

    fn applies_to(&self, package: &Package) -> bool {
        package
            .properties
            .iter()
            .any(|p| p.kind == PropertyKind::Anisotropy)
    }

    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome {
        let grid = ctx.grid;
        let mut findings = Vec::new();
        let mut evaluated = false;
        for prop in &ctx.package.properties {
            if prop.kind != PropertyKind::Anisotropy {
                continue;
            }
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
                        let v = prop.data[grid.cell_index(k, i, j)];
                        if v < 0.0 {
                            findings.push(Finding::at_cell(
                                Severity::Error,
                                &ctx.package.name,
                                CellAddr::new(k, i, j),
                                v,
                                "negative anisotropy ratio",
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
