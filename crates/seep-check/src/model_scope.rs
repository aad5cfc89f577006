//! Model-scope rules: unit-number conflicts and solver presence.

use indexmap::IndexMap;
use seep_core::{CheckConfig, Finding, Severity};
use seep_model::Model;

use crate::rule::{ModelRule, RuleOutcome};

/// Flags packages claiming a logical unit number already taken.
///
/// One finding is emitted per conflicting package beyond the first
/// claimant, attributed to the later package.
pub struct UniqueUnitNumbers;

impl ModelRule for UniqueUnitNumbers {
    fn name(&self) -> &'static str {
        "unique unit numbers"
    }

    fn evaluate(&self, model: &Model, _config: &CheckConfig) -> RuleOutcome {
        let mut claimed: IndexMap<u32, &str> = IndexMap::new();
        let mut findings = Vec::new();
        for pkg in &model.packages {
            let unit = match pkg.unit {
                Some(u) => u,
                None => continue,
            };
            match claimed.get(&unit) {
                Some(first) => findings.push(Finding::global(
                    Severity::Error,
                    &pkg.name,
                    unit as f64,
                    format!("unit number conflict with {first}"),
                )),
                None => {
                    claimed.insert(unit, &pkg.name);
                }
            }
        }
        RuleOutcome::Evaluated(findings)
    }
}

/// Flags a model that requires a solver but declares none.
pub struct SolverPresent;

impl ModelRule for SolverPresent {
    fn name(&self) -> &'static str {
        "solver package present"
    }

    fn evaluate(&self, model: &Model, _config: &CheckConfig) -> RuleOutcome {
        if !model.requires_solver {
            return RuleOutcome::clean();
        }
        if model.packages.iter().any(|p| p.solver) {
            return RuleOutcome::clean();
        }
        RuleOutcome::Evaluated(vec![Finding::global(
            Severity::Error,
            &model.name,
            0.0,
            "missing solver package",
        )])
    }
}
