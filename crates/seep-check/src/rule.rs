//! The rule abstraction: capability-dispatched validation checks.

use seep_core::{CheckConfig, Finding};
use seep_grid::StructuredGrid;
use seep_model::{Model, Package};

/// Result of evaluating one rule.
///
/// A rule that cannot evaluate — a required array is absent, or the data it
/// would inspect does not exist — returns [`Skipped`](RuleOutcome::Skipped)
/// and leaves no trace in either the summary table or the passed-checks
/// registry. An evaluated rule with an empty finding list passed.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleOutcome {
    /// Required inputs were missing; neither pass nor fail is recorded.
    Skipped,
    /// The rule ran; zero findings means a clean pass.
    Evaluated(Vec<Finding>),
}

impl RuleOutcome {
    /// An evaluated outcome with no findings.
    pub fn clean() -> Self {
        Self::Evaluated(Vec::new())
    }
}

/// Read-only inputs available to a package-level rule.
///
/// `siblings` holds the other packages of the model during a model-level
/// run (empty for a standalone package check); rules that need data owned
/// by another package — the recharge-ratio rule looks for a conductivity
/// array — search it after their own package.
pub struct PackageContext<'a> {
    /// Shared grid geometry.
    pub grid: &'a StructuredGrid,
    /// The package under check.
    pub package: &'a Package,
    /// Threshold configuration for this run.
    pub config: &'a CheckConfig,
    /// Stress periods defined by the discretization.
    pub n_periods: usize,
    /// Other packages of the enclosing model, if any.
    pub siblings: &'a [Package],
}

/// One validation rule evaluated against a single package.
///
/// Rules are pure functions of the context: no shared state, no IO. The
/// runner consults [`applies_to`](Rule::applies_to) first and evaluates
/// exactly the rules matching the package's declared capability set.
pub trait Rule {
    /// Stable rule name, listed under "Checks that passed" on a clean run.
    fn name(&self) -> &'static str;

    /// Whether the package's capability set makes this rule applicable.
    fn applies_to(&self, package: &Package) -> bool;

    /// Run the rule against the package.
    fn evaluate(&self, ctx: &PackageContext<'_>) -> RuleOutcome;
}

/// One validation rule evaluated against the whole model.
///
/// Model-scope rules see the full package set and run after every
/// per-package rule during a model-level check.
pub trait ModelRule {
    /// Stable rule name, listed under "Checks that passed" on a clean run.
    fn name(&self) -> &'static str;

    /// Run the rule against the model.
    fn evaluate(&self, model: &Model, config: &CheckConfig) -> RuleOutcome;
}
