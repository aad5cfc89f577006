//! The checker runner: evaluates the rule set and assembles results.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use seep_core::{CheckConfig, CheckError, ReportLevel, Reporter};
use seep_grid::StructuredGrid;
use seep_model::{Model, Package};

use crate::boundary::{BcActiveCells, BcElevation, BcIndicesValid, BcNanValues};
use crate::consistency::{OptionFlags, RechargeRatio, StressPeriodBounds};
use crate::isolation::IsolatedCells;
use crate::model_scope::{SolverPresent, UniqueUnitNumbers};
use crate::nan_scan::NanScan;
use crate::output::write_summary_file;
use crate::property_range::{
    ConductivityAboveThreshold, ConductivityBelowThreshold, NegativeAnisotropy,
    ZeroConductivity,
};
use crate::render::render_report;
use crate::result::CheckResult;
use crate::rule::{ModelRule, PackageContext, Rule, RuleOutcome};
use crate::table::{PassedChecks, SummaryTable};
use crate::thickness::{ThinCells, ZeroThickness};

/// Per-invocation settings for a check run.
#[derive(Clone, Debug)]
pub struct CheckOptions {
    /// When set, the summary table is also written as delimited text.
    pub output_path: Option<PathBuf>,
    /// When true, the rendered report is emitted through the reporter.
    pub verbose: bool,
    /// How much of the report to render.
    pub level: ReportLevel,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            output_path: None,
            verbose: true,
            level: ReportLevel::default(),
        }
    }
}

impl CheckOptions {
    /// Default options with the conventional `<name>.chk.csv` output file
    /// inside `workspace`.
    pub fn with_default_output(name: &str, workspace: &Path) -> Self {
        Self {
            output_path: Some(workspace.join(format!("{}.chk.csv", name.to_lowercase()))),
            ..Self::default()
        }
    }
}

/// The package-level rule set in evaluation order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ZeroThickness),
        Box::new(ThinCells),
        Box::new(NanScan),
        Box::new(IsolatedCells),
        Box::new(ZeroConductivity),
        Box::new(ConductivityBelowThreshold),
        Box::new(ConductivityAboveThreshold),
        Box::new(NegativeAnisotropy),
        Box::new(BcIndicesValid),
        Box::new(BcActiveCells),
        Box::new(BcNanValues),
        Box::new(BcElevation),
        Box::new(StressPeriodBounds),
        Box::new(RechargeRatio),
        Box::new(OptionFlags),
    ]
}

/// The model-scope rule set in evaluation order.
pub fn default_model_rules() -> Vec<Box<dyn ModelRule>> {
    vec![Box::new(UniqueUnitNumbers), Box::new(SolverPresent)]
}

/// Runs the ordered rule set over a package or a whole model.
///
/// A checker is cheap to construct and holds no state across invocations;
/// every call builds a fresh [`CheckResult`]. Inputs are read-only, so
/// concurrent checks of different targets need no coordination.
pub struct Checker {
    config: CheckConfig,
    rules: Vec<Box<dyn Rule>>,
    model_rules: Vec<Box<dyn ModelRule>>,
}

impl Checker {
    /// Create a checker with the default rule set.
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
            model_rules: default_model_rules(),
        }
    }

    /// Create a checker with a custom rule set.
    pub fn with_rules(
        config: CheckConfig,
        rules: Vec<Box<dyn Rule>>,
        model_rules: Vec<Box<dyn ModelRule>>,
    ) -> Self {
        Self {
            config,
            rules,
            model_rules,
        }
    }

    /// The threshold configuration this checker evaluates under.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check a single package against the grid it lives on.
    ///
    /// `n_periods` is the stress-period count the discretization defines.
    /// The returned result owns the summary table; the optional output file
    /// and verbose report are produced before returning.
    pub fn check_package(
        &self,
        grid: &StructuredGrid,
        package: &Package,
        n_periods: usize,
        opts: &CheckOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<CheckResult, CheckError> {
        let (table, passed, failed) = self.run_package_rules(grid, package, n_periods, &[]);
        self.finish(&package.name, table, passed, failed, opts, reporter)
    }

    /// Check a whole model: every package's rules first, in declaration
    /// order, then the model-scope rules.
    pub fn check_model(
        &self,
        model: &Model,
        opts: &CheckOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<CheckResult, CheckError> {
        let mut table = SummaryTable::new();
        let mut passed_union = PassedChecks::new();
        let mut failed_union: IndexSet<String> = IndexSet::new();

        for package in &model.packages {
            let (pkg_table, pkg_passed, pkg_failed) =
                self.run_package_rules(&model.grid, package, model.n_periods, &model.packages);
            table.extend(pkg_table.rows().iter().cloned());
            passed_union.merge(&pkg_passed);
            failed_union.extend(pkg_failed);
        }

        // A rule passes at model level only if it failed for no package it
        // applies to.
        passed_union.subtract(&failed_union);

        for rule in &self.model_rules {
            match rule.evaluate(model, &self.config) {
                RuleOutcome::Skipped => {}
                RuleOutcome::Evaluated(findings) => {
                    if findings.is_empty() {
                        passed_union.insert(rule.name());
                    } else {
                        failed_union.insert(rule.name().to_owned());
                        table.extend(findings);
                    }
                }
            }
        }

        self.finish(&model.name, table, passed_union, failed_union, opts, reporter)
    }

    fn run_package_rules(
        &self,
        grid: &StructuredGrid,
        package: &Package,
        n_periods: usize,
        siblings: &[Package],
    ) -> (SummaryTable, PassedChecks, IndexSet<String>) {
        let ctx = PackageContext {
            grid,
            package,
            config: &self.config,
            n_periods,
            siblings,
        };
        let mut table = SummaryTable::new();
        let mut passed = PassedChecks::new();
        let mut failed: IndexSet<String> = IndexSet::new();

        for rule in &self.rules {
            if !rule.applies_to(package) {
                continue;
            }
            match rule.evaluate(&ctx) {
                RuleOutcome::Skipped => {}
                RuleOutcome::Evaluated(findings) => {
                    if findings.is_empty() {
                        passed.insert(rule.name());
                    } else {
                        failed.insert(rule.name().to_owned());
                        table.extend(findings);
                    }
                }
            }
        }
        (table, passed, failed)
    }

    fn finish(
        &self,
        target: &str,
        table: SummaryTable,
        passed: PassedChecks,
        failed: IndexSet<String>,
        opts: &CheckOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<CheckResult, CheckError> {
        let result = CheckResult::new(
            target,
            table,
            passed,
            failed,
            opts.level,
            opts.verbose,
            opts.output_path.clone(),
        );
        if let Some(path) = &opts.output_path {
            write_summary_file(path, result.table())?;
        }
        if opts.verbose {
            reporter.emit(&render_report(&result));
        }
        Ok(result)
    }
}
