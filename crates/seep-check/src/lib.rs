//! Validation rule engine for groundwater model data.
//!
//! Given a package or a whole model — materialized grid arrays,
//! stress-period boundary-condition tables, option flags — the checker
//! runs an ordered set of heuristic rules, collects findings into a
//! [`SummaryTable`], tracks clean rules in a [`PassedChecks`] registry,
//! and renders per-severity summaries plus an optional delimited output
//! file. Findings are data, not control flow: the only error a check can
//! return is an IO failure writing that file.
//!
//! ```
//! use seep_check::{CheckOptions, Checker};
//! use seep_core::{CheckConfig, StdoutReporter};
//! use seep_grid::StructuredGrid;
//! use seep_model::Package;
//!
//! let grid = StructuredGrid::new(
//!     1, 1, 2,
//!     vec![10.0, 10.0],
//!     vec![12.0, 8.0],   // first cell bottom above the top: inverted
//!     vec![true, true],
//! ).unwrap();
//! let mut dis = Package::new("DIS");
//! dis.grid_geometry = true;
//!
//! let checker = Checker::new(CheckConfig::default());
//! let result = checker
//!     .check_package(&grid, &dis, 1, &CheckOptions::default(), &mut StdoutReporter)
//!     .unwrap();
//! assert_eq!(result.error_count(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod boundary;
mod consistency;
mod isolation;
mod model_scope;
mod nan_scan;
mod output;
mod property_range;
mod render;
mod result;
mod rule;
mod runner;
mod table;
mod thickness;

pub use boundary::{BcActiveCells, BcElevation, BcIndicesValid, BcNanValues};
pub use consistency::{OptionFlags, RechargeRatio, StressPeriodBounds};
pub use isolation::IsolatedCells;
pub use model_scope::{SolverPresent, UniqueUnitNumbers};
pub use nan_scan::NanScan;
pub use output::{render_delimited, write_summary_file, HEADER};
pub use property_range::{
    ConductivityAboveThreshold, ConductivityBelowThreshold, NegativeAnisotropy,
    ZeroConductivity,
};
pub use render::render_report;
pub use result::CheckResult;
pub use rule::{ModelRule, PackageContext, Rule, RuleOutcome};
pub use runner::{default_model_rules, default_rules, CheckOptions, Checker};
pub use table::{PassedChecks, SummaryTable};
