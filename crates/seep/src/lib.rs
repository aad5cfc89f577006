//! Seep: a validation checker for MODFLOW-style groundwater model data.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the seep sub-crates. For most users, adding `seep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // A one-layer 2x2 grid with one inverted cell (bottom above the top).
//! let grid = StructuredGrid::new(
//!     1, 2, 2,
//!     vec![10.0; 4],
//!     vec![12.0, 8.0, 8.0, 8.0],
//!     vec![true; 4],
//! ).unwrap();
//!
//! let mut dis = Package::new("DIS");
//! dis.grid_geometry = true;
//!
//! let checker = Checker::new(CheckConfig::default());
//! let opts = CheckOptions { verbose: false, ..CheckOptions::default() };
//! let result = checker
//!     .check_package(&grid, &dis, 1, &opts, &mut StdoutReporter)
//!     .unwrap();
//!
//! assert_eq!(result.error_count(), 1);
//! assert!(!result.passed().contains("zero or negative cell thickness"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | Findings, severities, config, reporter, errors |
//! | [`grid`] | `seep-grid` | Structured grid geometry |
//! | [`model`] | `seep-model` | Package and model data structures |
//! | [`check`] | `seep-check` | Rules, runner, summary table, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: findings, severities, config, reporter, errors (`seep-core`).
pub use seep_core as types;

/// Structured grid geometry (`seep-grid`).
pub use seep_grid as grid;

/// Package and model data structures (`seep-model`).
pub use seep_model as model;

/// Rules, runner, summary table, and rendering (`seep-check`).
pub use seep_check as check;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use seep_check::{CheckOptions, CheckResult, Checker, PassedChecks, SummaryTable};
    pub use seep_core::{
        CellAddr, CheckConfig, CheckError, Finding, ReportLevel, Reporter, Severity,
        StdoutReporter,
    };
    pub use seep_grid::StructuredGrid;
    pub use seep_model::{
        BcColumn, BcRow, Model, OptionFlag, Package, PropertyArray, PropertyKind,
        StressPeriod,
    };
}
