//! Core types and traits for the seep model validation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the seep workspace:
//! findings, severities, checker configuration, the reporter output
//! collaborator, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod finding;
mod report;

pub use config::CheckConfig;
pub use error::{CheckError, GridError, ModelError};
pub use finding::{CellAddr, Finding, Severity};
pub use report::{ReportLevel, Reporter, StdoutReporter};
