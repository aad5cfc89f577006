//! Package and model data structures for the seep validation toolkit.
//!
//! These are the read-only inputs the (external) file-IO layer materializes
//! and hands to the checker: a [`Package`] owns array-valued properties,
//! stress-period boundary-condition tables, and option flags; a [`Model`]
//! is a grid plus an ordered collection of packages. The checker never
//! mutates any of it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod model;
mod package;

pub use model::Model;
pub use package::{
    BcColumn, BcRow, BcValues, ColumnKind, OptionFlag, Package, PropertyArray, PropertyKind,
    StressPeriod,
};
