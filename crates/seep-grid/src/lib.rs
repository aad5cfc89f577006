//! Structured grid geometry for the seep model validation toolkit.
//!
//! A [`StructuredGrid`] is the shared geometry every check consults: layer,
//! row, and column extents, per-cell top and bottom elevations, and the
//! active-cell mask. The checker treats the grid as read-only; all data is
//! owned by the caller and handed in by reference.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod structured;

pub use structured::{NeighbourList, StructuredGrid};
