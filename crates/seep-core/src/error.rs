//! Error types for the seep validation toolkit.
//!
//! Organized by subsystem the way the workspace is: grid construction,
//! model/package construction, and the check run itself. Validation
//! outcomes are never errors — findings are data, not control flow — so
//! these enums cover only construction-time shape problems and IO failure
//! while writing the optional summary file.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from structured-grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// One of the grid extents is zero.
    ZeroExtent {
        /// The axis with the zero extent (`"nlay"`, `"nrow"`, or `"ncol"`).
        axis: &'static str,
    },
    /// An input array's length does not match the grid extents.
    ShapeMismatch {
        /// Which array is misshapen (`"top"`, `"botm"`, `"active"`).
        array: &'static str,
        /// Number of elements the grid extents require.
        expected: usize,
        /// Number of elements supplied.
        got: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExtent { axis } => write!(f, "grid extent '{axis}' is zero"),
            Self::ShapeMismatch {
                array,
                expected,
                got,
            } => write!(
                f,
                "array '{array}' has {got} elements, grid requires {expected}"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from package or model construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// An array-valued property's data length does not match the grid.
    PropertyShape {
        /// Owning package name.
        package: String,
        /// Property name (e.g. `"hk"`).
        property: String,
        /// Number of elements the grid requires.
        expected: usize,
        /// Number of elements supplied.
        got: usize,
    },
    /// A boundary-condition row has a different number of values than the
    /// table declares columns.
    BcWidthMismatch {
        /// Owning package name.
        package: String,
        /// Declared column count.
        columns: usize,
        /// Values found in the offending row.
        got: usize,
    },
    /// Two packages in one model share a name.
    DuplicatePackage {
        /// The repeated package name.
        name: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyShape {
                package,
                property,
                expected,
                got,
            } => write!(
                f,
                "package '{package}' property '{property}' has {got} elements, grid requires {expected}"
            ),
            Self::BcWidthMismatch {
                package,
                columns,
                got,
            } => write!(
                f,
                "package '{package}' BC row has {got} values, table declares {columns} columns"
            ),
            Self::DuplicatePackage { name } => {
                write!(f, "duplicate package name '{name}'")
            }
        }
    }
}

impl Error for ModelError {}

/// Errors from a check invocation.
///
/// The only failure that propagates out of a check is an IO failure while
/// writing the optional summary file; malformed inputs cause the affected
/// rule to be skipped instead.
#[derive(Debug)]
pub enum CheckError {
    /// Writing the delimited summary file failed. The target file is left
    /// absent or untouched — never partially written.
    Io {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write summary file '{}': {source}", path.display())
            }
        }
    }
}

impl Error for CheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
