//! Model: grid geometry plus an ordered collection of packages.

use seep_core::ModelError;
use seep_grid::StructuredGrid;

use crate::package::Package;

/// A full simulation configuration as seen by the checker.
///
/// Packages are kept in declaration order; model-level check results
/// concatenate per-package findings in exactly this order. `n_periods` is
/// the number of stress periods the discretization defines — package
/// entries referencing periods at or beyond it are flagged.
#[derive(Clone, Debug)]
pub struct Model {
    /// Model name, used as the title of model-level reports.
    pub name: String,
    /// Shared grid geometry.
    pub grid: StructuredGrid,
    /// Packages in declaration order.
    pub packages: Vec<Package>,
    /// Stress periods defined by the discretization.
    pub n_periods: usize,
    /// Whether the model requires a solver package to be present.
    pub requires_solver: bool,
}

impl Model {
    /// Create a model with no packages.
    pub fn new(name: impl Into<String>, grid: StructuredGrid, n_periods: usize) -> Self {
        Self {
            name: name.into(),
            grid,
            packages: Vec::new(),
            n_periods,
            requires_solver: true,
        }
    }

    /// Append a package, preserving declaration order.
    pub fn push_package(&mut self, package: Package) {
        self.packages.push(package);
    }

    /// Look up a package by name.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Validate every package against the grid and reject duplicate names.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (idx, pkg) in self.packages.iter().enumerate() {
            if self.packages[..idx].iter().any(|p| p.name == pkg.name) {
                return Err(ModelError::DuplicatePackage {
                    name: pkg.name.clone(),
                });
            }
            pkg.validate(&self.grid)?;
        }
        Ok(())
    }
}
