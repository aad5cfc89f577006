//! Package data: properties, boundary-condition tables, option flags.

use seep_core::ModelError;
use seep_grid::StructuredGrid;
use smallvec::SmallVec;

/// Classification of an array-valued property.
///
/// The kind decides which range rules may consume the array: conductivity
/// kinds get the positivity and low/high threshold checks, anisotropy gets
/// the sign check, recharge feeds the recharge-to-transmissivity ratio
/// rule, and generic arrays are only scanned for NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// Horizontal hydraulic conductivity (e.g. `hk`).
    HorizontalConductivity,
    /// Vertical hydraulic conductivity (e.g. `vka`).
    VerticalConductivity,
    /// Vertical anisotropy ratio.
    Anisotropy,
    /// Recharge flux applied to the top active layer.
    Recharge,
    /// Any other per-cell array (storage, porosity, ...).
    Generic,
}

/// One array-valued package property, stored per `(layer, row, col)` in the
/// owning grid's layer-major order.
#[derive(Clone, Debug)]
pub struct PropertyArray {
    /// Property name as it appears in findings (e.g. `"hk"`).
    pub name: String,
    /// What the array represents.
    pub kind: PropertyKind,
    /// One value per grid cell, layer-major.
    pub data: Vec<f64>,
}

impl PropertyArray {
    /// Create a property array.
    pub fn new(name: impl Into<String>, kind: PropertyKind, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            data,
        }
    }
}

/// Classification of a boundary-condition value column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// An elevation (stage, drain elevation, boundary head). Values below
    /// the referenced cell's bottom are flagged.
    Elevation,
    /// Any other numeric column (conductance, flux, ...).
    Generic,
}

/// Declared column of a boundary-condition table.
#[derive(Clone, Debug)]
pub struct BcColumn {
    /// Column name as it appears in findings (e.g. `"stage"`).
    pub name: String,
    /// What the column represents.
    pub kind: ColumnKind,
}

impl BcColumn {
    /// Create an elevation-kind column.
    pub fn elevation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Elevation,
        }
    }

    /// Create a generic numeric column.
    pub fn generic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Generic,
        }
    }
}

/// Per-row boundary-condition values. Tables rarely carry more than a few
/// columns, so the values live inline.
pub type BcValues = SmallVec<[f64; 4]>;

/// One boundary-condition entry: a cell reference plus the declared values.
///
/// Indices are signed so that out-of-range data read from a file can be
/// represented and flagged instead of panicking.
#[derive(Clone, Debug)]
pub struct BcRow {
    /// Layer index (`k`), zero-based.
    pub layer: i64,
    /// Row index (`i`), zero-based.
    pub row: i64,
    /// Column index (`j`), zero-based.
    pub col: i64,
    /// One value per declared [`BcColumn`].
    pub values: BcValues,
}

impl BcRow {
    /// Create a boundary-condition row.
    pub fn new(layer: i64, row: i64, col: i64, values: impl Into<BcValues>) -> Self {
        Self {
            layer,
            row,
            col,
            values: values.into(),
        }
    }
}

/// Boundary-condition entries held constant over one stress period.
#[derive(Clone, Debug)]
pub struct StressPeriod {
    /// Stress-period index, zero-based, as referenced by the package input.
    pub period: usize,
    /// Entries active during this period.
    pub rows: Vec<BcRow>,
}

/// A discrete package option with a recommended setting.
#[derive(Clone, Debug)]
pub struct OptionFlag {
    /// Option name as written in the package input.
    pub name: String,
    /// The configured value.
    pub value: i64,
    /// The recommended (default) value; a mismatch is flagged.
    pub recommended: i64,
}

/// One logical input component of a simulation model.
///
/// A package declares its capabilities through its data: a non-empty
/// `properties` list means the array rules apply, a non-empty `periods`
/// list means the boundary-condition rules apply, and `grid_geometry`
/// marks the package that owns the discretization (thickness, NaN
/// elevation, and isolated-cell rules run against it). The checker runs
/// exactly the rules matching the declared capability set.
#[derive(Clone, Debug)]
pub struct Package {
    /// Package name (e.g. `"DIS"`, `"RIV"`, `"LPF"`).
    pub name: String,
    /// Logical unit number claimed by the package, if any.
    pub unit: Option<u32>,
    /// Whether this package defines the grid discretization.
    pub grid_geometry: bool,
    /// Whether this package is a solver.
    pub solver: bool,
    /// Array-valued properties keyed by cell.
    pub properties: Vec<PropertyArray>,
    /// Declared columns of the boundary-condition table.
    pub bc_columns: Vec<BcColumn>,
    /// Stress-period boundary-condition entries.
    pub periods: Vec<StressPeriod>,
    /// Discrete option flags.
    pub options: Vec<OptionFlag>,
}

impl Package {
    /// Create an empty package with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            grid_geometry: false,
            solver: false,
            properties: Vec::new(),
            bc_columns: Vec::new(),
            periods: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Whether the package carries any array-valued properties.
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Whether the package carries a boundary-condition table.
    pub fn has_bc_table(&self) -> bool {
        !self.periods.is_empty()
    }

    /// First property of the given kind, if present.
    pub fn property_of_kind(&self, kind: PropertyKind) -> Option<&PropertyArray> {
        self.properties.iter().find(|p| p.kind == kind)
    }

    /// Validate array shapes and table widths against a grid.
    pub fn validate(&self, grid: &StructuredGrid) -> Result<(), ModelError> {
        let cells = grid.cell_count();
        for prop in &self.properties {
            if prop.data.len() != cells {
                return Err(ModelError::PropertyShape {
                    package: self.name.clone(),
                    property: prop.name.clone(),
                    expected: cells,
                    got: prop.data.len(),
                });
            }
        }
        for period in &self.periods {
            for row in &period.rows {
                if row.values.len() != self.bc_columns.len() {
                    return Err(ModelError::BcWidthMismatch {
                        package: self.name.clone(),
                        columns: self.bc_columns.len(),
                        got: row.values.len(),
                    });
                }
            }
        }
        Ok(())
    }
}
