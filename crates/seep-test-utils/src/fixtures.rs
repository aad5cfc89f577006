//! Canned grids, packages, and models for scenario tests.

use seep_grid::StructuredGrid;
use seep_model::{
    BcColumn, BcRow, Model, Package, PropertyArray, PropertyKind, StressPeriod,
};
use smallvec::smallvec;

/// Uniform all-active grid: every layer 1.0 thick, top at `nlay`.
pub fn uniform_grid(nlay: usize, nrow: usize, ncol: usize) -> StructuredGrid {
    let plan = nrow * ncol;
    let top = vec![nlay as f64; plan];
    let mut botm = Vec::with_capacity(nlay * plan);
    for k in 0..nlay {
        botm.extend(std::iter::repeat((nlay - 1 - k) as f64).take(plan));
    }
    let active = vec![true; nlay * plan];
    StructuredGrid::new(nlay, nrow, ncol, top, botm, active).unwrap()
}

/// Like [`uniform_grid`] but with the given cells deactivated.
pub fn grid_with_inactive(
    nlay: usize,
    nrow: usize,
    ncol: usize,
    inactive: &[(usize, usize, usize)],
) -> StructuredGrid {
    let plan = nrow * ncol;
    let top = vec![nlay as f64; plan];
    let mut botm = Vec::with_capacity(nlay * plan);
    for k in 0..nlay {
        botm.extend(std::iter::repeat((nlay - 1 - k) as f64).take(plan));
    }
    let mut active = vec![true; nlay * plan];
    for &(k, i, j) in inactive {
        active[(k * nrow + i) * ncol + j] = false;
    }
    StructuredGrid::new(nlay, nrow, ncol, top, botm, active).unwrap()
}

/// Discretization package owning the grid geometry.
pub fn dis_package() -> Package {
    let mut p = Package::new("DIS");
    p.grid_geometry = true;
    p.unit = Some(11);
    p
}

/// Flow package with a uniform conductivity field.
pub fn lpf_package(grid: &StructuredGrid, hk: f64) -> Package {
    let mut p = Package::new("LPF");
    p.unit = Some(15);
    p.properties.push(PropertyArray::new(
        "hk",
        PropertyKind::HorizontalConductivity,
        vec![hk; grid.cell_count()],
    ));
    p
}

/// River package with one stress period of `(stage, cond)` rows.
pub fn riv_package(rows: Vec<(i64, i64, i64, f64, f64)>) -> Package {
    let mut p = Package::new("RIV");
    p.unit = Some(18);
    p.bc_columns = vec![BcColumn::elevation("stage"), BcColumn::generic("cond")];
    p.periods.push(StressPeriod {
        period: 0,
        rows: rows
            .into_iter()
            .map(|(k, i, j, stage, cond)| BcRow::new(k, i, j, smallvec![stage, cond]))
            .collect(),
    });
    p
}

/// Solver package.
pub fn pcg_package() -> Package {
    let mut p = Package::new("PCG");
    p.unit = Some(27);
    p.solver = true;
    p
}

/// A small clean model: DIS + LPF + PCG on a uniform grid.
pub fn clean_model() -> Model {
    let grid = uniform_grid(2, 3, 3);
    let mut m = Model::new("demo", grid, 2);
    m.push_package(dis_package());
    let lpf = lpf_package(&m.grid, 1.0);
    m.push_package(lpf);
    m.push_package(pcg_package());
    m
}
