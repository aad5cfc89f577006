//! Benchmark profiles for the seep validation toolkit.
//!
//! Provides pre-built model profiles for benchmarking:
//!
//! - [`reference_model`]: 3 layers of 100x100 cells with flow and river
//!   packages, sprinkled with defects so every rule has work to do
//! - [`stress_model`]: 5 layers of 316x316 cells (~500K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seep_grid::StructuredGrid;
use seep_model::{BcColumn, BcRow, Model, Package, PropertyArray, PropertyKind, StressPeriod};
use smallvec::smallvec;

/// Build a reference benchmark model: 3x100x100 (30K cells).
///
/// Roughly one cell in a thousand is defective (inverted elevations, zero
/// conductivity, BC into an inactive cell) so the check exercises both the
/// scan and the finding-collection paths.
pub fn reference_model() -> Model {
    build_model("bench_ref", 3, 100, 100)
}

/// Build a stress benchmark model: 5x316x316 (~500K cells).
pub fn stress_model() -> Model {
    build_model("bench_stress", 5, 316, 316)
}

fn build_model(name: &str, nlay: usize, nrow: usize, ncol: usize) -> Model {
    let plan = nrow * ncol;
    let cells = nlay * plan;

    let top = vec![nlay as f64; plan];
    let mut botm = Vec::with_capacity(cells);
    for k in 0..nlay {
        botm.extend(std::iter::repeat((nlay - 1 - k) as f64).take(plan));
    }
    // Invert every 997th cell's bottom.
    for (idx, b) in botm.iter_mut().enumerate() {
        if idx % 997 == 0 {
            *b += 10.0;
        }
    }
    let mut active = vec![true; cells];
    for (idx, a) in active.iter_mut().enumerate() {
        if idx % 1009 == 0 {
            *a = false;
        }
    }
    let grid = StructuredGrid::new(nlay, nrow, ncol, top, botm, active).unwrap();

    let mut dis = Package::new("DIS");
    dis.grid_geometry = true;
    dis.unit = Some(11);

    let mut hk = vec![1.0; cells];
    for (idx, v) in hk.iter_mut().enumerate() {
        if idx % 991 == 0 {
            *v = 0.0;
        }
    }
    let mut lpf = Package::new("LPF");
    lpf.unit = Some(15);
    lpf.properties.push(PropertyArray::new(
        "hk",
        PropertyKind::HorizontalConductivity,
        hk,
    ));

    let mut riv = Package::new("RIV");
    riv.unit = Some(18);
    riv.bc_columns = vec![BcColumn::elevation("stage"), BcColumn::generic("cond")];
    let rows = (0..nrow)
        .map(|i| BcRow::new(0, i as i64, 0, smallvec![nlay as f64 - 0.5, 100.0]))
        .collect();
    riv.periods.push(StressPeriod { period: 0, rows });

    let mut pcg = Package::new("PCG");
    pcg.unit = Some(27);
    pcg.solver = true;

    let mut model = Model::new(name, grid, 2);
    model.push_package(dis);
    model.push_package(lpf);
    model.push_package(riv);
    model.push_package(pcg);
    model
}
