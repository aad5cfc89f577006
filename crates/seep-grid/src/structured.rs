//! Layered structured grid: extents, elevations, and the active mask.

use seep_core::{CellAddr, GridError};
use smallvec::SmallVec;

/// In-bounds face neighbours of a cell (at most 4 horizontal + 2 vertical).
pub type NeighbourList = SmallVec<[CellAddr; 6]>;

/// A structured model grid: `nlay` layers of `nrow` x `ncol` cells.
///
/// Elevations are stored row-major: `top` holds one value per `(row, col)`,
/// `botm` holds one value per `(layer, row, col)` in layer-major order, and
/// `active` marks the cells participating in the flow solution. Layer `k`'s
/// thickness at `(i, j)` is `top − botm[0]` for `k = 0` and
/// `botm[k−1] − botm[k]` below that.
#[derive(Clone, Debug)]
pub struct StructuredGrid {
    nlay: usize,
    nrow: usize,
    ncol: usize,
    top: Vec<f64>,
    botm: Vec<f64>,
    active: Vec<bool>,
}

impl StructuredGrid {
    /// Create a grid, validating array shapes against the extents.
    pub fn new(
        nlay: usize,
        nrow: usize,
        ncol: usize,
        top: Vec<f64>,
        botm: Vec<f64>,
        active: Vec<bool>,
    ) -> Result<Self, GridError> {
        if nlay == 0 {
            return Err(GridError::ZeroExtent { axis: "nlay" });
        }
        if nrow == 0 {
            return Err(GridError::ZeroExtent { axis: "nrow" });
        }
        if ncol == 0 {
            return Err(GridError::ZeroExtent { axis: "ncol" });
        }
        let plan = nrow * ncol;
        let cells = nlay * plan;
        if top.len() != plan {
            return Err(GridError::ShapeMismatch {
                array: "top",
                expected: plan,
                got: top.len(),
            });
        }
        if botm.len() != cells {
            return Err(GridError::ShapeMismatch {
                array: "botm",
                expected: cells,
                got: botm.len(),
            });
        }
        if active.len() != cells {
            return Err(GridError::ShapeMismatch {
                array: "active",
                expected: cells,
                got: active.len(),
            });
        }
        Ok(Self {
            nlay,
            nrow,
            ncol,
            top,
            botm,
            active,
        })
    }

    /// Number of layers.
    pub fn nlay(&self) -> usize {
        self.nlay
    }

    /// Number of rows.
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Number of columns.
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Total cell count (`nlay * nrow * ncol`).
    pub fn cell_count(&self) -> usize {
        self.nlay * self.nrow * self.ncol
    }

    /// Flat index into per-`(layer, row, col)` arrays, layer-major.
    pub fn cell_index(&self, layer: usize, row: usize, col: usize) -> usize {
        (layer * self.nrow + row) * self.ncol + col
    }

    /// Flat index into per-`(row, col)` arrays, row-major.
    pub fn plan_index(&self, row: usize, col: usize) -> usize {
        row * self.ncol + col
    }

    /// Whether signed `(k, i, j)` indices address a cell of this grid.
    ///
    /// Boundary-condition tables carry indices as signed integers so that
    /// out-of-range and negative values can be detected rather than
    /// panicking.
    pub fn contains(&self, k: i64, i: i64, j: i64) -> bool {
        k >= 0
            && i >= 0
            && j >= 0
            && (k as usize) < self.nlay
            && (i as usize) < self.nrow
            && (j as usize) < self.ncol
    }

    /// Whether the cell participates in the flow solution.
    pub fn is_active(&self, layer: usize, row: usize, col: usize) -> bool {
        self.active[self.cell_index(layer, row, col)]
    }

    /// Top elevation of the model at `(row, col)`.
    pub fn top(&self, row: usize, col: usize) -> f64 {
        self.top[self.plan_index(row, col)]
    }

    /// Bottom elevation of layer `layer` at `(row, col)`.
    pub fn botm(&self, layer: usize, row: usize, col: usize) -> f64 {
        self.botm[self.cell_index(layer, row, col)]
    }

    /// Thickness of the cell: the overlying surface minus the cell bottom.
    pub fn thickness(&self, layer: usize, row: usize, col: usize) -> f64 {
        let roof = if layer == 0 {
            self.top(row, col)
        } else {
            self.botm(layer - 1, row, col)
        };
        roof - self.botm(layer, row, col)
    }

    /// In-bounds face neighbours of a cell: the 4 horizontal neighbours in
    /// the same layer plus the cells directly above and below.
    pub fn face_neighbours(&self, layer: usize, row: usize, col: usize) -> NeighbourList {
        let mut out = NeighbourList::new();
        let (k, i, j) = (layer as i64, row as i64, col as i64);
        let candidates = [
            (k, i - 1, j),
            (k, i + 1, j),
            (k, i, j - 1),
            (k, i, j + 1),
            (k - 1, i, j),
            (k + 1, i, j),
        ];
        for (nk, ni, nj) in candidates {
            if self.contains(nk, ni, nj) {
                out.push(CellAddr::new(nk as usize, ni as usize, nj as usize));
            }
        }
        out
    }

    /// Whether any face neighbour of the cell is active.
    pub fn has_active_neighbour(&self, layer: usize, row: usize, col: usize) -> bool {
        self.face_neighbours(layer, row, col)
            .iter()
            .any(|n| self.is_active(n.layer, n.row, n.col))
    }
}
