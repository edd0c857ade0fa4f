//! Grid topology
//!
//! Stitches a sampled parameter grid into triangles. Each cell `(i, j)` with
//! `i < rows`, `j < cols` becomes two triangles; neighbor indices wrap with
//! a modulo over the vertex grid, and the duplicate final row/column closes
//! the surface while keeping texture coordinates monotonic.

use crate::sampler::ParamGrid;
use crate::types::MeshBuilder;

/// Orientation of the parameter axes relative to the outward normal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Winding {
    /// `∂P/∂p × ∂P/∂q` points outward; parameter-space CCW is outward CCW
    #[default]
    Forward,
    /// `∂P/∂p × ∂P/∂q` points inward; triangles are flipped
    Reversed,
}

impl Winding {
    /// Apply this winding to a triangle given CCW in parameter space
    pub fn orient(self, [a, b, c]: [u32; 3]) -> [u32; 3] {
        match self {
            Self::Forward => [a, b, c],
            Self::Reversed => [a, c, b],
        }
    }
}

/// Index count produced for a grid with the given division counts
pub fn grid_index_count(rows: u32, cols: u32) -> usize {
    6 * rows as usize * cols as usize
}

/// Emit two triangles per grid cell
pub fn build_grid_indices<M: MeshBuilder>(mesh: &mut M, grid: &ParamGrid, winding: Winding) {
    let rows = grid.rows.divisions;
    let cols = grid.cols.divisions;
    let row_samples = grid.row_count();
    let col_samples = grid.col_count();

    for i in 0..rows {
        let next_i = (i + 1) % row_samples;

        for j in 0..cols {
            let next_j = (j + 1) % col_samples;

            let i0 = grid.index(i, j);
            let i1 = grid.index(next_i, j);
            let i2 = grid.index(i, next_j);
            let i3 = grid.index(next_i, next_j);

            // i0 -> i1 -> i2 and i3 -> i2 -> i1 are both CCW in (p, q)
            let [a, b, c] = winding.orient([i0, i1, i2]);
            mesh.add_triangle(a, b, c);
            let [a, b, c] = winding.orient([i3, i2, i1]);
            mesh.add_triangle(a, b, c);
        }
    }
}
