//! Parameter-domain sampling
//!
//! Uniform sampling of a surface's two parameter axes. Each axis yields
//! `divisions + 1` samples covering the closed interval, so the last sample
//! of a periodic axis repeats the first sample's geometry with a distinct
//! texture coordinate.

/// Evenly spaced samples over `[start, end]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSampler {
    pub start: f32,
    pub end: f32,
    pub divisions: u32,
}

impl AxisSampler {
    pub const fn new(start: f32, end: f32, divisions: u32) -> Self {
        Self {
            start,
            end,
            divisions,
        }
    }

    /// Number of samples: one more than the division count
    pub fn sample_count(&self) -> u32 {
        self.divisions + 1
    }

    /// Parameter value of sample `k`; the final sample is exactly `end`
    pub fn at(&self, k: u32) -> f32 {
        if k >= self.divisions {
            return self.end;
        }
        self.start + (self.end - self.start) * (k as f32 / self.divisions as f32)
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..=self.divisions).map(move |k| self.at(k))
    }
}

/// One grid sample: its grid position and parameter pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSample {
    pub i: u32,
    pub j: u32,
    pub p: f32,
    pub q: f32,
}

/// `(rows.divisions + 1) × (cols.divisions + 1)` grid of parameter pairs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamGrid {
    pub rows: AxisSampler,
    pub cols: AxisSampler,
}

impl ParamGrid {
    pub const fn new(rows: AxisSampler, cols: AxisSampler) -> Self {
        Self { rows, cols }
    }

    pub fn row_count(&self) -> u32 {
        self.rows.sample_count()
    }

    pub fn col_count(&self) -> u32 {
        self.cols.sample_count()
    }

    /// Total number of samples (and vertices)
    pub fn len(&self) -> usize {
        self.row_count() as usize * self.col_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major vertex index of grid position `(i, j)`
    pub fn index(&self, i: u32, j: u32) -> u32 {
        i * self.col_count() + j
    }

    /// All samples in row-major order
    pub fn samples(&self) -> impl Iterator<Item = GridSample> + '_ {
        (0..self.row_count()).flat_map(move |i| {
            let p = self.rows.at(i);
            (0..self.col_count()).map(move |j| GridSample {
                i,
                j,
                p,
                q: self.cols.at(j),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_axis_endpoints_exact() {
        let axis = AxisSampler::new(-PI, PI, 7);
        assert_eq!(axis.at(0), -PI);
        assert_eq!(axis.at(7), PI);
        assert_eq!(axis.iter().count(), 8);
    }

    #[test]
    fn test_axis_uniform_spacing() {
        let axis = AxisSampler::new(-1.0, 1.0, 4);
        let values: Vec<f32> = axis.iter().collect();
        assert_eq!(values, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_grid_row_major_order() {
        let grid = ParamGrid::new(AxisSampler::new(0.0, 1.0, 2), AxisSampler::new(0.0, 1.0, 3));
        assert_eq!(grid.len(), 12);

        for (n, sample) in grid.samples().enumerate() {
            assert_eq!(grid.index(sample.i, sample.j) as usize, n);
        }

        let last = grid.samples().last().expect("grid has samples");
        assert_eq!((last.i, last.j), (2, 3));
        assert_eq!((last.p, last.q), (1.0, 1.0));
    }
}
