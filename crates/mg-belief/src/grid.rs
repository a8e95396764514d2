//! The belief grid: one probability per cell.

use mg_core::{Cell, GridDims};

use crate::{BeliefError, BeliefResult};

/// Dense row-major probability map over a fixed grid.
///
/// Every value produced by [`BeliefEngine`](crate::BeliefEngine) is
/// non-negative and the grid sums to 1 (within floating-point tolerance).
/// Intermediate grids returned by the motion and sensor passes are *not*
/// normalized; [`total`](Self::total) reports how much mass they carry.
#[derive(Clone, Debug, PartialEq)]
pub struct BeliefGrid {
    dims:  GridDims,
    probs: Vec<f64>,
}

impl BeliefGrid {
    /// Every cell at `1 / (rows * cols)`.
    pub fn uniform(dims: GridDims) -> Self {
        let p = 1.0 / dims.cell_count() as f64;
        Self { dims, probs: vec![p; dims.cell_count()] }
    }

    /// Wrap caller-supplied row-major values (e.g. a synthetic prior).
    ///
    /// Values must be finite and non-negative; they are *not* normalized.
    pub fn from_values(dims: GridDims, values: Vec<f64>) -> BeliefResult<Self> {
        if values.len() != dims.cell_count() {
            return Err(BeliefError::LengthMismatch {
                dims,
                expected: dims.cell_count(),
                got:      values.len(),
            });
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(BeliefError::InvalidProbability {
                cell:  dims.cell_at(i),
                value: values[i],
            });
        }
        Ok(Self { dims, probs: values })
    }

    /// Unchecked constructor for values produced inside this crate.
    #[inline]
    pub(crate) fn from_raw(dims: GridDims, probs: Vec<f64>) -> Self {
        debug_assert_eq!(probs.len(), dims.cell_count());
        Self { dims, probs }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols()
    }

    /// Probability at `cell`, or `None` if it is off-grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<f64> {
        self.dims.index(cell).map(|i| self.probs[i])
    }

    /// Probability at `cell`; `OutOfBounds` if it is off-grid.
    pub fn probability_at(&self, cell: Cell) -> BeliefResult<f64> {
        self.dims.check(cell)?;
        Ok(self.probs[cell.row * self.dims.cols() + cell.col])
    }

    /// Row-major view of every value.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.probs
    }

    /// One row of the grid, or `None` if `row >= rows`.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows()).then(|| {
            let start = row * self.cols();
            &self.probs[start..start + self.cols()]
        })
    }

    /// Sum of every cell.  1 for a published belief; less than 1 after a
    /// motion pass that pushed mass off the grid.
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// The cell with the highest probability.  Ties resolve to the first cell
    /// in row-major order.
    pub fn most_likely(&self) -> (Cell, f64) {
        let mut best = (0, self.probs[0]);
        for (i, &p) in self.probs.iter().enumerate().skip(1) {
            if p > best.1 {
                best = (i, p);
            }
        }
        (self.dims.cell_at(best.0), best.1)
    }

    /// `(cell, probability)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.probs
            .iter()
            .enumerate()
            .map(|(i, &p)| (self.dims.cell_at(i), p))
    }

    /// A copy rescaled to sum to 1.
    ///
    /// Fails with [`BeliefError::DegenerateDistribution`] if the total is
    /// zero or not finite; dividing by it would only spread NaN.
    pub fn normalized(&self) -> BeliefResult<BeliefGrid> {
        let sum = self.total();
        if !(sum.is_finite() && sum > 0.0) {
            return Err(BeliefError::DegenerateDistribution { sum });
        }
        let probs = self.probs.iter().map(|p| p / sum).collect();
        Ok(Self { dims: self.dims, probs })
    }
}
