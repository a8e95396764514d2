//! Motion model (prediction).
//!
//! # Kernel
//!
//! For a commanded move, each source cell hands its prior mass out as:
//!
//! ```text
//!             side
//!   back  [ stay ]  forward     (drawn for Direction::Right)
//!             side
//! ```
//!
//! A share whose target lies off the grid is dropped, not re-assigned.  A cell
//! pressed against the wall therefore loses most of its mass before the
//! sensor pass, and the grid under-sums until normalization.
//!
//! # Gather form
//!
//! The update is written per *target* cell:
//!
//!   new[t] = stay·old[t] + Σ_taps weight·old[t − offset]   (source on-grid)
//!
//! which equals scattering every source into its neighbors from a frozen
//! copy of the prior, but lets each output row be computed independently
//! (and in parallel with the `parallel` feature) without write conflicts.

use mg_core::{Cell, Direction, GridDims, MotionParams, Offset};

use crate::BeliefGrid;

/// One non-stay share of the kernel: mass moves by `offset` with `weight`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tap {
    pub offset: Offset,
    pub weight: f64,
}

/// Fixed stochastic motion kernel parameterized by [`MotionParams`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionKernel {
    params: MotionParams,
}

impl Default for MotionKernel {
    fn default() -> Self {
        Self::new(MotionParams::default())
    }
}

impl MotionKernel {
    pub fn new(params: MotionParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Forward, the two perpendiculars, and backward for `direction`.
    pub fn taps(&self, direction: Direction) -> [Tap; 4] {
        let [side_a, side_b] = direction.perpendicular();
        [
            Tap { offset: direction.offset(),            weight: self.params.forward },
            Tap { offset: side_a.offset(),               weight: self.params.side },
            Tap { offset: side_b.offset(),               weight: self.params.side },
            Tap { offset: direction.opposite().offset(), weight: self.params.backward },
        ]
    }

    /// Redistribute `prior` for a move in `direction`.
    ///
    /// Reads only from `prior`, so contributions never cascade within one
    /// pass.  The result is not normalized.
    pub fn predict(&self, prior: &BeliefGrid, direction: Direction) -> BeliefGrid {
        let dims = prior.dims();
        let src = prior.values();
        let taps = self.taps(direction);
        let stay = self.params.stay;

        let mut out = vec![0.0; dims.cell_count()];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(dims.cols())
                .enumerate()
                .for_each(|(row, dst)| gather_row(dims, src, &taps, stay, row, dst));
        }

        #[cfg(not(feature = "parallel"))]
        for (row, dst) in out.chunks_mut(dims.cols()).enumerate() {
            gather_row(dims, src, &taps, stay, row, dst);
        }

        BeliefGrid::from_raw(dims, out)
    }
}

/// Fill one output row.  `dst.len() == dims.cols()`.
#[inline]
fn gather_row(dims: GridDims, src: &[f64], taps: &[Tap; 4], stay: f64, row: usize, dst: &mut [f64]) {
    let cols = dims.cols();
    for (col, slot) in dst.iter_mut().enumerate() {
        let target = Cell::new(row, col);
        let mut acc = stay * src[row * cols + col];
        for tap in taps {
            // The source that would land on `target` through this tap.
            if let Some(s) = dims.neighbor(target, tap.offset.reversed()) {
                acc += tap.weight * src[s.row * cols + s.col];
            }
        }
        *slot = acc;
    }
}
