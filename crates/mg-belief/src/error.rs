use mg_core::{Cell, GridDims, GridError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeliefError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("belief mass {sum} cannot be normalized (all probability was annihilated)")]
    DegenerateDistribution { sum: f64 },

    #[error("grid is {got} but the belief expects {expected}")]
    DimensionMismatch {
        expected: GridDims,
        got:      GridDims,
    },

    #[error("belief for a {dims} grid needs {expected} values, got {got}")]
    LengthMismatch {
        dims:     GridDims,
        expected: usize,
        got:      usize,
    },

    #[error("probability {value} at {cell} is negative or not finite")]
    InvalidProbability { cell: Cell, value: f64 },
}

pub type BeliefResult<T> = Result<T, BeliefError>;
