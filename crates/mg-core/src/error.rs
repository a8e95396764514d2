//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `GridError` as one
//! variant via `#[from]`, so geometry failures keep their shape all the
//! way up to the driver.

use thiserror::Error;

use crate::{Cell, GridDims};

/// The base error type for `mg-core` and the common root for sub-crates.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must both be at least 1 and their product must fit in usize")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell {cell} is outside the {dims} grid")]
    OutOfBounds { cell: Cell, dims: GridDims },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for geometry and configuration operations.
pub type GridResult<T> = Result<T, GridError>;
