//! Grid geometry: fixed dimensions and 0-indexed cell coordinates.
//!
//! All per-cell state in the framework (color classes, belief values) is kept
//! in flat row-major `Vec`s with stride `cols`.  `GridDims` owns that mapping:
//!
//!   index = row * cols + col
//!
//! Dimensions are validated once at construction and never change afterwards,
//! so every flat array built from the same `GridDims` has the same length.

use std::fmt;

use crate::{GridError, GridResult, Offset};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A cell coordinate, `(row, col)`, 0-indexed from the top-left corner.
///
/// Row grows downward (`Direction::Down` is `+1` row) and col grows to the
/// right.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply `offset`, returning `None` if either coordinate would go negative.
    ///
    /// The upper bound is not checked here; use [`GridDims::neighbor`] for a
    /// fully bounds-checked step.
    #[inline]
    pub fn offset(self, offset: Offset) -> Option<Cell> {
        let row = self.row.checked_add_signed(offset.drow)?;
        let col = self.col.checked_add_signed(offset.dcol)?;
        Some(Cell { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Cell {
        Cell { row, col }
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Immutable `(rows, cols)` pair, both at least 1.
///
/// The fields are private so an invalid `GridDims` can never be constructed;
/// use [`GridDims::new`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDims", into = "RawDims"))]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    /// Validate and build a dimension pair.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either side is zero or
    /// `rows * cols` does not fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.  Never zero and never overflows.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Fail with [`GridError::OutOfBounds`] unless `cell` lies on the grid.
    #[inline]
    pub fn check(self, cell: Cell) -> GridResult<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { cell, dims: self })
        }
    }

    /// Flat row-major index of `cell`, or `None` if it is off-grid.
    #[inline]
    pub fn index(self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Inverse of [`index`](Self::index).
    ///
    /// # Panics
    /// Panics in debug mode if `index >= cell_count()`.
    #[inline]
    pub fn cell_at(self, index: usize) -> Cell {
        debug_assert!(index < self.cell_count());
        Cell { row: index / self.cols, col: index % self.cols }
    }

    /// The cell one `offset` away from `cell`, if it exists on this grid.
    #[inline]
    pub fn neighbor(self, cell: Cell, offset: Offset) -> Option<Cell> {
        cell.offset(offset).filter(|&c| self.contains(c))
    }

    /// Iterate every cell in row-major order (same order as the flat arrays).
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.cell_count()).map(move |i| self.cell_at(i))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ── serde shim ────────────────────────────────────────────────────────────────

/// Unvalidated wire form of [`GridDims`]; deserialization goes through
/// [`GridDims::new`] so zero-sized grids are rejected at load time.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDims {
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDims> for GridDims {
    type Error = GridError;
    fn try_from(raw: RawDims) -> GridResult<GridDims> {
        GridDims::new(raw.rows, raw.cols)
    }
}

#[cfg(feature = "serde")]
impl From<GridDims> for RawDims {
    fn from(dims: GridDims) -> RawDims {
        RawDims { rows: dims.rows, cols: dims.cols }
    }
}
