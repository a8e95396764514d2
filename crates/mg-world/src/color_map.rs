//! The grid/observation model: one immutable color class per cell.

use std::fmt;
use std::str::FromStr;

use mg_core::{Cell, ColorClass, GridDims, GridError, GridResult, SetupRng};

/// Dense row-major map from cell to [`ColorClass`].
///
/// Built once per setup and never mutated afterwards; re-running setup builds
/// a fresh map.  The belief engine holds it as a read-only dependency.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawColorMap", into = "RawColorMap"))]
pub struct ColorMap {
    dims:    GridDims,
    classes: Vec<ColorClass>,
}

impl ColorMap {
    /// Build a map by asking `f` for every cell in row-major order.
    pub fn from_fn(dims: GridDims, mut f: impl FnMut(Cell) -> ColorClass) -> Self {
        let classes = dims.cells().map(&mut f).collect();
        Self { dims, classes }
    }

    /// Every cell set to `class`.
    pub fn uniform(dims: GridDims, class: ColorClass) -> Self {
        Self { dims, classes: vec![class; dims.cell_count()] }
    }

    /// Wrap a pre-built row-major class vector.
    ///
    /// Fails with [`GridError::Parse`] unless `classes.len() == rows * cols`.
    pub fn from_classes(dims: GridDims, classes: Vec<ColorClass>) -> GridResult<Self> {
        if classes.len() != dims.cell_count() {
            return Err(GridError::Parse(format!(
                "color map for a {dims} grid needs {} classes, got {}",
                dims.cell_count(),
                classes.len()
            )));
        }
        Ok(Self { dims, classes })
    }

    /// Paint each cell dark with probability `dark_fraction`, light otherwise.
    pub fn random(dims: GridDims, dark_fraction: f64, rng: &mut SetupRng) -> Self {
        Self::from_fn(dims, |_| {
            if rng.gen_bool(dark_fraction) {
                ColorClass::Dark
            } else {
                ColorClass::Light
            }
        })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The class of `cell`, or `None` if it is off-grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<ColorClass> {
        self.dims.index(cell).map(|i| self.classes[i])
    }

    /// The class of `cell`; [`GridError::OutOfBounds`] if it is off-grid.
    pub fn class_at(&self, cell: Cell) -> GridResult<ColorClass> {
        self.get(cell)
            .ok_or(GridError::OutOfBounds { cell, dims: self.dims })
    }

    /// Row-major view of every class, aligned with belief-grid indices.
    #[inline]
    pub fn as_slice(&self) -> &[ColorClass] {
        &self.classes
    }

    /// Number of cells painted `class`.
    pub fn count(&self, class: ColorClass) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }
}

/// One line per row using [`ColorClass::glyph`] (`.` light, `#` dark).
impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.classes.chunks(self.dims.cols()).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for class in row {
                write!(f, "{}", class.glyph())?;
            }
        }
        Ok(())
    }
}

/// Parse the [`Display`](fmt::Display) form.  Blank lines and surrounding
/// whitespace are ignored; every remaining line must have the same width.
impl FromStr for ColorMap {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<ColorMap> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let cols = lines.first().map_or(0, |l| l.chars().count());
        let dims = GridDims::new(lines.len(), cols)?;

        let mut classes = Vec::with_capacity(dims.cell_count());
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::Parse(format!(
                    "row {row} has {} cells, expected {cols}",
                    line.chars().count()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let class = ColorClass::from_glyph(ch).ok_or_else(|| {
                    GridError::Parse(format!(
                        "invalid glyph {ch:?} at {}: expected '.' or '#'",
                        Cell::new(row, col)
                    ))
                })?;
                classes.push(class);
            }
        }
        Ok(ColorMap { dims, classes })
    }
}

// ── serde shim ────────────────────────────────────────────────────────────────

/// Unvalidated wire form of [`ColorMap`]; deserialization goes through
/// [`ColorMap::from_classes`] so the class count always matches the grid.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawColorMap {
    dims:    GridDims,
    classes: Vec<ColorClass>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawColorMap> for ColorMap {
    type Error = GridError;
    fn try_from(raw: RawColorMap) -> GridResult<ColorMap> {
        ColorMap::from_classes(raw.dims, raw.classes)
    }
}

#[cfg(feature = "serde")]
impl From<ColorMap> for RawColorMap {
    fn from(map: ColorMap) -> RawColorMap {
        RawColorMap { dims: map.dims, classes: map.classes }
    }
}
