//! CSV color-map loader.
//!
//! # CSV format
//!
//! One row per cell.  Every cell of the grid must appear exactly once.
//!
//! ```csv
//! row,col,class
//! 0,0,light
//! 0,1,dark
//! 1,0,dark
//! 1,1,light
//! ```
//!
//! **`class`** accepts anything [`ColorClass`]'s `FromStr` does
//! (`light`/`white`/`.` or `dark`/`grey`/`gray`/`#`).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use mg_core::{Cell, ColorClass, GridDims, GridError, GridResult};

use crate::ColorMap;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ColorRecord {
    row:   usize,
    col:   usize,
    class: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ColorMap`] for a `dims` grid from a CSV file.
pub fn load_color_map_csv(path: &Path, dims: GridDims) -> GridResult<ColorMap> {
    let file = std::fs::File::open(path)?;
    load_color_map_reader(file, dims)
}

/// Like [`load_color_map_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a layout in a
/// binary.
pub fn load_color_map_reader<R: Read>(reader: R, dims: GridDims) -> GridResult<ColorMap> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut slots: Vec<Option<ColorClass>> = vec![None; dims.cell_count()];

    for result in csv_reader.deserialize::<ColorRecord>() {
        let rec = result.map_err(|e| GridError::Parse(e.to_string()))?;
        let cell = Cell::new(rec.row, rec.col);
        dims.check(cell)?;
        let class: ColorClass = rec.class.parse()?;

        // check() above guarantees an index.
        let slot = &mut slots[cell.row * dims.cols() + cell.col];
        if slot.replace(class).is_some() {
            return Err(GridError::Parse(format!("cell {cell} assigned more than once")));
        }
    }

    let classes = slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.ok_or_else(|| {
                GridError::Parse(format!("cell {} has no color class", dims.cell_at(i)))
            })
        })
        .collect::<GridResult<Vec<_>>>()?;

    let map = ColorMap::from_classes(dims, classes)?;
    debug!(
        dims = %dims,
        dark = map.count(ColorClass::Dark),
        "loaded color map from CSV"
    );
    Ok(map)
}
