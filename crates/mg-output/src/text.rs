//! Plain-text rendering of a belief grid.

use std::fmt::Write;

use mg_belief::BeliefGrid;
use mg_core::Cell;
use mg_world::ColorMap;

/// One line per grid row.  Each cell shows its color glyph (`.` light,
/// `#` dark) followed by its probability to five decimals; the robot's cell
/// is bracketed.
///
/// ```text
///  #0.01235  .0.11111 [.0.54321]
/// ```
///
/// Trailing whitespace is trimmed from every line.
pub fn render_grid(belief: &BeliefGrid, colors: &ColorMap, robot: Option<Cell>) -> String {
    let mut out = String::new();
    for row in 0..belief.rows() {
        let mut line = String::new();
        for col in 0..belief.cols() {
            let cell = Cell::new(row, col);
            let p = belief.get(cell).unwrap_or(0.0);
            let glyph = colors.get(cell).unwrap_or_default().glyph();
            let (open, close) = if robot == Some(cell) { ('[', ']') } else { (' ', ' ') };
            // Writing to a String cannot fail.
            let _ = write!(line, "{open}{glyph}{p:.5}{close}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
