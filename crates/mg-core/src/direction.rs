//! Movement directions as data.
//!
//! Every direction is a unit [`Offset`] in the grid frame.  The motion kernel
//! only reads a direction's offset, its opposite, and its two perpendiculars,
//! so one generic update serves all four moves.

use std::fmt;
use std::str::FromStr;

use crate::GridError;

// ── Offset ────────────────────────────────────────────────────────────────────

/// A signed `(Δrow, Δcol)` step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Offset {
    pub drow: isize,
    pub dcol: isize,
}

impl Offset {
    #[inline]
    pub const fn new(drow: isize, dcol: isize) -> Self {
        Self { drow, dcol }
    }

    #[inline]
    pub const fn reversed(self) -> Offset {
        Offset { drow: -self.drow, dcol: -self.dcol }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four commanded moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order `Up, Down, Left, Right`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset: Up = −1 row, Down = +1 row, Left = −1 col, Right = +1 col.
    #[inline]
    pub const fn offset(self) -> Offset {
        match self {
            Direction::Up    => Offset::new(-1, 0),
            Direction::Down  => Offset::new(1, 0),
            Direction::Left  => Offset::new(0, -1),
            Direction::Right => Offset::new(0, 1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The two directions at right angles to `self`.
    ///
    /// Vertical moves return `[Left, Right]`; horizontal moves `[Up, Down]`.
    #[inline]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down    => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Accepts the full name or its first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Direction, GridError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u"    => Ok(Direction::Up),
            "down" | "d"  => Ok(Direction::Down),
            "left" | "l"  => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            other => Err(GridError::Parse(format!(
                "invalid direction {other:?}: expected up, down, left or right"
            ))),
        }
    }
}
