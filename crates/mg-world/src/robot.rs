//! The robot's true position.
//!
//! The belief engine never reads this directly: the only thing that crosses
//! from the robot to the engine is the color class under it after a move.

use mg_core::{Cell, Direction, GridDims, GridResult, SetupRng};

/// A single robot on a fixed grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRobot", into = "RawRobot"))]
pub struct Robot {
    dims:     GridDims,
    position: Cell,
}

impl Robot {
    /// Place the robot on `cell`; [`mg_core::GridError::OutOfBounds`] if the
    /// cell is off-grid.
    pub fn place(dims: GridDims, cell: Cell) -> GridResult<Self> {
        dims.check(cell)?;
        Ok(Self { dims, position: cell })
    }

    /// Place the robot on a uniformly random cell.
    pub fn random(dims: GridDims, rng: &mut SetupRng) -> Self {
        Self { dims, position: random_cell(dims, rng) }
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// `true` unless `direction` would take the robot off the grid.
    #[inline]
    pub fn can_move(&self, direction: Direction) -> bool {
        self.dims.neighbor(self.position, direction.offset()).is_some()
    }

    /// Every direction the robot can currently take, in `Direction::ALL` order.
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    /// Step one cell in `direction`.
    ///
    /// A move off the grid is a no-op and returns `false`.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        match self.dims.neighbor(self.position, direction.offset()) {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }

    /// Teleport to a uniformly random cell and return it.
    pub fn kick(&mut self, rng: &mut SetupRng) -> Cell {
        self.position = random_cell(self.dims, rng);
        self.position
    }
}

fn random_cell(dims: GridDims, rng: &mut SetupRng) -> Cell {
    Cell::new(rng.gen_range(0..dims.rows()), rng.gen_range(0..dims.cols()))
}

// ── serde shim ────────────────────────────────────────────────────────────────

/// Unvalidated wire form of [`Robot`]; deserialization goes through
/// [`Robot::place`] so a loaded robot is always on its grid.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawRobot {
    dims:     GridDims,
    position: Cell,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRobot> for Robot {
    type Error = mg_core::GridError;
    fn try_from(raw: RawRobot) -> GridResult<Robot> {
        Robot::place(raw.dims, raw.position)
    }
}

#[cfg(feature = "serde")]
impl From<Robot> for RawRobot {
    fn from(robot: Robot) -> RawRobot {
        RawRobot { dims: robot.dims, position: robot.position }
    }
}
