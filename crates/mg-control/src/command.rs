//! Commands a controller can ask the session to carry out.

use std::fmt;
use std::str::FromStr;

use mg_core::Direction;

use crate::{ControlError, ControlResult};

/// One driver action.
///
/// Produced by [`Controller::next_command`][crate::Controller::next_command]
/// and applied by the session.  Only `Move` and `MoveRandom` run a belief
/// update; `Kick` and `Setup` touch the world without any probabilistic step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the robot one cell.  Blocked at the grid edge (no update).
    Move(Direction),

    /// Move in a uniformly random direction that is not blocked.
    MoveRandom,

    /// Teleport the robot to a random cell.  The belief does not follow.
    Kick,

    /// Re-randomize colors and robot, reset the belief to uniform.
    Setup,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(d)    => write!(f, "{d}"),
            Command::MoveRandom => f.write_str("random"),
            Command::Kick       => f.write_str("kick"),
            Command::Setup      => f.write_str("setup"),
        }
    }
}

impl FromStr for Command {
    type Err = ControlError;

    /// Token names follow the interactive key bindings: arrows as
    /// `up|down|left|right` (or their initials), `random|?`, `kick|k`,
    /// `setup|s`.
    fn from_str(s: &str) -> ControlResult<Command> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "?" => Ok(Command::MoveRandom),
            "kick" | "k"   => Ok(Command::Kick),
            "setup" | "s"  => Ok(Command::Setup),
            other => other
                .parse::<Direction>()
                .map(Command::Move)
                .map_err(|_| {
                    ControlError::Parse(format!(
                        "invalid command {other:?}: expected a direction, random, kick or setup"
                    ))
                }),
        }
    }
}
