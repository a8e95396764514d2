//! Controllers that need no decision-making: a fixed script, a random walk,
//! and one that never acts.

use std::collections::VecDeque;
use std::str::FromStr;

use mg_core::SetupRng;

use crate::{Command, ControlContext, ControlError, ControlResult, Controller};

// ── ScriptedController ────────────────────────────────────────────────────────

/// Replays a fixed command list, then ends the run.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    queue: VecDeque<Command>,
}

impl ScriptedController {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self { queue: commands.into_iter().collect() }
    }

    /// Commands not yet issued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Controller for ScriptedController {
    fn next_command(&mut self, _ctx: &ControlContext<'_>, _rng: &mut SetupRng) -> Option<Command> {
        self.queue.pop_front()
    }
}

/// Parse a script of [`Command`] tokens separated by whitespace or commas,
/// e.g. `"up up left ? k right"`.
impl FromStr for ScriptedController {
    type Err = ControlError;

    fn from_str(s: &str) -> ControlResult<ScriptedController> {
        let commands = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Command>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ScriptedController::new(commands))
    }
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// Issues `remaining` random moves.
#[derive(Copy, Clone, Debug)]
pub struct RandomWalk {
    pub remaining: u64,
}

impl RandomWalk {
    pub fn new(moves: u64) -> Self {
        Self { remaining: moves }
    }
}

impl Controller for RandomWalk {
    fn next_command(&mut self, _ctx: &ControlContext<'_>, _rng: &mut SetupRng) -> Option<Command> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Command::MoveRandom)
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

/// A [`Controller`] that ends every run immediately.
pub struct Idle;

impl Controller for Idle {
    fn next_command(&mut self, _ctx: &ControlContext<'_>, _rng: &mut SetupRng) -> Option<Command> {
        None
    }
}
