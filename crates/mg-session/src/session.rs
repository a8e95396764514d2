//! The `Session` struct and its command loop.

use mg_belief::{BeliefEngine, BeliefGrid, StepReport};
use mg_control::{Command, ControlContext, Controller};
use mg_core::{Cell, ColorClass, Direction, LocalizationConfig, SetupRng};
use mg_world::{ColorMap, Robot};
use tracing::{debug, info};

use crate::{SessionObserver, SessionResult};

/// What applying one [`Command`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The robot moved and the belief was updated.
    Stepped(StepReport),

    /// The move would have left the grid.  Neither robot nor belief changed.
    Blocked(Direction),

    /// A random move was requested but the grid has no open direction
    /// (a 1×1 grid).
    Stuck,

    /// The robot was teleported.  The belief did not change.
    Kicked { from: Cell, to: Cell },

    /// New color map and robot cell; belief back to uniform.
    Setup,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One robot, one color map, one belief engine.
///
/// The session owns the true robot position and is the only thing that ever
/// hands the engine a cell: after each successful move it passes the robot's
/// new cell so the engine can read the color underneath.  A move refused at
/// the grid edge does not touch the belief.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session {
    /// Configuration the session was built from.  [`setup`](Self::setup)
    /// re-reads `dark_fraction` and the kernel parameters from here.
    pub config: LocalizationConfig,

    rng:    SetupRng,
    robot:  Robot,
    engine: BeliefEngine,

    /// Commands issued across every `run` call.
    issued: u64,

    /// Belief updates across the whole session.  Unlike
    /// [`BeliefEngine::steps`] this is not reset by `setup`.
    steps: u64,
}

impl Session {
    pub(crate) fn from_parts(
        config: LocalizationConfig,
        rng:    SetupRng,
        robot:  Robot,
        engine: BeliefEngine,
    ) -> Self {
        Self { config, rng, robot, engine, issued: 0, steps: 0 }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn robot(&self) -> Cell {
        self.robot.position()
    }

    #[inline]
    pub fn engine(&self) -> &BeliefEngine {
        &self.engine
    }

    #[inline]
    pub fn belief(&self) -> &BeliefGrid {
        self.engine.belief()
    }

    #[inline]
    pub fn colors(&self) -> &ColorMap {
        self.engine.colors()
    }

    /// Color class under the robot.
    #[inline]
    pub fn observe(&self) -> ColorClass {
        // The robot is always on-grid and the map always matches its dims.
        self.colors().get(self.robot()).unwrap_or_default()
    }

    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Draw a fresh color map and robot cell and reset the belief to uniform.
    pub fn setup(&mut self) -> SessionResult<()> {
        let dims = self.config.dims()?;
        let colors = ColorMap::random(dims, self.config.dark_fraction, &mut self.rng);
        let robot = Robot::random(dims, &mut self.rng);
        let engine = BeliefEngine::from_config(&self.config, colors)?;

        info!(
            %dims,
            dark_cells = engine.colors().count(ColorClass::Dark),
            robot = %robot.position(),
            "setup"
        );
        self.robot = robot;
        self.engine = engine;
        Ok(())
    }

    /// Move the robot one cell and update the belief.
    ///
    /// Returns `Ok(None)` if the move would leave the grid; the robot stays
    /// and the belief is untouched.
    pub fn move_robot(&mut self, direction: Direction) -> SessionResult<Option<StepReport>> {
        if !self.robot.try_move(direction) {
            debug!(%direction, robot = %self.robot(), "move blocked at grid edge");
            return Ok(None);
        }
        let report = self.engine.step(direction, self.robot.position())?;
        self.steps += 1;
        Ok(Some(report))
    }

    /// Move in a uniformly random open direction.
    ///
    /// `Ok(None)` only on a 1×1 grid, where no direction is open.
    pub fn move_random(&mut self) -> SessionResult<Option<StepReport>> {
        let open = self.robot.open_directions();
        let Some(&direction) = self.rng.choose(&open) else {
            return Ok(None);
        };
        self.move_robot(direction)
    }

    /// Teleport the robot to a random cell without telling the belief.
    ///
    /// Returns `(from, to)`.
    pub fn kick(&mut self) -> (Cell, Cell) {
        let from = self.robot.position();
        let to = self.robot.kick(&mut self.rng);
        info!(%from, %to, "robot kicked");
        (from, to)
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> SessionResult<Outcome> {
        Ok(match command {
            Command::Move(direction) => match self.move_robot(direction)? {
                Some(report) => Outcome::Stepped(report),
                None => Outcome::Blocked(direction),
            },
            Command::MoveRandom => match self.move_random()? {
                Some(report) => Outcome::Stepped(report),
                None => Outcome::Stuck,
            },
            Command::Kick => {
                let (from, to) = self.kick();
                Outcome::Kicked { from, to }
            }
            Command::Setup => {
                self.setup()?;
                Outcome::Setup
            }
        })
    }

    // ── Loop ──────────────────────────────────────────────────────────────

    /// Ask `controller` for commands and apply them until it returns `None`
    /// or `config.max_commands` have been issued in total.
    ///
    /// Returns the number of commands issued by this call.  A failed belief
    /// update stops the loop with the error; the published belief is the one
    /// from before the failing step.
    pub fn run<C, O>(&mut self, controller: &mut C, observer: &mut O) -> SessionResult<u64>
    where
        C: Controller + ?Sized,
        O: SessionObserver + ?Sized,
    {
        let start = self.issued;
        observer.on_run_start(self.engine.colors(), self.robot.position(), self.engine.belief());

        loop {
            if self.config.max_commands.is_some_and(|max| self.issued >= max) {
                break;
            }

            let ctx = ControlContext::new(self.issued, self.robot.position(), self.engine.belief());
            let Some(command) = controller.next_command(&ctx, &mut self.rng) else {
                break;
            };

            self.issued += 1;
            observer.on_command(self.issued, command);

            match self.apply(command)? {
                Outcome::Stepped(report) => {
                    observer.on_step(self.steps, &report, self.engine.belief());
                    let interval = self.config.snapshot_interval;
                    if interval > 0 && self.steps.is_multiple_of(interval) {
                        observer.on_snapshot(
                            self.steps,
                            self.engine.belief(),
                            self.engine.colors(),
                            self.robot.position(),
                        );
                    }
                }
                Outcome::Blocked(direction) => {
                    observer.on_blocked(direction, self.robot.position());
                }
                Outcome::Stuck => {}
                Outcome::Kicked { from, to } => observer.on_kick(from, to),
                Outcome::Setup => {
                    observer.on_setup(self.engine.colors(), self.robot.position());
                }
            }
        }

        let issued = self.issued - start;
        observer.on_run_end(issued);
        Ok(issued)
    }
}
