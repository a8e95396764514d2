//! Session observer trait for display, logging, and data collection.

use mg_belief::{BeliefGrid, StepReport};
use mg_control::Command;
use mg_core::{Cell, Direction};
use mg_world::ColorMap;

/// Callbacks invoked by [`Session::run`][crate::Session::run] at key points in
/// the command loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Every borrow handed out points at the
/// published, normalized state; observers never see a half-updated grid.
///
/// # Example
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SessionObserver for StepPrinter {
///     fn on_step(&mut self, step: u64, report: &StepReport, _belief: &BeliefGrid) {
///         println!("step {step}: best {} at {:.5}", report.best, report.best_probability);
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called once before the first command, with the world as built.
    fn on_run_start(&mut self, _colors: &ColorMap, _robot: Cell, _belief: &BeliefGrid) {}

    /// Called for every command before it is applied.  `issued` counts from 1.
    fn on_command(&mut self, _issued: u64, _command: Command) {}

    /// Called after every completed belief update.  `step` counts updates
    /// across the whole session, including across setups.
    fn on_step(&mut self, _step: u64, _report: &StepReport, _belief: &BeliefGrid) {}

    /// Called at snapshot intervals (every `config.snapshot_interval` steps).
    fn on_snapshot(
        &mut self,
        _step:   u64,
        _belief: &BeliefGrid,
        _colors: &ColorMap,
        _robot:  Cell,
    ) {}

    /// Called when a move was refused at the grid edge.
    fn on_blocked(&mut self, _direction: Direction, _robot: Cell) {}

    /// Called after the robot was kicked.  The belief did not change.
    fn on_kick(&mut self, _from: Cell, _to: Cell) {}

    /// Called after a setup rebuilt the world and reset the belief.
    fn on_setup(&mut self, _colors: &ColorMap, _robot: Cell) {}

    /// Called once after the loop ends.
    fn on_run_end(&mut self, _issued: u64) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
