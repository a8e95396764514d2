//! The `Controller` trait — the extension point that decides what the robot
//! does next.

use mg_core::SetupRng;

use crate::{Command, ControlContext};

/// Pluggable command source.
///
/// The session calls [`next_command`][Self::next_command] once per iteration
/// of its run loop and applies the returned [`Command`].  Returning `None`
/// ends the run.
///
/// Any randomness must come from the supplied [`SetupRng`] so a run is fully
/// reproducible from the configured seed.
///
/// # Example
///
/// ```rust,ignore
/// /// Walk right until the wall, then stop.
/// struct RightToWall;
///
/// impl Controller for RightToWall {
///     fn next_command(&mut self, ctx: &ControlContext<'_>, _rng: &mut SetupRng) -> Option<Command> {
///         (ctx.robot.col + 1 < ctx.dims.cols()).then_some(Command::Move(Direction::Right))
///     }
/// }
/// ```
pub trait Controller {
    fn next_command(&mut self, ctx: &ControlContext<'_>, rng: &mut SetupRng) -> Option<Command>;
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn next_command(&mut self, ctx: &ControlContext<'_>, rng: &mut SetupRng) -> Option<Command> {
        (**self).next_command(ctx, rng)
    }
}
