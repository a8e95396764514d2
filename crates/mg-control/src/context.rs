//! Read-only session state passed to every controller call.

use mg_belief::BeliefGrid;
use mg_core::{Cell, GridDims};

/// A read-only snapshot of the session handed to
/// [`Controller::next_command`][crate::Controller::next_command].
///
/// The session never allows mutable access to the belief while a context is
/// live.
pub struct ControlContext<'a> {
    /// Commands issued so far in this run.
    pub issued: u64,

    /// The robot's true cell.
    pub robot: Cell,

    pub dims: GridDims,

    /// The published (normalized) belief.
    pub belief: &'a BeliefGrid,
}

impl<'a> ControlContext<'a> {
    #[inline]
    pub fn new(issued: u64, robot: Cell, belief: &'a BeliefGrid) -> Self {
        Self { issued, robot, dims: belief.dims(), belief }
    }
}
