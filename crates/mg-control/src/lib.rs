//! `mg-control` — commands and the controller trait that drives a session.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`command`]  | `Command` enum (`Move`, `MoveRandom`, `Kick`, `Setup`)        |
//! | [`context`]  | `ControlContext<'a>` — read-only view handed to controllers   |
//! | [`model`]    | `Controller` trait                                            |
//! | [`scripted`] | `ScriptedController`, `RandomWalk`, `Idle`                    |
//! | [`error`]    | `ControlError`, `ControlResult<T>`                            |
//!
//! Controllers only *choose* commands; mg-session applies them, moves the
//! robot, and runs the belief update.

pub mod command;
pub mod context;
pub mod error;
pub mod model;
pub mod scripted;


pub use command::Command;
pub use context::ControlContext;
pub use error::{ControlError, ControlResult};
pub use model::Controller;
pub use scripted::{Idle, RandomWalk, ScriptedController};
