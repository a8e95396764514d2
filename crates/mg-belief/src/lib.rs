//! `mg-belief` — grid-based Markov localization.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`grid`]    | `BeliefGrid` — dense row-major probability map                    |
//! | [`motion`]  | `MotionKernel` — prediction by a fixed 91/3/3/1/2 stochastic kernel |
//! | [`sensor`]  | `SensorModel` — correction by color-class likelihood              |
//! | [`engine`]  | `BeliefEngine` — owns the belief; `step` = predict → correct → normalize |
//! | [`error`]   | `BeliefError`, `BeliefResult<T>`                                  |
//!
//! # Update cycle
//!
//! 1. **Predict**: every source cell's prior mass is split forward / sideways
//!    / backward / stay.  Shares aimed off the grid are lost, so the total
//!    drops below 1 near the walls.
//! 2. **Correct**: each cell is multiplied by the hit likelihood if its color
//!    class matches the one under the robot, by the miss likelihood
//!    otherwise.
//! 3. **Normalize**: divide by the total.  A zero total is reported as
//!    `DegenerateDistribution` (or reset to uniform, per `DegeneratePolicy`).
//!
//! Every pass writes a fresh grid; the engine publishes the result only after
//! all three succeed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Row-parallel motion and sensor passes on Rayon.            |

pub mod engine;
pub mod error;
pub mod grid;
pub mod motion;
pub mod sensor;

#[cfg(test)]
mod tests;

pub use engine::{BeliefEngine, StepReport};
pub use error::{BeliefError, BeliefResult};
pub use grid::BeliefGrid;
pub use motion::{MotionKernel, Tap};
pub use sensor::SensorModel;
