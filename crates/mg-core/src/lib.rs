//! `mg-core` — foundational types for the `markov_grid` localization framework.
//!
//! This crate is a dependency of every other `mg-*` crate.  It has no `mg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`grid`]        | `GridDims`, `Cell`                                        |
//! | [`direction`]   | `Direction`, `Offset`                                     |
//! | [`color`]       | `ColorClass` — the observable per-cell feature            |
//! | [`config`]      | `LocalizationConfig`, `MotionParams`, `SensorParams`, …   |
//! | [`rng`]         | `SetupRng` — seeded RNG for setup, kick and random moves  |
//! | [`error`]       | `GridError`, `GridResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::ColorClass;
pub use config::{DegeneratePolicy, LocalizationConfig, MotionParams, SensorParams};
pub use direction::{Direction, Offset};
pub use error::{GridError, GridResult};
pub use grid::{Cell, GridDims};
pub use rng::SetupRng;
