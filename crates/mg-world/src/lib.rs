//! `mg-world` — the static world a robot localizes in.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`color_map`]   | `ColorMap` — immutable per-cell color classes              |
//! | [`robot`]       | `Robot` — true position, edge-clamped moves, kick          |
//! | [`loader`]      | CSV color-map loading                                      |
//!
//! The color map is data, not logic: it is assigned once per setup (randomly,
//! from a text pattern, or from CSV) and handed read-only to the belief
//! engine.  The robot's true position is owned by the driver and only ever
//! reaches the engine as "which cell to read the observation from".

pub mod color_map;
pub mod loader;
pub mod robot;


pub use color_map::ColorMap;
pub use loader::{load_color_map_csv, load_color_map_reader};
pub use robot::Robot;
