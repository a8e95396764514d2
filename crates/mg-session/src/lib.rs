//! `mg-session` — drives a robot around a colored grid and keeps the belief
//! engine in step with it.
//!
//! # Command loop
//!
//! ```text
//! loop:
//!   ① Ask      — Controller::next_command(ctx, rng); None ends the run.
//!   ② Apply    — Move(d)     → robot.try_move(d); if it moved, engine.step(d, robot)
//!                MoveRandom  → same, with d drawn from the open directions
//!                Kick        → robot teleported; belief untouched
//!                Setup       → new color map + robot cell; belief uniform
//!   ③ Observe  — on_step / on_blocked / on_kick / on_setup, and
//!                on_snapshot every `snapshot_interval` steps.
//! ```
//!
//! The loop stops early once `config.max_commands` commands were issued.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Row-parallel belief passes on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mg_control::RandomWalk;
//! use mg_core::LocalizationConfig;
//! use mg_session::{NoopObserver, SessionBuilder};
//!
//! let mut session = SessionBuilder::new(LocalizationConfig::default()).build()?;
//! session.run(&mut RandomWalk::new(100), &mut NoopObserver)?;
//! println!("best guess {:?}", session.belief().most_likely());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod session;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use observer::{NoopObserver, SessionObserver};
pub use session::{Outcome, Session};
