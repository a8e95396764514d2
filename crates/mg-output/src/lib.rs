//! `mg-output` — session output for the markov_grid framework.
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`csv`]        | `CsvWriter` → `belief_snapshots.csv`, `step_summaries.csv` |
//! | [`observer`]   | `BeliefOutputObserver<W>` — a `SessionObserver`            |
//! | [`row`]        | `BeliefCellRow`, `StepSummaryRow`                          |
//! | [`text`]       | `render_grid` — the belief as a fixed-width text table     |
//! | [`writer`]     | `OutputWriter` trait                                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use mg_output::{BeliefOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = BeliefOutputObserver::new(writer);
//! session.run(&mut controller, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::BeliefOutputObserver;
pub use row::{BeliefCellRow, StepSummaryRow};
pub use text::render_grid;
pub use writer::OutputWriter;
