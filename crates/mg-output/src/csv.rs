//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `belief_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BeliefCellRow, OutputResult, StepSummaryRow};

pub const SNAPSHOT_FILE: &str = "belief_snapshots.csv";
pub const SUMMARY_FILE:  &str = "step_summaries.csv";

pub const SNAPSHOT_HEADER: [&str; 6] = ["step", "row", "col", "class", "probability", "robot"];
pub const SUMMARY_HEADER: [&str; 10] = [
    "step",
    "direction",
    "robot_row",
    "robot_col",
    "observed",
    "predicted_mass",
    "evidence",
    "best_row",
    "best_col",
    "best_probability",
];

/// Writes session output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, rows: &[BeliefCellRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.class.as_str().to_owned(),
                row.probability.to_string(),
                (row.robot as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.direction.as_str().to_owned(),
            row.robot_row.to_string(),
            row.robot_col.to_string(),
            row.observed.as_str().to_owned(),
            row.predicted_mass.to_string(),
            row.evidence.to_string(),
            row.best_row.to_string(),
            row.best_col.to_string(),
            row.best_probability.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
