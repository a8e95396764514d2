//! The `OutputWriter` trait implemented by backend writers.

use crate::{BeliefCellRow, OutputResult, StepSummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`BeliefOutputObserver::take_error`][crate::BeliefOutputObserver::take_error].
pub trait OutputWriter {
    /// Write every cell of one belief snapshot.
    fn write_snapshot(&mut self, rows: &[BeliefCellRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
