//! `BeliefOutputObserver<W>` — bridges `SessionObserver` to an `OutputWriter`.

use mg_belief::{BeliefGrid, StepReport};
use mg_core::Cell;
use mg_session::SessionObserver;
use mg_world::ColorMap;

use crate::row::{BeliefCellRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that writes belief snapshots and step summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SessionObserver`
/// methods have no return value.  After `session.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct BeliefOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> BeliefOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `session.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SessionObserver for BeliefOutputObserver<W> {
    fn on_step(&mut self, step: u64, report: &StepReport, _belief: &BeliefGrid) {
        let row = StepSummaryRow::from((step, report));
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: u64, belief: &BeliefGrid, colors: &ColorMap, robot: Cell) {
        let rows = BeliefCellRow::snapshot(step, belief, colors, robot);
        let result = self.writer.write_snapshot(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _issued: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
