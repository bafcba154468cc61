//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CallerRow, OutputResult, QueueSampleRow, RunSummaryRow, TrialSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`TrialOutputObserver`][crate::TrialOutputObserver]
/// stores the first one for retrieval with `take_error`.
pub trait OutputWriter {
    /// Write one run's results table.
    fn write_callers(&mut self, rows: &[CallerRow]) -> OutputResult<()>;

    /// Write one run's queue-length history.
    fn write_queue_samples(&mut self, rows: &[QueueSampleRow]) -> OutputResult<()>;

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
