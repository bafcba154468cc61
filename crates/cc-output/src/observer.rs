//! `TrialOutputObserver<W>`: bridges `TrialObserver` to an `OutputWriter`.

use cc_sim::{RunOutput, TrialObserver, TrialSummary};

use crate::row::{CallerRow, QueueSampleRow, RunSummaryRow, TrialSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TrialObserver`] that writes every finished run's tables, and the
/// trial summary, to any [`OutputWriter`] backend.
///
/// `TrialObserver` callbacks cannot fail, so the first writer error is
/// parked here; collect it with [`take_error`][Self::take_error] once
/// `trial.run()` has returned.  Later errors are dropped.
pub struct TrialOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrialOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The first write error, if any.  `None` once taken.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer without a trial summary, e.g. after a failed trial
    /// so the completed runs' rows reach disk.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn keep_first(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }

    fn write_run(&mut self, output: &RunOutput) -> OutputResult<()> {
        let callers: Vec<CallerRow> = output
            .callers
            .iter()
            .map(|c| CallerRow::new(output.run, c))
            .collect();
        self.writer.write_callers(&callers)?;

        let samples: Vec<QueueSampleRow> = output
            .queue_history
            .iter()
            .map(|s| QueueSampleRow::new(output.run, s))
            .collect();
        self.writer.write_queue_samples(&samples)?;

        self.writer.write_run_summary(&RunSummaryRow::new(output))
    }
}

impl<W: OutputWriter> TrialObserver for TrialOutputObserver<W> {
    fn on_run_end(&mut self, output: &RunOutput) {
        let result = self.write_run(output);
        self.keep_first(result);
    }

    fn on_trial_end(&mut self, summary: &TrialSummary) {
        let result = self.writer.write_trial_summary(&TrialSummaryRow::new(summary));
        self.keep_first(result);
        let result = self.writer.finish();
        self.keep_first(result);
    }
}
