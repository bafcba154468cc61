//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `callers.csv`
//! - `queue_lengths.csv`
//! - `run_summaries.csv`
//! - `trial_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CallerRow, OutputResult, QueueSampleRow, RunSummaryRow, TrialSummaryRow};

pub const CALLER_HEADERS: [&str; 10] = [
    "run",
    "caller_id",
    "arrival_time",
    "queue_time",
    "service_time",
    "completion_time",
    "abandoned",
    "bounced",
    "retry_count",
    "outcome",
];

pub const QUEUE_HEADERS: [&str; 3] = ["run", "time", "queue_length"];

pub const RUN_SUMMARY_HEADERS: [&str; 12] = [
    "run",
    "mean_queue_time",
    "mean_service_time",
    "total_calls",
    "completed_calls",
    "abandoned_calls",
    "bounced_calls",
    "max_queue_length",
    "calls_per_hour",
    "handlers_added",
    "handlers_removed",
    "peak_waiting",
];

pub const TRIAL_SUMMARY_HEADERS: [&str; 10] = [
    "runs",
    "mean_queue_time",
    "mean_service_time",
    "total_calls",
    "completed_calls",
    "abandoned_calls",
    "bounced_calls",
    "mean_max_queue",
    "max_queue_length",
    "calls_per_hour",
];

/// Writes trial output to four CSV files.
pub struct CsvWriter {
    callers:   Writer<File>,
    queue:     Writer<File>,
    runs:      Writer<File>,
    trial:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut callers = Writer::from_path(dir.join("callers.csv"))?;
        callers.write_record(CALLER_HEADERS)?;

        let mut queue = Writer::from_path(dir.join("queue_lengths.csv"))?;
        queue.write_record(QUEUE_HEADERS)?;

        let mut runs = Writer::from_path(dir.join("run_summaries.csv"))?;
        runs.write_record(RUN_SUMMARY_HEADERS)?;

        let mut trial = Writer::from_path(dir.join("trial_summary.csv"))?;
        trial.write_record(TRIAL_SUMMARY_HEADERS)?;

        Ok(Self {
            callers,
            queue,
            runs,
            trial,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_callers(&mut self, rows: &[CallerRow]) -> OutputResult<()> {
        for row in rows {
            self.callers.write_record(&[
                row.run.to_string(),
                row.caller_id.to_string(),
                row.arrival_time.to_string(),
                row.queue_time.to_string(),
                row.service_time.to_string(),
                row.completion_time.map(|t| t.to_string()).unwrap_or_default(),
                (row.abandoned as u8).to_string(),
                (row.bounced as u8).to_string(),
                row.retry_count.to_string(),
                row.outcome.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_queue_samples(&mut self, rows: &[QueueSampleRow]) -> OutputResult<()> {
        for row in rows {
            self.queue.write_record(&[
                row.run.to_string(),
                row.time.to_string(),
                row.queue_length.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.run.to_string(),
            row.mean_queue_time.to_string(),
            row.mean_service_time.to_string(),
            row.total_calls.to_string(),
            row.completed_calls.to_string(),
            row.abandoned_calls.to_string(),
            row.bounced_calls.to_string(),
            row.max_queue_length.to_string(),
            row.calls_per_hour.to_string(),
            row.handlers_added.to_string(),
            row.handlers_removed.to_string(),
            row.peak_waiting.to_string(),
        ])?;
        Ok(())
    }

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()> {
        self.trial.write_record(&[
            row.runs.to_string(),
            row.mean_queue_time.to_string(),
            row.mean_service_time.to_string(),
            row.total_calls.to_string(),
            row.completed_calls.to_string(),
            row.abandoned_calls.to_string(),
            row.bounced_calls.to_string(),
            row.mean_max_queue.to_string(),
            row.max_queue_length.to_string(),
            row.calls_per_hour.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.callers.flush()?;
        self.queue.flush()?;
        self.runs.flush()?;
        self.trial.flush()?;
        Ok(())
    }
}
