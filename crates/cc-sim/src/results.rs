//! Run outputs and their aggregates.
//!
//! ```text
//! RunOutput  ── results (one CallerRecord per caller)
//!            ── queue_history (one sample per attempt)
//!            ── summary (RunSummary)
//! TrialSummary = per-run summaries + cross-run means + max of max queue
//! ```

use cc_resource::PoolStats;
use cc_schedule::RunStats;

use crate::{CallerOutcome, CallerRecord};

// ── Per-run tables ────────────────────────────────────────────────────────────

/// Queue length seen by an attempt, before that attempt joined the queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueueSample {
    pub time:         f64,
    pub queue_length: usize,
}

/// Everything one run produced.  Read-only once returned.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub run:           usize,
    /// Indexed by `CallerId`.
    pub callers:       Vec<CallerRecord>,
    pub queue_history: Vec<QueueSample>,
    pub summary:       RunSummary,
    pub pool_stats:    PoolStats,
    pub events:        RunStats,
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Aggregates over one run's results table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub run:               usize,
    /// Over every caller; a caller that never reached a handler counts as 0.
    pub mean_queue_time:   f64,
    /// Over every caller; only completed calls contribute a service time.
    pub mean_service_time: f64,
    pub total_calls:       usize,
    pub completed_calls:   usize,
    pub abandoned_calls:   usize,
    /// Callers whose journey ended in a bounce.
    pub bounced_calls:     usize,
    pub max_queue_length:  usize,
    pub calls_per_hour:    f64,
}

impl RunSummary {
    /// Summarise `callers` and `history` for a run of `duration` minutes.
    pub fn compute(run: usize, callers: &[CallerRecord], history: &[QueueSample], duration: f64) -> Self {
        let count = |o: CallerOutcome| callers.iter().filter(|c| c.outcome == o).count();

        let mean_queue_time = mean(callers.iter().map(|c| c.queue_time));
        let mean_service_time = mean(callers.iter().map(|c| match c.outcome {
            CallerOutcome::Completed => c.service_time,
            _ => 0.0,
        }));
        let total_calls = callers.len();
        let calls_per_hour = if duration > 0.0 {
            total_calls as f64 / (duration / 60.0)
        } else {
            0.0
        };

        Self {
            run,
            mean_queue_time,
            mean_service_time,
            total_calls,
            completed_calls:  count(CallerOutcome::Completed),
            abandoned_calls:  count(CallerOutcome::Abandoned),
            bounced_calls:    count(CallerOutcome::Bounced),
            max_queue_length: history.iter().map(|s| s.queue_length).max().unwrap_or(0),
            calls_per_hour,
        }
    }
}

// ── TrialSummary ──────────────────────────────────────────────────────────────

/// Cross-run means of every [`RunSummary`] field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SummaryMeans {
    pub mean_queue_time:   f64,
    pub mean_service_time: f64,
    pub total_calls:       f64,
    pub completed_calls:   f64,
    pub abandoned_calls:   f64,
    pub bounced_calls:     f64,
    pub max_queue_length:  f64,
    pub calls_per_hour:    f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrialSummary {
    /// One entry per run, in run-index order.
    pub runs:             Vec<RunSummary>,
    pub means:            SummaryMeans,
    /// Largest `max_queue_length` of any run.
    pub max_queue_length: usize,
}

impl TrialSummary {
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = &'a RunSummary>) -> Self {
        let runs: Vec<RunSummary> = runs.into_iter().copied().collect();
        let avg = |f: fn(&RunSummary) -> f64| mean(runs.iter().map(f));
        let means = SummaryMeans {
            mean_queue_time:   avg(|r| r.mean_queue_time),
            mean_service_time: avg(|r| r.mean_service_time),
            total_calls:       avg(|r| r.total_calls as f64),
            completed_calls:   avg(|r| r.completed_calls as f64),
            abandoned_calls:   avg(|r| r.abandoned_calls as f64),
            bounced_calls:     avg(|r| r.bounced_calls as f64),
            max_queue_length:  avg(|r| r.max_queue_length as f64),
            calls_per_hour:    avg(|r| r.calls_per_hour),
        };
        let max_queue_length = runs.iter().map(|r| r.max_queue_length).max().unwrap_or(0);
        Self { runs, means, max_queue_length }
    }
}

/// Arithmetic mean; 0 for an empty input.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
