//! Plain data row types written by output backends.

use cc_sim::{CallerRecord, QueueSample, RunOutput, TrialSummary};

/// One caller of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallerRow {
    pub run:             u32,
    pub caller_id:       u32,
    pub arrival_time:    f64,
    pub queue_time:      f64,
    pub service_time:    f64,
    /// `None` unless the call completed.
    pub completion_time: Option<f64>,
    pub abandoned:       bool,
    pub bounced:         bool,
    pub retry_count:     u32,
    pub outcome:         &'static str,
}

impl CallerRow {
    pub fn new(run: usize, c: &CallerRecord) -> Self {
        Self {
            run:             run as u32,
            caller_id:       c.caller_id.0,
            arrival_time:    c.arrival_time,
            queue_time:      c.queue_time,
            service_time:    c.service_time,
            completion_time: c.completion_time,
            abandoned:       c.abandoned,
            bounced:         c.bounced,
            retry_count:     c.retry_count,
            outcome:         c.outcome.as_str(),
        }
    }
}

/// Queue length seen by one arrival attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueSampleRow {
    pub run:          u32,
    pub time:         f64,
    pub queue_length: u64,
}

impl QueueSampleRow {
    pub fn new(run: usize, s: &QueueSample) -> Self {
        Self { run: run as u32, time: s.time, queue_length: s.queue_length as u64 }
    }
}

/// Aggregates for one run, plus its pool counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub run:               u32,
    pub mean_queue_time:   f64,
    pub mean_service_time: f64,
    pub total_calls:       u64,
    pub completed_calls:   u64,
    pub abandoned_calls:   u64,
    pub bounced_calls:     u64,
    pub max_queue_length:  u64,
    pub calls_per_hour:    f64,
    pub handlers_added:    u64,
    pub handlers_removed:  u64,
    pub peak_waiting:      u64,
}

impl RunSummaryRow {
    pub fn new(out: &RunOutput) -> Self {
        let s = &out.summary;
        let p = &out.pool_stats;
        Self {
            run:               out.run as u32,
            mean_queue_time:   s.mean_queue_time,
            mean_service_time: s.mean_service_time,
            total_calls:       s.total_calls as u64,
            completed_calls:   s.completed_calls as u64,
            abandoned_calls:   s.abandoned_calls as u64,
            bounced_calls:     s.bounced_calls as u64,
            max_queue_length:  s.max_queue_length as u64,
            calls_per_hour:    s.calls_per_hour,
            handlers_added:    p.handlers_added,
            handlers_removed:  p.handlers_removed,
            peak_waiting:      p.peak_waiting as u64,
        }
    }
}

/// Cross-run means, plus the largest queue any run saw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummaryRow {
    pub runs:              u64,
    pub mean_queue_time:   f64,
    pub mean_service_time: f64,
    pub total_calls:       f64,
    pub completed_calls:   f64,
    pub abandoned_calls:   f64,
    pub bounced_calls:     f64,
    pub mean_max_queue:    f64,
    pub max_queue_length:  u64,
    pub calls_per_hour:    f64,
}

impl TrialSummaryRow {
    pub fn new(t: &TrialSummary) -> Self {
        let m = &t.means;
        Self {
            runs:              t.runs.len() as u64,
            mean_queue_time:   m.mean_queue_time,
            mean_service_time: m.mean_service_time,
            total_calls:       m.total_calls,
            completed_calls:   m.completed_calls,
            abandoned_calls:   m.abandoned_calls,
            bounced_calls:     m.bounced_calls,
            mean_max_queue:    m.max_queue_length,
            max_queue_length:  t.max_queue_length as u64,
            calls_per_hour:    m.calls_per_hour,
        }
    }
}
