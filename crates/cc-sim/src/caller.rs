//! Per-caller records: one row of the run's results table.

use cc_core::CallerId;

/// Where a caller's journey stands.
///
/// The first three are terminal.  The rest describe callers still in flight
/// when the run reached its horizon; they are left as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallerOutcome {
    Completed,
    Abandoned,
    /// Bounced with no retry left (by chance or by `max_retries`).
    Bounced,
    /// In the call queue, waiting for a handler.
    Waiting,
    /// Talking to a handler.
    InService,
    /// Bounced, waiting out the retry delay.
    Retrying,
}

impl CallerOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Abandoned | Self::Bounced)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
            Self::Bounced   => "bounced",
            Self::Waiting   => "waiting",
            Self::InService => "in_service",
            Self::Retrying  => "retrying",
        }
    }
}

/// One caller's journey.  Times are simulation minutes.
///
/// A retry reuses the record: `arrival_time` moves to the latest attempt and
/// `retry_count` goes up by one.
#[derive(Clone, Debug, PartialEq)]
pub struct CallerRecord {
    pub caller_id:       CallerId,
    /// Time of the caller's latest attempt.
    pub arrival_time:    f64,
    /// Minutes between the latest attempt and handler assignment.  Zero
    /// until a handler is assigned; never recorded for bounced attempts.
    pub queue_time:      f64,
    /// Sampled talk time.  Zero until service starts.
    pub service_time:    f64,
    /// `Some` only for completed calls.
    pub completion_time: Option<f64>,
    pub abandoned:       bool,
    /// `true` if the latest attempt found the queue full.
    pub bounced:         bool,
    pub retry_count:     u32,
    pub outcome:         CallerOutcome,
}

impl CallerRecord {
    pub fn new(caller_id: CallerId, arrival_time: f64) -> Self {
        Self {
            caller_id,
            arrival_time,
            queue_time:      0.0,
            service_time:    0.0,
            completion_time: None,
            abandoned:       false,
            bounced:         false,
            retry_count:     0,
            outcome:         CallerOutcome::Waiting,
        }
    }
}
