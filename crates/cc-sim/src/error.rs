use cc_core::{CallerId, ConfigError};
use cc_schedule::ScheduleError;
use thiserror::Error;

use crate::RunOutput;

/// A fatal error inside one run.  The run stops at the first one.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("arrival trace time {0} is not finite or precedes the run start")]
    ArrivalTrace(f64),

    #[error("internal invariant violated at t={time:.3} (caller {caller:?}): {detail}")]
    Invariant {
        time:   f64,
        caller: Option<CallerId>,
        detail: String,
    },

    #[error("sampling failed at t={time:.3} (caller {caller:?}): {detail}")]
    Sampling {
        time:   f64,
        caller: Option<CallerId>,
        detail: String,
    },
}

pub type SimResult<T> = Result<T, SimError>;

/// Why a trial stopped.
#[derive(Debug, Error)]
pub enum TrialError {
    #[error("trial configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Run `run` failed.  Runs that finished before it are returned intact in
    /// `completed`; no aggregate is computed for the failed run.
    #[error("run {run} failed after {} completed run(s): {source}", .completed.len())]
    RunFailed {
        run:       usize,
        completed: Vec<RunOutput>,
        #[source]
        source:    Box<SimError>,
    },
}
