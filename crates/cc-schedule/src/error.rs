use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cannot schedule with delay {0}: delays must be finite and non-negative")]
    InvalidDelay(f64),

    #[error("cannot schedule at {requested} when the clock reads {now}")]
    BackInTime { now: f64, requested: f64 },

    #[error("profile parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
