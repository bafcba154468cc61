//! Core error types.
//!
//! Sub-crates define their own error enums and wrap `ConfigError` /
//! `CoreError` via `From` impls where a conversion keeps error sites clean.

use thiserror::Error;

/// An invalid [`SimConfig`][crate::SimConfig], detected before any run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("simulation must start at or after minute 0 and run a positive, finite duration (start {start}, end {end})")]
    Duration { start: f64, end: f64 },

    #[error("retry probability {0} is outside [0, 1]")]
    RetryProbability(f64),

    #[error("{what} range [{min}, {max}] must be finite, non-negative, and ordered")]
    Range { what: &'static str, min: f64, max: f64 },

    #[error("abandonment threshold must be positive (got {0})")]
    AbandonmentThreshold(f64),

    #[error("number of runs must be at least 1")]
    NoRuns,

    #[error("arrival profile: {0}")]
    ArrivalProfile(String),

    #[error("staffing plan: {0}")]
    Staffing(String),
}

/// The top-level error type for `cc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("clock cannot move from {now} back to {requested}")]
    BackInTime { now: f64, requested: f64 },
}

/// Shorthand result type for `cc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
