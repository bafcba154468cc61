//! Top-level simulation configuration.
//!
//! `SimConfig` is an immutable value: it is built once (defaults, JSON file,
//! or struct literal), validated, and then passed by reference into every
//! model of a trial.  Runs never share mutable configuration state.

use crate::{ConfigError, PiecewiseRate, SimTime, StaffingPlan};

// ── TimeRange ─────────────────────────────────────────────────────────────────

/// A closed `[min, max]` interval of minutes sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A zero-variance range that always yields `value`.
    pub const fn fixed(value: f64) -> Self {
        Self { min: value, max: value }
    }

    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn validate(&self, what: &'static str) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::Range { what, min: self.min, max: self.max })
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Configuration for one trial (and every run in it).
///
/// Typically loaded from a JSON file by the application crate; missing fields
/// fall back to [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulation minute at which each run starts (0 = 08:00 by convention).
    pub start_time: f64,

    /// Simulation minute at which each run stops.  Events at or after this
    /// time are discarded.
    pub end_time: f64,

    /// Handlers available at `start_time` (initial pool capacity).
    pub number_of_handlers: usize,

    /// Maximum number of callers waiting for a handler.  `None` = unbounded;
    /// `Some(0)` = callers are served only if a handler is free on arrival.
    pub max_queue_size: Option<usize>,

    /// Uniform service-time range in minutes.
    pub service_time_range: TimeRange,

    /// Probability that a bounced caller tries again.
    pub retry_probability: f64,

    /// Upper bound on retries per caller.
    pub max_retries: u32,

    /// Uniform delay before a retry, in minutes.
    pub retry_delay_range: TimeRange,

    /// Mean patience in minutes for the one-shot abandonment check.
    /// `None` = callers never abandon.
    pub abandonment_threshold: Option<f64>,

    /// Number of independent replications in a trial.
    pub number_of_runs: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Mean inter-arrival minutes as a function of time.
    pub arrival_profile: PiecewiseRate,

    /// Scheduled headcount changes during the run.
    pub staffing: StaffingPlan,
}

impl Default for SimConfig {
    /// The reference call-center day: 08:00–18:00, four handlers, a 30-seat
    /// queue, 2–5 minute calls, and 70 % retry after a bounce.
    fn default() -> Self {
        Self {
            start_time:            0.0,
            end_time:              600.0,
            number_of_handlers:    4,
            max_queue_size:        Some(30),
            service_time_range:    TimeRange::new(2.0, 5.0),
            retry_probability:     0.7,
            max_retries:           3,
            retry_delay_range:     TimeRange::new(5.0, 30.0),
            abandonment_threshold: Some(5.0),
            number_of_runs:        10,
            seed:                  42,
            arrival_profile:       PiecewiseRate::call_center_day(),
            staffing:              StaffingPlan::default(),
        }
    }
}

impl SimConfig {
    /// Run length in minutes.
    #[inline]
    pub fn sim_duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    #[inline]
    pub fn start(&self) -> SimTime {
        SimTime(self.start_time)
    }

    /// The horizon passed to the scheduler (exclusive).
    #[inline]
    pub fn end(&self) -> SimTime {
        SimTime(self.end_time)
    }

    /// Mean service time implied by the uniform range.
    pub fn mean_call_duration(&self) -> f64 {
        self.service_time_range.mean()
    }

    /// Reject configurations the engine cannot run.  Called by the model
    /// builder and the trial harness before any event is scheduled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let duration = self.sim_duration();
        let window_ok = self.start_time.is_finite()
            && self.start_time >= 0.0
            && self.end_time.is_finite()
            && duration > 0.0;
        if !window_ok {
            return Err(ConfigError::Duration { start: self.start_time, end: self.end_time });
        }
        if !(0.0..=1.0).contains(&self.retry_probability) {
            return Err(ConfigError::RetryProbability(self.retry_probability));
        }
        self.service_time_range.validate("service time")?;
        self.retry_delay_range.validate("retry delay")?;
        if let Some(patience) = self.abandonment_threshold {
            if !(patience > 0.0) {
                return Err(ConfigError::AbandonmentThreshold(patience));
            }
        }
        if self.number_of_runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        self.arrival_profile.validate()?;
        self.staffing.validate(self.start_time, self.end_time)?;
        Ok(())
    }
}
