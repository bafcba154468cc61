//! Time-of-day profiles: piecewise arrival rates and staffing plans.
//!
//! Both are plain data so they can live inside [`SimConfig`][crate::SimConfig]
//! and be loaded from JSON or CSV.  The scheduler crate turns a
//! `PiecewiseRate` into an `ArrivalProfile`; the model turns a
//! `StaffingPlan` into capacity-change events.

use crate::ConfigError;

// ── PiecewiseRate ─────────────────────────────────────────────────────────────

/// One segment of a piecewise-constant arrival profile.
///
/// The segment applies to every time `t < until` not already claimed by an
/// earlier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateSegment {
    /// Exclusive upper bound of the segment, in simulation minutes.
    pub until: f64,
    /// Mean time between arrivals inside the segment, in minutes.
    pub mean_inter_arrival: f64,
}

/// Piecewise-constant mapping from simulation time to mean inter-arrival
/// minutes (busier in the morning, lighter at lunch, …).
///
/// ```text
/// mean_at(t) = first segment with t < segment.until, else `after`
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiecewiseRate {
    /// Segments sorted by ascending `until`.
    pub segments: Vec<RateSegment>,
    /// Mean inter-arrival time after the last breakpoint.
    pub after: f64,
}

impl PiecewiseRate {
    /// A flat profile: the same mean everywhere.
    pub fn constant(mean_inter_arrival: f64) -> Self {
        Self { segments: Vec::new(), after: mean_inter_arrival }
    }

    /// The ten-hour call-center day used by the reference models
    /// (minute 0 = 08:00).
    pub fn call_center_day() -> Self {
        let seg = |until, mean_inter_arrival| RateSegment { until, mean_inter_arrival };
        Self {
            segments: vec![
                seg(60.0, 2.0),  // 08:00–09:00, 30 calls/hour
                seg(120.0, 1.5), // 09:00–10:00, 40 calls/hour
                seg(240.0, 1.0), // 10:00–12:00, 60 calls/hour
                seg(360.0, 1.5), // 12:00–14:00, 40 calls/hour
                seg(480.0, 2.0), // 14:00–16:00, 30 calls/hour
            ],
            after: 3.0,          // 16:00–18:00, 20 calls/hour
        }
    }

    /// Mean inter-arrival minutes at time `t`.
    pub fn mean_at(&self, t: f64) -> f64 {
        self.segments
            .iter()
            .find(|s| t < s.until)
            .map_or(self.after, |s| s.mean_inter_arrival)
    }

    /// Check that every mean is positive and finite and breakpoints ascend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bad_mean = |m: f64| !(m.is_finite() && m > 0.0);
        for (i, s) in self.segments.iter().enumerate() {
            if bad_mean(s.mean_inter_arrival) {
                return Err(ConfigError::ArrivalProfile(format!(
                    "segment {i} has mean inter-arrival {}; must be positive and finite",
                    s.mean_inter_arrival
                )));
            }
            if i > 0 && s.until <= self.segments[i - 1].until {
                return Err(ConfigError::ArrivalProfile(format!(
                    "segment {i} breakpoint {} does not follow {}",
                    s.until,
                    self.segments[i - 1].until
                )));
            }
        }
        if bad_mean(self.after) {
            return Err(ConfigError::ArrivalProfile(format!(
                "trailing mean inter-arrival {} must be positive and finite",
                self.after
            )));
        }
        Ok(())
    }
}

// ── StaffingPlan ──────────────────────────────────────────────────────────────

/// A scheduled change of handler headcount.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffingChange {
    /// Simulation minute at which the new target takes effect.
    pub at: f64,
    /// New target number of handlers.
    pub handlers: usize,
}

/// Ordered list of headcount changes applied during a run
/// (e.g. 5 handlers in the morning, 3 after 12:30).
///
/// The initial headcount comes from `SimConfig::number_of_handlers`; an
/// empty plan keeps it fixed for the whole run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffingPlan {
    pub changes: Vec<StaffingChange>,
}

impl StaffingPlan {
    pub fn new(mut changes: Vec<StaffingChange>) -> Self {
        changes.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Headcount in force at time `t`, given the initial headcount.
    pub fn handlers_at(&self, t: f64, initial: usize) -> usize {
        self.changes
            .iter()
            .take_while(|c| c.at <= t)
            .last()
            .map_or(initial, |c| c.handlers)
    }

    /// Every change must fall inside `[start, end)` and be in time order.
    pub fn validate(&self, start: f64, end: f64) -> Result<(), ConfigError> {
        for (i, c) in self.changes.iter().enumerate() {
            if !(c.at.is_finite() && c.at >= start && c.at < end) {
                return Err(ConfigError::Staffing(format!(
                    "change {i} at minute {} is outside the run [{start}, {end})",
                    c.at
                )));
            }
            if i > 0 && c.at < self.changes[i - 1].at {
                return Err(ConfigError::Staffing(format!(
                    "change {i} at minute {} precedes change {} at minute {}",
                    c.at,
                    i - 1,
                    self.changes[i - 1].at
                )));
            }
        }
        Ok(())
    }
}
