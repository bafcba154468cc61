//! Simulation time model.
//!
//! # Design
//!
//! Time is a non-negative real number of simulated **minutes**, wrapped in
//! `SimTime` so that it can be totally ordered (`f64::total_cmp`) and used as
//! a priority-queue key.  The clock never free-runs: `SimClock` only jumps
//! forward to the timestamp of the next executed event.
//!
//! The engine's arrival profiles and staffing plans are expressed in the same
//! minutes, measured from the configured `start_time` origin (e.g. minute 0 =
//! 08:00 for a 10-hour call-center day).

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in minutes.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Minutes as a raw `f64`.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Minutes elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl From<f64> for SimTime {
    fn from(minutes: f64) -> Self {
        SimTime(minutes)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The monotonic simulation clock.
///
/// `SimClock` is cheap to copy and holds no heap data.  It is owned by the
/// event scheduler; everything else reads it.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Origin of this run (the configured `start_time`).
    pub start: SimTime,
    /// The current time, advanced by [`SimClock::advance_to`].
    now: SimTime,
}

impl SimClock {
    pub fn new(start: SimTime) -> Self {
        Self { start, now: start }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Jump forward to `t`.
    ///
    /// # Errors
    /// [`CoreError::BackInTime`] if `t` is earlier than the current time or
    /// not finite; the clock is left unchanged.
    pub fn advance_to(&mut self, t: SimTime) -> CoreResult<()> {
        if !t.is_finite() || t < self.now {
            return Err(CoreError::BackInTime { now: self.now.0, requested: t.0 });
        }
        self.now = t;
        Ok(())
    }

    /// Elapsed simulated minutes since the run origin.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.now - self.start
    }

    /// Break the current time into (hour, minute) of a day whose minute 0 is
    /// `day_start_hour:00`.  Useful for human-readable logging.
    pub fn wall_hm(&self, day_start_hour: u32) -> (u32, u32) {
        let total = self.now.0.max(0.0) as u64 + u64::from(day_start_hour) * 60;
        (((total / 60) % 24) as u32, (total % 60) as u32)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{:.1} min)", self.now, self.elapsed())
    }
}
