//! Arrival-rate profiles.
//!
//! The arrival process asks its profile for the **mean inter-arrival time**
//! (minutes) at the current instant and samples an exponential gap with that
//! mean.  Profiles are read-only and shared by every run of a trial, hence
//! the `Send + Sync` bound.

use cc_core::PiecewiseRate;

/// Maps simulation time to the mean number of minutes between arrivals.
pub trait ArrivalProfile: Send + Sync {
    /// Mean inter-arrival minutes at time `t`.  Must be positive and finite;
    /// the model treats anything else as a fatal sampling error.
    fn mean_inter_arrival(&self, t: f64) -> f64;
}

impl ArrivalProfile for PiecewiseRate {
    #[inline]
    fn mean_inter_arrival(&self, t: f64) -> f64 {
        self.mean_at(t)
    }
}

impl<P: ArrivalProfile + ?Sized> ArrivalProfile for &P {
    #[inline]
    fn mean_inter_arrival(&self, t: f64) -> f64 {
        (**self).mean_inter_arrival(t)
    }
}

/// Adapts any `Fn(f64) -> f64` into an [`ArrivalProfile`].
///
/// ```rust
/// use cc_schedule::{ArrivalProfile, FnProfile};
///
/// // Twice as busy during the first hour.
/// let profile = FnProfile(|t: f64| if t < 60.0 { 0.5 } else { 1.0 });
/// assert_eq!(profile.mean_inter_arrival(30.0), 0.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnProfile<F>(pub F);

impl<F> ArrivalProfile for FnProfile<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[inline]
    fn mean_inter_arrival(&self, t: f64) -> f64 {
        (self.0)(t)
    }
}
