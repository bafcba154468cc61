//! The arrival process.
//!
//! Each `Arrival` event creates the next caller, starts its journey at the
//! current instant, and (in sampled mode) schedules the following arrival
//! after an exponential gap whose mean comes from the arrival profile:
//!
//! ```text
//! gap ~ Exp(1 / profile.mean_inter_arrival(now))
//! ```
//!
//! The process never stops by itself; the scheduler's horizon bounds it.

use cc_core::{CallerId, SimTime};
use cc_schedule::ArrivalProfile;
use rand_distr::{Distribution, Exp};

use crate::model::{Events, RunState};
use crate::{CallerRecord, SimError, SimEvent, SimResult};

impl<A: ArrivalProfile> RunState<A> {
    pub(crate) fn on_arrival(&mut self, events: &mut Events, now: SimTime) -> SimResult<()> {
        let caller = self.next_caller;
        self.next_caller = caller.next();
        self.callers.push(CallerRecord::new(caller, now.0));
        events.schedule(0.0, SimEvent::Attempt(caller))?;

        if self.sampled {
            let gap = self.sample_gap(now, caller)?;
            events.schedule(gap, SimEvent::Arrival)?;
        }
        Ok(())
    }

    fn sample_gap(&mut self, now: SimTime, caller: CallerId) -> SimResult<f64> {
        let mean = self.profile.mean_inter_arrival(now.minutes());
        if !(mean.is_finite() && mean > 0.0) {
            return Err(SimError::Sampling {
                time:   now.0,
                caller: Some(caller),
                detail: format!("arrival profile returned mean inter-arrival {mean}"),
            });
        }
        let exp = Exp::new(1.0 / mean).map_err(|e| SimError::Sampling {
            time:   now.0,
            caller: Some(caller),
            detail: e.to_string(),
        })?;
        Ok(exp.sample(self.rng.inner()))
    }
}
