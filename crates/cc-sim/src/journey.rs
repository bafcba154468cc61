//! The caller journey state machine.
//!
//! ```text
//! Attempt ─┬─ handler free ──────────────► HandlerGranted
//!          ├─ queue has room ─► Waiting ─► HandlerGranted (FIFO)
//!          └─ queue full ─────► bounce
//!
//! HandlerGranted ─┬─ p = 1 − exp(−queue_time / patience) ─► Abandoned
//!                 └─ otherwise ─► InService ─► ServiceComplete ─► Completed
//!
//! bounce ─┬─ retry_count < max_retries and U < retry_probability
//!         │      ─► Retrying ─► Attempt (after retry delay)
//!         └─ otherwise ─► Bounced
//! ```
//!
//! Abandonment is a single draw at the moment a handler is assigned, not a
//! timer racing the wait.

use cc_core::{CallerId, HandlerId, SimTime};
use cc_resource::{Acquire, Release};
use cc_schedule::ArrivalProfile;
use tracing::{debug, trace};

use crate::model::{Events, RunState, invariant, record_mut};
use crate::{CallerOutcome, QueueSample, SimEvent, SimObserver, SimResult};

impl<A: ArrivalProfile> RunState<A> {
    pub(crate) fn on_attempt<O: SimObserver>(
        &mut self,
        events: &mut Events,
        now:    SimTime,
        caller: CallerId,
        obs:    &mut O,
    ) -> SimResult<()> {
        self.history.push(QueueSample { time: now.0, queue_length: self.queue.len() });

        let rec = record_mut(&mut self.callers, caller, now)?;
        rec.arrival_time = now.0;
        rec.bounced = false;
        rec.outcome = CallerOutcome::Waiting;

        if self.pool.has_available() {
            return match self.pool.acquire(caller) {
                Acquire::Granted(handler) => {
                    events.schedule(0.0, SimEvent::HandlerGranted { caller, handler })?;
                    Ok(())
                }
                Acquire::Queued { .. } => Err(invariant(now, Some(caller), "free handler was not granted")),
            };
        }

        if let Err(caller) = self.queue.try_push(caller) {
            return self.bounce(events, now, caller, obs);
        }
        match self.pool.acquire(caller) {
            Acquire::Queued { position } => trace!(%now, %caller, position, "queued"),
            Acquire::Granted(handler) => {
                return Err(invariant(
                    now,
                    Some(caller),
                    format!("{handler} granted while the pool reported none available"),
                ));
            }
        }
        self.check_resources(now, Some(caller))
    }

    /// The queue was full.  Retry later or give up.
    fn bounce<O: SimObserver>(
        &mut self,
        events: &mut Events,
        now:    SimTime,
        caller: CallerId,
        obs:    &mut O,
    ) -> SimResult<()> {
        let max_retries = self.config.max_retries;
        let retry_probability = self.config.retry_probability;
        let delay_range = self.config.retry_delay_range;

        let rec = record_mut(&mut self.callers, caller, now)?;
        rec.bounced = true;
        let retry = rec.retry_count < max_retries && self.rng.gen_bool(retry_probability);

        if retry {
            rec.retry_count += 1;
            rec.outcome = CallerOutcome::Retrying;
            let delay = self.rng.uniform(delay_range.min, delay_range.max);
            debug!(%now, %caller, attempt = rec.retry_count, delay, "bounced, will retry");
            events.schedule(delay, SimEvent::Attempt(caller))?;
        } else {
            rec.outcome = CallerOutcome::Bounced;
            debug!(%now, %caller, retries = rec.retry_count, "bounced for good");
            obs.on_caller_finished(now, rec);
        }
        Ok(())
    }

    pub(crate) fn on_handler_granted<O: SimObserver>(
        &mut self,
        events:  &mut Events,
        now:     SimTime,
        caller:  CallerId,
        handler: HandlerId,
        obs:     &mut O,
    ) -> SimResult<()> {
        let patience = self.config.abandonment_threshold;
        let service = self.config.service_time_range;

        let rec = record_mut(&mut self.callers, caller, now)?;
        let queue_time = now.0 - rec.arrival_time;
        if !(queue_time >= 0.0) {
            return Err(invariant(
                now,
                Some(caller),
                format!("negative queue time {queue_time} (attempt at {})", rec.arrival_time),
            ));
        }
        rec.queue_time = queue_time;

        let abandon = match patience {
            Some(p) => self.rng.gen_bool(1.0 - (-queue_time / p).exp()),
            None => false,
        };

        if abandon {
            rec.abandoned = true;
            rec.outcome = CallerOutcome::Abandoned;
            trace!(%now, %caller, queue_time, "abandoned");
            obs.on_caller_finished(now, rec);
            return self.release(events, now, caller, handler);
        }

        let service_time = self.rng.uniform(service.min, service.max);
        rec.service_time = service_time;
        rec.outcome = CallerOutcome::InService;
        events.schedule(service_time, SimEvent::ServiceComplete { caller, handler })?;
        Ok(())
    }

    pub(crate) fn on_service_complete<O: SimObserver>(
        &mut self,
        events:  &mut Events,
        now:     SimTime,
        caller:  CallerId,
        handler: HandlerId,
        obs:     &mut O,
    ) -> SimResult<()> {
        let rec = record_mut(&mut self.callers, caller, now)?;
        rec.completion_time = Some(now.0);
        rec.outcome = CallerOutcome::Completed;
        obs.on_caller_finished(now, rec);
        self.release(events, now, caller, handler)
    }

    /// Give `handler` back: retire it, pass it to the next waiter, or idle it.
    fn release(&mut self, events: &mut Events, now: SimTime, caller: CallerId, handler: HandlerId) -> SimResult<()> {
        let released = self
            .pool
            .release(handler)
            .map_err(|e| invariant(now, Some(caller), e.to_string()))?;
        match released {
            Release::HandedOver(grant) => self.hand_over(events, grant)?,
            Release::Retired => debug!(%now, %handler, "surplus handler retired"),
            Release::Idle => {}
        }
        self.check_resources(now, Some(caller))
    }
}
