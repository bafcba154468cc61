//! `Model`: one replication of the call center.
//!
//! A model owns everything a run mutates: the event queue (and its clock),
//! the handler pool, the call queue, the RNG and the results tables.  Two
//! models never share state, so a trial can run them on separate threads.
//!
//! Dispatch is split across modules by process:
//!
//! | Event               | Handler                     |
//! |---------------------|-----------------------------|
//! | `Arrival`           | [`arrival`](crate::arrival) |
//! | `Attempt`, `HandlerGranted`, `ServiceComplete` | [`journey`](crate::journey) |
//! | `Staffing`          | this module                 |

use cc_core::{CallerId, RunRng, SimConfig, SimTime};
use cc_resource::{BoundedQueue, Grant, ResourcePool};
use cc_schedule::{ArrivalProfile, EventQueue, RunStats};
use tracing::{debug, error, info_span, trace};

use crate::{CallerRecord, QueueSample, RunOutput, RunSummary, SimError, SimEvent, SimObserver, SimResult};

/// Scheduler handle passed to every handler.
pub(crate) type Events = EventQueue<SimEvent>;

// ── RunState ──────────────────────────────────────────────────────────────────

/// Everything a run mutates except the event queue, kept separate so the
/// queue can lend itself to the dispatcher (split borrow).
pub(crate) struct RunState<A> {
    pub(crate) run:         usize,
    pub(crate) config:      SimConfig,
    pub(crate) profile:     A,
    pub(crate) rng:         RunRng,
    pub(crate) pool:        ResourcePool<CallerId>,
    pub(crate) queue:       BoundedQueue<CallerId>,
    /// Indexed by `CallerId`.
    pub(crate) callers:     Vec<CallerRecord>,
    pub(crate) history:     Vec<QueueSample>,
    pub(crate) next_caller: CallerId,
    /// `false` when arrivals come from a pre-scheduled trace.
    pub(crate) sampled:     bool,
}

impl<A: ArrivalProfile> RunState<A> {
    fn dispatch<O: SimObserver>(
        &mut self,
        events: &mut Events,
        now:    SimTime,
        event:  SimEvent,
        obs:    &mut O,
    ) -> SimResult<()> {
        trace!(%now, %event, "dispatch");
        match event {
            SimEvent::Arrival => self.on_arrival(events, now),
            SimEvent::Attempt(caller) => self.on_attempt(events, now, caller, obs),
            SimEvent::HandlerGranted { caller, handler } => {
                self.on_handler_granted(events, now, caller, handler, obs)
            }
            SimEvent::ServiceComplete { caller, handler } => {
                self.on_service_complete(events, now, caller, handler, obs)
            }
            SimEvent::Staffing { handlers } => self.on_staffing(events, now, handlers, obs),
        }
    }

    fn on_staffing<O: SimObserver>(
        &mut self,
        events:   &mut Events,
        now:      SimTime,
        handlers: usize,
        obs:      &mut O,
    ) -> SimResult<()> {
        let before = self.pool.capacity();
        let grants = self.pool.set_capacity(handlers);
        debug!(%now, from = before, to = handlers, served = grants.len(), "staffing change");
        for grant in grants {
            self.hand_over(events, grant)?;
        }
        obs.on_capacity_change(now, handlers);
        self.check_resources(now, None)
    }

    // ── Shared helpers ────────────────────────────────────────────────────

    /// A queued caller received a handler: it leaves the call queue now and
    /// its journey resumes at the current instant.
    pub(crate) fn hand_over(&mut self, events: &mut Events, grant: Grant<CallerId>) -> SimResult<()> {
        self.queue.remove(&grant.to);
        events.schedule(0.0, SimEvent::HandlerGranted { caller: grant.to, handler: grant.handler })?;
        Ok(())
    }

    /// Pool capacity model holds and the call queue mirrors the pool's line.
    pub(crate) fn check_resources(&self, now: SimTime, caller: Option<CallerId>) -> SimResult<()> {
        self.pool
            .check_invariants()
            .map_err(|e| invariant(now, caller, e.to_string()))?;
        if self.queue.len() != self.pool.waiting_len() {
            return Err(invariant(
                now,
                caller,
                format!(
                    "call queue holds {} callers but {} are waiting for a handler",
                    self.queue.len(),
                    self.pool.waiting_len()
                ),
            ));
        }
        Ok(())
    }

    fn finish(self, stats: RunStats) -> RunOutput {
        let summary = RunSummary::compute(self.run, &self.callers, &self.history, self.config.sim_duration());
        RunOutput {
            run:           self.run,
            callers:       self.callers,
            queue_history: self.history,
            summary,
            pool_stats:    *self.pool.stats(),
            events:        stats,
        }
    }
}

pub(crate) fn invariant(now: SimTime, caller: Option<CallerId>, detail: impl Into<String>) -> SimError {
    SimError::Invariant { time: now.0, caller, detail: detail.into() }
}

/// The record of `caller`, or an invariant error if it was never created.
pub(crate) fn record_mut(
    callers: &mut [CallerRecord],
    caller:  CallerId,
    now:     SimTime,
) -> SimResult<&mut CallerRecord> {
    callers
        .get_mut(caller.index())
        .ok_or_else(|| invariant(now, Some(caller), "event for a caller that was never created"))
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// One ready-to-run replication.  Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model<A: ArrivalProfile> {
    pub(crate) events: Events,
    pub(crate) state:  RunState<A>,
}

impl<A: ArrivalProfile> Model<A> {
    pub fn run_index(&self) -> usize {
        self.state.run
    }

    pub fn config(&self) -> &SimConfig {
        &self.state.config
    }

    /// Events scheduled so far and not yet executed.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Run from `start_time` to `end_time` and return the run's tables.
    ///
    /// Events at or after `end_time` are discarded; callers still in flight
    /// keep whatever state they had reached.  The first fatal error stops the
    /// run and is logged before it is returned.
    pub fn run<O: SimObserver>(self, observer: &mut O) -> SimResult<RunOutput> {
        let Model { mut events, mut state } = self;
        let span = info_span!("run", run = state.run);
        let _enter = span.enter();

        let end = state.config.end();
        let result = events.run_until(end, |queue, now, event| {
            observer.on_event(now, &event);
            state.dispatch(queue, now, event, &mut *observer)
        });

        let stats = match result {
            Ok(stats) => stats,
            Err(e) => {
                error!(error = %e, "run aborted");
                return Err(e);
            }
        };
        debug!(
            executed = stats.executed,
            discarded = stats.discarded,
            callers = state.callers.len(),
            "horizon reached"
        );

        let output = state.finish(stats);
        observer.on_run_end(&output.summary);
        Ok(output)
    }
}
