//! `EventQueue`: the simulation clock and its pending-event priority queue.
//!
//! # Why this exists
//!
//! Every "process" in a model (the arrival generator, each caller journey,
//! the staffing plan) is an explicit state machine.  A process suspends by
//! scheduling the event that resumes it; the queue hands those events back
//! one at a time, earliest first, and moves the clock to each event's
//! timestamp.  Nothing else advances time.
//!
//! # Ordering
//!
//! Events pop in ascending timestamp order.  Events with identical
//! timestamps pop in the order they were scheduled (FIFO), which makes a run
//! fully reproducible from its seed.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log P) push and pop where P = number of pending
//! events.  In a call-center run P is bounded by the number of callers in
//! the system plus a handful of generator and staffing events.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use cc_core::{SimClock, SimTime};

use crate::{ScheduleError, ScheduleResult};

// ── Pending ───────────────────────────────────────────────────────────────────

/// Heap entry: the event plus the two keys used to order it.
struct Pending<E> {
    time: SimTime,
    seq:  u64,
    event: E,
}

impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq && self.time == other.time
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// ── RunStats ──────────────────────────────────────────────────────────────────

/// What happened during one [`EventQueue::run_until`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStats {
    /// Events popped and handed to the handler.
    pub executed:   u64,
    /// Events still pending at the horizon, dropped without executing.
    pub discarded:  usize,
    /// Clock reading when the call returned.
    pub final_time: SimTime,
}

// ── EventQueue ────────────────────────────────────────────────────────────────

/// Priority queue of scheduled events plus the clock they drive.
///
/// Generic over the event payload `E`; the model decides what an event
/// means, the queue only decides when it runs.
pub struct EventQueue<E> {
    heap:     BinaryHeap<Reverse<Pending<E>>>,
    clock:    SimClock,
    /// Events ever scheduled; doubles as the tie-break sequence.
    inserted: u64,
    /// Events ever popped.
    executed: u64,
}

impl<E> EventQueue<E> {
    /// An empty queue whose clock starts at `start`.
    pub fn new(start: SimTime) -> Self {
        Self {
            heap:     BinaryHeap::new(),
            clock:    SimClock::new(start),
            inserted: 0,
            executed: 0,
        }
    }

    /// The current simulation time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Schedule `event` to run `delay` minutes from now.
    ///
    /// A zero delay runs the event after everything already scheduled for
    /// the current instant.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidDelay`] for negative, NaN or infinite delays;
    /// the queue is not modified.
    pub fn schedule(&mut self, delay: f64, event: E) -> ScheduleResult<()> {
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(ScheduleError::InvalidDelay(delay));
        }
        let at = self.now() + delay;
        self.push(at, event);
        Ok(())
    }

    /// Schedule `event` at the absolute time `at`.
    ///
    /// # Errors
    /// [`ScheduleError::BackInTime`] if `at` is earlier than the clock or not
    /// finite; the queue is not modified.
    pub fn schedule_at(&mut self, at: SimTime, event: E) -> ScheduleResult<()> {
        if !at.is_finite() || at < self.now() {
            return Err(ScheduleError::BackInTime { now: self.now().0, requested: at.0 });
        }
        self.push(at, event);
        Ok(())
    }

    fn push(&mut self, time: SimTime, event: E) {
        let seq = self.inserted;
        self.inserted += 1;
        self.heap.push(Reverse(Pending { time, seq, event }));
    }

    /// Timestamp of the earliest pending event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|Reverse(p)| p.time)
    }

    /// Pop the earliest event if its timestamp is strictly before `until`,
    /// advancing the clock to that timestamp.
    ///
    /// Returns `Ok(None)` (leaving the queue untouched) when the queue is
    /// empty or the next event lies at or beyond `until`.
    pub fn pop_before(&mut self, until: SimTime) -> ScheduleResult<Option<(SimTime, E)>> {
        match self.next_time() {
            Some(t) if t < until => {}
            _ => return Ok(None),
        }
        let Some(Reverse(next)) = self.heap.pop() else {
            return Ok(None);
        };
        self.clock
            .advance_to(next.time)
            .map_err(|_| ScheduleError::BackInTime { now: self.clock.now().0, requested: next.time.0 })?;
        self.executed += 1;
        Ok(Some((next.time, next.event)))
    }

    /// Drive the simulation: pop events in order and hand each to `handler`
    /// until the queue empties or the next event is at or beyond `until`.
    ///
    /// On return the clock reads `until` (when finite and later than the last
    /// event) and every event left in the queue has been discarded.  A handler
    /// error stops the loop immediately and is returned unchanged.
    pub fn run_until<F, Err>(&mut self, until: SimTime, mut handler: F) -> Result<RunStats, Err>
    where
        F:   FnMut(&mut Self, SimTime, E) -> Result<(), Err>,
        Err: From<ScheduleError>,
    {
        let executed_before = self.executed;
        while let Some((time, event)) = self.pop_before(until)? {
            handler(self, time, event)?;
        }
        let discarded = self.discard_all();
        if until.is_finite() && until > self.now() {
            self.clock.advance_to(until).map_err(|_| {
                ScheduleError::BackInTime { now: self.clock.now().0, requested: until.0 }
            })?;
        }
        Ok(RunStats {
            executed:   self.executed - executed_before,
            discarded,
            final_time: self.now(),
        })
    }

    /// Drop every pending event.  Returns how many were dropped.
    pub fn discard_all(&mut self) -> usize {
        let n = self.heap.len();
        self.heap.clear();
        n
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total events executed over the queue's lifetime.
    pub fn executed(&self) -> u64 {
        self.executed
    }
}
