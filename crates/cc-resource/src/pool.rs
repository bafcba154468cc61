//! `ResourcePool`: a handler pool whose headcount can change mid-run.
//!
//! # Capacity model
//!
//! ```text
//! capacity  = target headcount (mutable)
//! issued    = handlers currently serving a requester
//! idle      = handlers waiting for work
//! waiting   = FIFO line of requesters
//!
//! issued ≤ capacity   → idle = capacity − issued, and waiting is empty
//!                       unless idle is empty
//! issued > capacity   → idle is empty (a shrink is still in progress)
//! ```
//!
//! Growing the pool mints handlers immediately and hands them to waiters.
//! Shrinking removes idle handlers immediately; busy handlers finish their
//! current call and are retired one by one as they are released, until
//! `issued == capacity`.  A grow that arrives while a shrink is still in
//! progress cancels as much of it as it can before minting anything new.

use std::collections::{BTreeSet, VecDeque};

use cc_core::HandlerId;

use crate::{PoolError, PoolResult};

// ── Return types ──────────────────────────────────────────────────────────────

/// Outcome of [`ResourcePool::acquire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquire {
    /// A handler was free; the requester holds it now.
    Granted(HandlerId),
    /// The requester joined the waiting line (0 = front).
    Queued { position: usize },
}

/// Outcome of [`ResourcePool::release`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release<T> {
    /// The handler went back to the idle set.
    Idle,
    /// The handler went straight to the longest-waiting requester.
    HandedOver(Grant<T>),
    /// The pool was over target; the handler was removed.
    Retired,
}

/// A handler assigned to a requester that had been waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant<T> {
    pub to:      T,
    pub handler: HandlerId,
}

/// Running counters for one pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Handlers minted by capacity increases (the initial headcount excluded).
    pub handlers_added:   u64,
    /// Handlers removed by capacity decreases, idle or on release.
    pub handlers_removed: u64,
    /// Handlers given to requesters, immediately or after waiting.
    pub grants:           u64,
    /// Longest waiting line observed.
    pub peak_waiting:     usize,
    /// Most handlers in use at once.
    pub peak_issued:      usize,
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

/// Capacity-limited pool of handlers with a strict FIFO waiting line.
///
/// Generic over the requester token `T` (the model uses `CallerId`).
/// `acquire` never fails: with zero capacity a requester simply waits until
/// capacity is added.
#[derive(Debug, Clone)]
pub struct ResourcePool<T> {
    capacity:     usize,
    in_use:       BTreeSet<HandlerId>,
    idle:         VecDeque<HandlerId>,
    waiting:      VecDeque<T>,
    next_handler: HandlerId,
    stats:        PoolStats,
}

impl<T> ResourcePool<T> {
    /// A pool with `capacity` idle handlers and nobody waiting.
    pub fn new(capacity: usize) -> Self {
        let mut pool = Self {
            capacity,
            in_use:       BTreeSet::new(),
            idle:         VecDeque::with_capacity(capacity),
            waiting:      VecDeque::new(),
            next_handler: HandlerId(0),
            stats:        PoolStats::default(),
        };
        for _ in 0..capacity {
            let h = pool.mint();
            pool.idle.push_back(h);
        }
        pool
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current target headcount.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Handlers currently held by requesters.
    pub fn issued(&self) -> usize {
        self.in_use.len()
    }

    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Handlers that exist right now, busy or idle.
    pub fn headcount(&self) -> usize {
        self.issued() + self.idle.len()
    }

    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Requesters in line, front first.
    pub fn waiting(&self) -> impl Iterator<Item = &T> {
        self.waiting.iter()
    }

    /// `true` if an `acquire` right now would be granted immediately.
    pub fn has_available(&self) -> bool {
        self.waiting.is_empty() && self.issued() < self.capacity && !self.idle.is_empty()
    }

    pub fn is_in_use(&self, handler: HandlerId) -> bool {
        self.in_use.contains(&handler)
    }

    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Request a handler for `requester`.
    ///
    /// Granted immediately when below capacity and nobody is ahead in line;
    /// otherwise the requester joins the back of the line and will receive a
    /// handler through [`release`](Self::release) or
    /// [`set_capacity`](Self::set_capacity).
    pub fn acquire(&mut self, requester: T) -> Acquire {
        if self.has_available() {
            if let Some(h) = self.idle.pop_front() {
                self.issue(h);
                return Acquire::Granted(h);
            }
        }
        self.waiting.push_back(requester);
        self.stats.peak_waiting = self.stats.peak_waiting.max(self.waiting.len());
        Acquire::Queued { position: self.waiting.len() - 1 }
    }

    /// Return `handler` to the pool.
    ///
    /// # Errors
    /// [`PoolError::UnknownHandler`] if `handler` is not currently in use.
    pub fn release(&mut self, handler: HandlerId) -> PoolResult<Release<T>> {
        if !self.in_use.contains(&handler) {
            return Err(PoolError::UnknownHandler(handler));
        }

        if self.issued() > self.capacity {
            self.in_use.remove(&handler);
            self.stats.handlers_removed += 1;
            return Ok(Release::Retired);
        }

        if let Some(to) = self.waiting.pop_front() {
            // The handler stays in use; only its holder changes.
            self.stats.grants += 1;
            return Ok(Release::HandedOver(Grant { to, handler }));
        }

        self.in_use.remove(&handler);
        self.idle.push_back(handler);
        Ok(Release::Idle)
    }

    /// Change the target headcount.
    ///
    /// Returns the waiters that received a handler as a result (in FIFO
    /// order); empty for decreases.
    pub fn set_capacity(&mut self, capacity: usize) -> Vec<Grant<T>> {
        let old = self.capacity;
        self.capacity = capacity;

        if capacity < old {
            // Idle handlers go now; busy surplus goes on release.
            while self.headcount() > capacity {
                if self.idle.pop_back().is_none() {
                    break;
                }
                self.stats.handlers_removed += 1;
            }
            return Vec::new();
        }

        // Surviving surplus from an unfinished shrink counts toward the new
        // target before any new handler is minted.
        while self.headcount() < capacity {
            let h = self.mint();
            self.idle.push_back(h);
            self.stats.handlers_added += 1;
        }

        let mut grants = Vec::new();
        while self.issued() < self.capacity && !self.waiting.is_empty() {
            let Some(handler) = self.idle.pop_front() else {
                break;
            };
            let Some(to) = self.waiting.pop_front() else {
                self.idle.push_front(handler);
                break;
            };
            self.issue(handler);
            grants.push(Grant { to, handler });
        }
        grants
    }

    /// Verify the capacity model described in the module docs.
    pub fn check_invariants(&self) -> PoolResult<()> {
        let issued = self.issued();
        let expected_idle = self.capacity.saturating_sub(issued);
        if self.idle.len() != expected_idle {
            return Err(PoolError::Invariant(format!(
                "{} idle handlers with capacity {} and {} issued (expected {expected_idle} idle)",
                self.idle.len(),
                self.capacity,
                issued
            )));
        }
        if !self.waiting.is_empty() && !self.idle.is_empty() {
            return Err(PoolError::Invariant(format!(
                "{} requesters waiting while {} handlers are idle",
                self.waiting.len(),
                self.idle.len()
            )));
        }
        if self.idle.iter().any(|h| self.in_use.contains(h)) {
            return Err(PoolError::Invariant("a handler is both idle and in use".into()));
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn mint(&mut self) -> HandlerId {
        let h = self.next_handler;
        self.next_handler = h.next();
        h
    }

    fn issue(&mut self, handler: HandlerId) {
        self.in_use.insert(handler);
        self.stats.grants += 1;
        self.stats.peak_issued = self.stats.peak_issued.max(self.in_use.len());
    }
}
