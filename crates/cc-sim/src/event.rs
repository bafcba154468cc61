//! The events a call-center run is made of.
//!
//! Every process of the model is an explicit state machine; an event names
//! the transition to take when the scheduler resumes it.
//!
//! ```text
//! Arrival ──► Attempt ──┬─► (queue full) bounce ──┬─► Attempt (retry, after delay)
//!                       │                          └─► Bounced
//!                       └─► HandlerGranted ──┬─► Abandoned
//!                                            └─► ServiceComplete ─► Completed
//! Staffing ──► set_capacity ──► HandlerGranted (one per waiter served)
//! ```

use std::fmt;

use cc_core::{CallerId, HandlerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// A new caller arrives.  In sampled mode this also schedules the next
    /// arrival.
    Arrival,

    /// A caller (new or retrying) tries to get into the system.
    Attempt(CallerId),

    /// `caller` has just been given `handler`; the abandonment check runs now.
    HandlerGranted { caller: CallerId, handler: HandlerId },

    /// `caller` finished talking to `handler`.
    ServiceComplete { caller: CallerId, handler: HandlerId },

    /// Scheduled headcount change.
    Staffing { handlers: usize },
}

impl SimEvent {
    /// The caller this event belongs to, if any.
    pub fn caller(&self) -> Option<CallerId> {
        match *self {
            SimEvent::Attempt(c)
            | SimEvent::HandlerGranted { caller: c, .. }
            | SimEvent::ServiceComplete { caller: c, .. } => Some(c),
            SimEvent::Arrival | SimEvent::Staffing { .. } => None,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Arrival => write!(f, "arrival"),
            SimEvent::Attempt(c) => write!(f, "attempt {c}"),
            SimEvent::HandlerGranted { caller, handler } => write!(f, "grant {handler} to {caller}"),
            SimEvent::ServiceComplete { caller, handler } => write!(f, "{caller} done with {handler}"),
            SimEvent::Staffing { handlers } => write!(f, "staffing → {handlers}"),
        }
    }
}
