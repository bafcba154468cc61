//! `cc-resource`: the shared resources callers contend for.
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`pool`]  | `ResourcePool<T>`: capacity-limited handlers, FIFO waiters, deferred shrink |
//! | [`queue`] | `BoundedQueue<T>`: the call queue with a seat limit          |
//! | [`error`] | `PoolError`, `PoolResult<T>`                                 |
//!
//! Neither type knows about time.  They are mutated only by the event
//! currently being dispatched, so no locking is needed; the model turns
//! their return values (grants, hand-overs) into scheduled events.

pub mod error;
pub mod pool;
pub mod queue;


pub use error::{PoolError, PoolResult};
pub use pool::{Acquire, Grant, PoolStats, Release, ResourcePool};
pub use queue::BoundedQueue;
