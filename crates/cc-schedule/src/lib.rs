//! `cc-schedule`: the event scheduler, arrival profiles, and CSV loading.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<E>` (clock + `BinaryHeap` of pending events)  |
//! | [`profile`]     | `ArrivalProfile` trait, `FnProfile` adapter               |
//! | [`loader`]      | `load_rate_csv`, `load_staffing_csv` (+ reader variants)  |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Execution model (summary)
//!
//! ```text
//! schedule(delay, e)   → push (now + delay, seq, e)
//! run_until(until, f)  → while next.time < until:
//!                            pop; clock = next.time; f(queue, time, e)?
//!                        clock = until; discard the rest
//! ```
//!
//! Ties at the same timestamp resolve by insertion sequence, so a run is
//! reproducible from its seed and the order of `schedule` calls alone.

pub mod error;
pub mod event_queue;
pub mod loader;
pub mod profile;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::{EventQueue, RunStats};
pub use loader::{load_rate_csv, load_rate_reader, load_staffing_csv, load_staffing_reader};
pub use profile::{ArrivalProfile, FnProfile};
