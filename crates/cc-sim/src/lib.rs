//! `cc-sim`: the call-center model and its replication harness.
//!
//! # One run
//!
//! ```text
//! ModelBuilder::build()
//!   schedule Arrival at start (or one per trace entry)
//!   schedule Staffing at each plan change
//! Model::run()
//!   EventQueue::run_until(end_time):
//!     Arrival          → new caller; Attempt now; next Arrival after Exp gap
//!     Attempt          → handler free? grant : queue full? bounce : wait
//!     HandlerGranted   → abandonment draw; abandon or start service
//!     ServiceComplete  → record completion; release handler
//!     Staffing         → ResourcePool::set_capacity; serve waiters
//!   summarise → RunOutput
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `Trial::run` executes replications on Rayon's pool.    |
//!
//! # Quick-start
//!
//! ```rust
//! use cc_core::SimConfig;
//! use cc_sim::{NoopObserver, Trial};
//!
//! let config = SimConfig { number_of_runs: 2, end_time: 120.0, ..SimConfig::default() };
//! let outcome = Trial::new(config).run(&mut NoopObserver)?;
//! assert_eq!(outcome.runs.len(), 2);
//! # Ok::<(), cc_sim::TrialError>(())
//! ```

mod arrival;
pub mod builder;
pub mod caller;
pub mod error;
pub mod event;
mod journey;
pub mod model;
pub mod observer;
pub mod results;
pub mod trial;


pub use builder::ModelBuilder;
pub use caller::{CallerOutcome, CallerRecord};
pub use error::{SimError, SimResult, TrialError};
pub use event::SimEvent;
pub use model::Model;
pub use observer::{NoopObserver, SimObserver, TrialObserver};
pub use results::{QueueSample, RunOutput, RunSummary, SummaryMeans, TrialSummary};
pub use trial::{Trial, TrialOutcome};
