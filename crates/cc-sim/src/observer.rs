//! Observer traits for progress reporting and data collection.

use cc_core::SimTime;

use crate::{CallerRecord, RunOutput, RunSummary, SimEvent, TrialSummary};

/// Callbacks invoked by [`Model::run`][crate::Model::run] while a single run
/// executes.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: event counter
///
/// ```rust
/// use cc_core::SimTime;
/// use cc_sim::{SimEvent, SimObserver};
///
/// #[derive(Default)]
/// struct Counter { events: usize }
///
/// impl SimObserver for Counter {
///     fn on_event(&mut self, _time: SimTime, _event: &SimEvent) {
///         self.events += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called just before each event is dispatched, with the clock already
    /// at `time`.
    fn on_event(&mut self, _time: SimTime, _event: &SimEvent) {}

    /// Called when a caller reaches a terminal state (completed, abandoned,
    /// or bounced with no retry left).
    fn on_caller_finished(&mut self, _time: SimTime, _caller: &CallerRecord) {}

    /// Called after a staffing change has been applied to the pool.
    fn on_capacity_change(&mut self, _time: SimTime, _capacity: usize) {}

    /// Called once after the horizon is reached.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// Callbacks invoked by [`Trial::run`][crate::Trial::run].
///
/// With the `parallel` feature the runs execute concurrently and these
/// callbacks are replayed in run-index order once they have finished.
pub trait TrialObserver {
    fn on_run_start(&mut self, _run: usize) {}

    /// Called with each successful run's full output.
    fn on_run_end(&mut self, _output: &RunOutput) {}

    /// Called once, after every run succeeded.
    fn on_trial_end(&mut self, _summary: &TrialSummary) {}
}

/// An observer that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
impl TrialObserver for NoopObserver {}
