//! Fluent builder for constructing a [`Model`].

use cc_core::{CallerId, PiecewiseRate, RunRng, SimConfig, SimTime};
use cc_resource::{BoundedQueue, ResourcePool};
use cc_schedule::{ArrivalProfile, EventQueue};

use crate::model::RunState;
use crate::{Model, SimError, SimEvent, SimResult};

/// Fluent builder for [`Model<A>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.run_index(i)`          | `0`                                       |
/// | `.seed(s)`               | derived from `config.seed` and run index  |
/// | `.arrival_profile(p)`    | `config.arrival_profile`                  |
/// | `.arrival_trace(times)`  | none (arrivals are sampled)               |
///
/// # Example
///
/// ```rust
/// use cc_core::SimConfig;
/// use cc_sim::{ModelBuilder, NoopObserver};
///
/// let config = SimConfig { end_time: 60.0, ..SimConfig::default() };
/// let output = ModelBuilder::new(config)
///     .run_index(3)
///     .build()?
///     .run(&mut NoopObserver)?;
/// assert_eq!(output.run, 3);
/// # Ok::<(), cc_sim::SimError>(())
/// ```
pub struct ModelBuilder<A> {
    config:  SimConfig,
    profile: A,
    run:     usize,
    seed:    Option<u64>,
    trace:   Option<Vec<f64>>,
}

impl ModelBuilder<PiecewiseRate> {
    /// A builder whose arrivals follow `config.arrival_profile`.
    pub fn new(config: SimConfig) -> Self {
        let profile = config.arrival_profile.clone();
        Self { config, profile, run: 0, seed: None, trace: None }
    }
}

impl<A: ArrivalProfile> ModelBuilder<A> {
    pub fn run_index(mut self, run: usize) -> Self {
        self.run = run;
        self
    }

    /// Seed the run's RNG directly instead of deriving it from the config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the arrival profile.
    pub fn arrival_profile<B: ArrivalProfile>(self, profile: B) -> ModelBuilder<B> {
        ModelBuilder {
            config: self.config,
            profile,
            run:    self.run,
            seed:   self.seed,
            trace:  self.trace,
        }
    }

    /// Replay recorded arrival times instead of sampling them.  Times at or
    /// after `end_time` are accepted and simply never fire.
    pub fn arrival_trace(mut self, times: Vec<f64>) -> Self {
        self.trace = Some(times);
        self
    }

    /// Validate the configuration, schedule the initial events, and return a
    /// ready-to-run [`Model`].
    pub fn build(self) -> SimResult<Model<A>> {
        self.config.validate()?;

        let start = self.config.start();
        let mut events = EventQueue::new(start);

        // ── Arrivals ──────────────────────────────────────────────────────
        let sampled = match self.trace {
            None => {
                events.schedule(0.0, SimEvent::Arrival)?;
                true
            }
            Some(mut times) => {
                if let Some(&bad) = times.iter().find(|t| !(t.is_finite() && **t >= start.0)) {
                    return Err(SimError::ArrivalTrace(bad));
                }
                times.sort_by(f64::total_cmp);
                for t in times {
                    events.schedule_at(SimTime(t), SimEvent::Arrival)?;
                }
                false
            }
        };

        // ── Staffing ──────────────────────────────────────────────────────
        for change in &self.config.staffing.changes {
            events.schedule_at(SimTime(change.at), SimEvent::Staffing { handlers: change.handlers })?;
        }

        let rng = match self.seed {
            Some(seed) => RunRng::new(seed),
            None => RunRng::for_run(self.config.seed, self.run),
        };

        let state = RunState {
            run:         self.run,
            pool:        ResourcePool::new(self.config.number_of_handlers),
            queue:       BoundedQueue::new(self.config.max_queue_size),
            config:      self.config,
            profile:     self.profile,
            rng,
            callers:     Vec::new(),
            history:     Vec::new(),
            next_caller: CallerId(0),
            sampled,
        };
        Ok(Model { events, state })
    }
}
