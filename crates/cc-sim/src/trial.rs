//! `Trial`: independent replications of one configuration.
//!
//! Run `i` is seeded from `(config.seed, i)`, so any run can be reproduced
//! on its own and adding runs never changes the earlier ones.

use cc_core::{PiecewiseRate, SimConfig};
use cc_schedule::ArrivalProfile;
use tracing::{error, info};

use crate::{ModelBuilder, NoopObserver, RunOutput, SimResult, TrialError, TrialObserver, TrialSummary};

/// Everything a successful trial produced.
#[derive(Clone, Debug)]
pub struct TrialOutcome {
    /// In run-index order.
    pub runs:    Vec<RunOutput>,
    pub summary: TrialSummary,
}

pub struct Trial<A = PiecewiseRate> {
    config:  SimConfig,
    profile: A,
}

impl Trial<PiecewiseRate> {
    /// A trial whose arrivals follow `config.arrival_profile`.
    pub fn new(config: SimConfig) -> Self {
        let profile = config.arrival_profile.clone();
        Self { config, profile }
    }
}

impl<A: ArrivalProfile> Trial<A> {
    pub fn with_profile(config: SimConfig, profile: A) -> Self {
        Self { config, profile }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Build and run replication `run` on its own.
    pub fn run_one(&self, run: usize) -> SimResult<RunOutput> {
        ModelBuilder::new(self.config.clone())
            .arrival_profile(&self.profile)
            .run_index(run)
            .build()?
            .run(&mut NoopObserver)
    }

    /// Run `config.number_of_runs` replications and aggregate them.
    ///
    /// # Errors
    /// [`TrialError::Config`] before any run starts if the configuration is
    /// invalid; [`TrialError::RunFailed`] for the first run that fails, with
    /// every earlier run's output attached.
    pub fn run<O: TrialObserver>(&self, observer: &mut O) -> Result<TrialOutcome, TrialError> {
        self.config.validate()?;
        let n = self.config.number_of_runs;
        info!(runs = n, seed = self.config.seed, "starting trial");

        let runs = self.execute(n, observer)?;

        let summary = TrialSummary::from_runs(runs.iter().map(|r| &r.summary));
        info!(
            runs = runs.len(),
            mean_total_calls = summary.means.total_calls,
            mean_queue_time = summary.means.mean_queue_time,
            "trial finished"
        );
        observer.on_trial_end(&summary);
        Ok(TrialOutcome { runs, summary })
    }

    #[cfg(not(feature = "parallel"))]
    fn execute<O: TrialObserver>(&self, n: usize, observer: &mut O) -> Result<Vec<RunOutput>, TrialError> {
        let mut completed = Vec::with_capacity(n);
        for run in 0..n {
            observer.on_run_start(run);
            report(run, self.run_one(run), observer, &mut completed)?;
        }
        Ok(completed)
    }

    #[cfg(feature = "parallel")]
    fn execute<O: TrialObserver>(&self, n: usize, observer: &mut O) -> Result<Vec<RunOutput>, TrialError> {
        use rayon::prelude::*;

        let results: Vec<SimResult<RunOutput>> = (0..n).into_par_iter().map(|run| self.run_one(run)).collect();

        let mut completed = Vec::with_capacity(n);
        for (run, result) in results.into_iter().enumerate() {
            observer.on_run_start(run);
            report(run, result, observer, &mut completed)?;
        }
        Ok(completed)
    }
}

/// Hand a finished run to the observer, or turn its failure into the
/// trial's error.
fn report<O: TrialObserver>(
    run:       usize,
    result:    SimResult<RunOutput>,
    observer:  &mut O,
    completed: &mut Vec<RunOutput>,
) -> Result<(), TrialError> {
    match result {
        Ok(output) => {
            info!(
                run,
                total_calls = output.summary.total_calls,
                abandoned = output.summary.abandoned_calls,
                bounced = output.summary.bounced_calls,
                "run finished"
            );
            observer.on_run_end(&output);
            completed.push(output);
            Ok(())
        }
        Err(e) => {
            error!(run, error = %e, "run failed; trial aborted");
            Err(TrialError::RunFailed {
                run,
                completed: std::mem::take(completed),
                source:    Box::new(e),
            })
        }
    }
}
