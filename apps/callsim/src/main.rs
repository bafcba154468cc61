//! callsim: run a call-center trial from the command line.
//!
//! Loads a configuration (JSON, optionally overridden by CSV profiles and
//! flags), runs every replication, writes the results tables, and prints a
//! per-run summary.

mod cli;
mod report;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cc_core::SimConfig;
use cc_output::{CsvWriter, OutputWriter, TrialOutputObserver};
use cc_schedule::{load_rate_csv, load_staffing_csv};
use cc_sim::{NoopObserver, Trial, TrialError, TrialOutcome};

use cli::{Cli, Format};

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(path) = &cli.arrivals {
        config.arrival_profile =
            load_rate_csv(path).with_context(|| format!("loading arrival profile {}", path.display()))?;
    }
    if let Some(path) = &cli.staffing {
        config.staffing =
            load_staffing_csv(path).with_context(|| format!("loading staffing plan {}", path.display()))?;
    }
    if let Some(runs) = cli.runs {
        config.number_of_runs = runs;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

// ── Running ───────────────────────────────────────────────────────────────────

/// Run the trial with results going to `writer`.
fn run_to<W: OutputWriter>(trial: &Trial, writer: W) -> Result<TrialOutcome> {
    let mut obs = TrialOutputObserver::new(writer);
    let result = trial.run(&mut obs);

    if result.is_err() {
        // Completed runs' rows are already written; make sure they reach disk.
        if let Err(e) = obs.finish() {
            error!(error = %e, "flushing results after a failed trial");
        }
    }
    if let Some(e) = obs.take_error() {
        error!(error = %e, "writing results");
    }
    result.map_err(report_failure)
}

#[cfg(feature = "sqlite")]
fn run_sqlite(trial: &Trial, dir: &Path) -> Result<TrialOutcome> {
    run_to(trial, cc_output::SqliteWriter::new(dir)?)
}

#[cfg(not(feature = "sqlite"))]
fn run_sqlite(_trial: &Trial, _dir: &Path) -> Result<TrialOutcome> {
    anyhow::bail!("SQLite output requires building callsim with `--features sqlite`")
}

/// Print whatever a failed trial still produced and turn it into an error.
fn report_failure(err: TrialError) -> anyhow::Error {
    if let TrialError::RunFailed { run, completed, source } = &err {
        error!(run, completed = completed.len(), error = %source, "trial aborted");
        if !completed.is_empty() {
            println!("Runs completed before the failure:");
            report::print_runs(completed.iter().map(|r| &r.summary));
            println!();
        }
    }
    anyhow::Error::new(err)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = load_config(&cli)?;

    println!("=== callsim: call-center queueing trial ===");
    report::print_config(&config, cli.day_start_hour);
    println!();

    let trial = Trial::new(config);
    let t0 = Instant::now();
    let outcome = if cli.no_output {
        trial.run(&mut NoopObserver).map_err(report_failure)?
    } else {
        std::fs::create_dir_all(&cli.output)
            .with_context(|| format!("creating {}", cli.output.display()))?;
        match cli.format {
            Format::Csv => run_to(&trial, CsvWriter::new(&cli.output)?)?,
            Format::Sqlite => run_sqlite(&trial, &cli.output)?,
        }
    };
    let elapsed = t0.elapsed();
    info!(runs = outcome.runs.len(), secs = elapsed.as_secs_f64(), "trial finished");

    println!(
        "Trial complete: {} run(s) in {:.3} s",
        outcome.runs.len(),
        elapsed.as_secs_f64()
    );
    if !cli.no_output {
        println!("Results written to {}", cli.output.display());
    }
    println!();

    report::print_runs(outcome.summary.runs.iter());
    println!();
    report::print_trial(&outcome.summary);

    Ok(())
}
