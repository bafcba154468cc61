//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "callsim",
    version,
    about = "Discrete-event simulation of a call center: arrivals, queueing, abandonment and retries"
)]
pub struct Cli {
    /// JSON configuration file.  Missing fields take their defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of replications.
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// Override the master seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Arrival profile CSV (`from_minute,mean_inter_arrival`).
    #[arg(long)]
    pub arrivals: Option<PathBuf>,

    /// Staffing plan CSV (`at_minute,handlers`).
    #[arg(long)]
    pub staffing: Option<PathBuf>,

    /// Directory for the results tables.
    #[arg(short, long, default_value = "output/callsim")]
    pub output: PathBuf,

    /// Results table format.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Skip writing results tables.
    #[arg(long)]
    pub no_output: bool,

    /// Wall-clock hour of simulation minute 0, for the printed report.
    #[arg(long, default_value_t = 8)]
    pub day_start_hour: u32,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `cc_sim=debug`).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Sqlite,
}
