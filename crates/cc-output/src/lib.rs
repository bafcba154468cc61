//! `cc-output`: results-table writers for callsim trials.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                          |
//! |-----------|---------|------------------------------------------------------------------------|
//! | *(none)*  | CSV     | `callers.csv`, `queue_lengths.csv`, `run_summaries.csv`, `trial_summary.csv` |
//! | `sqlite`  | SQLite  | `output.db` (one table per CSV file)                                   |
//!
//! Both implement [`OutputWriter`] and are driven by [`TrialOutputObserver`],
//! which implements `cc_sim::TrialObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, TrialOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrialOutputObserver::new(writer);
//! let outcome = Trial::new(config).run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrialOutputObserver;
pub use row::{CallerRow, QueueSampleRow, RunSummaryRow, TrialSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
