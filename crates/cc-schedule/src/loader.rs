//! CSV loaders for arrival profiles and staffing plans.
//!
//! # Arrival profile format
//!
//! One row per segment; each row starts a segment that lasts until the next
//! row's `from_minute`.  The last row's mean applies to the rest of the run,
//! and the first row's mean also covers any time before its `from_minute`.
//!
//! ```csv
//! from_minute,mean_inter_arrival
//! 0,2.0
//! 60,1.5
//! 120,1.0
//! 240,1.5
//! 360,2.0
//! 480,3.0
//! ```
//!
//! # Staffing plan format
//!
//! ```csv
//! at_minute,handlers
//! 0,5
//! 270,3
//! ```
//!
//! Rows may appear in any order; both loaders sort by time and validate the
//! result before returning it.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cc_core::{PiecewiseRate, RateSegment, StaffingChange, StaffingPlan};

use crate::ScheduleError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RateRecord {
    from_minute:        f64,
    mean_inter_arrival: f64,
}

#[derive(Deserialize)]
struct StaffingRecord {
    at_minute: f64,
    handlers:  usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a piecewise arrival profile from a CSV file.
pub fn load_rate_csv(path: &Path) -> Result<PiecewiseRate, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_rate_reader(file)
}

/// Like [`load_rate_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for profiles embedded in
/// the binary.
pub fn load_rate_reader<R: Read>(reader: R) -> Result<PiecewiseRate, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<RateRecord> = Vec::new();
    for result in csv_reader.deserialize::<RateRecord>() {
        rows.push(result.map_err(|e| ScheduleError::Parse(e.to_string()))?);
    }
    rows.sort_by(|a, b| a.from_minute.total_cmp(&b.from_minute));

    let Some(last) = rows.last() else {
        return Err(ScheduleError::Parse("arrival profile has no rows".into()));
    };
    let after = last.mean_inter_arrival;

    let segments: Vec<RateSegment> = rows
        .windows(2)
        .map(|w| RateSegment {
            until:              w[1].from_minute,
            mean_inter_arrival: w[0].mean_inter_arrival,
        })
        .collect();

    let profile = PiecewiseRate { segments, after };
    profile
        .validate()
        .map_err(|e| ScheduleError::Parse(e.to_string()))?;
    Ok(profile)
}

/// Load a staffing plan from a CSV file.
pub fn load_staffing_csv(path: &Path) -> Result<StaffingPlan, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_staffing_reader(file)
}

/// Like [`load_staffing_csv`] but accepts any `Read` source.
///
/// Only row-level checks happen here; horizon checks need the run's start
/// and end and are done by `SimConfig::validate`.
pub fn load_staffing_reader<R: Read>(reader: R) -> Result<StaffingPlan, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut changes = Vec::new();
    for result in csv_reader.deserialize::<StaffingRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if !row.at_minute.is_finite() {
            return Err(ScheduleError::Parse(format!(
                "staffing change at non-finite minute {}",
                row.at_minute
            )));
        }
        changes.push(StaffingChange { at: row.at_minute, handlers: row.handlers });
    }
    Ok(StaffingPlan::new(changes))
}
