//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! four tables: `callers`, `queue_lengths`, `run_summaries` and
//! `trial_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CallerRow, OutputResult, QueueSampleRow, RunSummaryRow, TrialSummaryRow};

/// Writes trial output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS callers (
                 run             INTEGER NOT NULL,
                 caller_id       INTEGER NOT NULL,
                 arrival_time    REAL    NOT NULL,
                 queue_time      REAL    NOT NULL,
                 service_time    REAL    NOT NULL,
                 completion_time REAL,
                 abandoned       INTEGER NOT NULL,
                 bounced         INTEGER NOT NULL,
                 retry_count     INTEGER NOT NULL,
                 outcome         TEXT    NOT NULL,
                 PRIMARY KEY (run, caller_id)
             );
             CREATE TABLE IF NOT EXISTS queue_lengths (
                 run          INTEGER NOT NULL,
                 time         REAL    NOT NULL,
                 queue_length INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summaries (
                 run               INTEGER PRIMARY KEY,
                 mean_queue_time   REAL    NOT NULL,
                 mean_service_time REAL    NOT NULL,
                 total_calls       INTEGER NOT NULL,
                 completed_calls   INTEGER NOT NULL,
                 abandoned_calls   INTEGER NOT NULL,
                 bounced_calls     INTEGER NOT NULL,
                 max_queue_length  INTEGER NOT NULL,
                 calls_per_hour    REAL    NOT NULL,
                 handlers_added    INTEGER NOT NULL,
                 handlers_removed  INTEGER NOT NULL,
                 peak_waiting      INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS trial_summary (
                 runs              INTEGER NOT NULL,
                 mean_queue_time   REAL    NOT NULL,
                 mean_service_time REAL    NOT NULL,
                 total_calls       REAL    NOT NULL,
                 completed_calls   REAL    NOT NULL,
                 abandoned_calls   REAL    NOT NULL,
                 bounced_calls     REAL    NOT NULL,
                 mean_max_queue    REAL    NOT NULL,
                 max_queue_length  INTEGER NOT NULL,
                 calls_per_hour    REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_callers(&mut self, rows: &[CallerRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO callers \
                 (run, caller_id, arrival_time, queue_time, service_time, completion_time, \
                  abandoned, bounced, retry_count, outcome) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.caller_id,
                    row.arrival_time,
                    row.queue_time,
                    row.service_time,
                    row.completion_time,
                    row.abandoned as i64,
                    row.bounced as i64,
                    row.retry_count,
                    row.outcome,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_queue_samples(&mut self, rows: &[QueueSampleRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO queue_lengths (run, time, queue_length) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.run, row.time, row.queue_length as i64])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summaries \
             (run, mean_queue_time, mean_service_time, total_calls, completed_calls, \
              abandoned_calls, bounced_calls, max_queue_length, calls_per_hour, \
              handlers_added, handlers_removed, peak_waiting) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                row.run,
                row.mean_queue_time,
                row.mean_service_time,
                row.total_calls as i64,
                row.completed_calls as i64,
                row.abandoned_calls as i64,
                row.bounced_calls as i64,
                row.max_queue_length as i64,
                row.calls_per_hour,
                row.handlers_added as i64,
                row.handlers_removed as i64,
                row.peak_waiting as i64,
            ],
        )?;
        Ok(())
    }

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trial_summary \
             (runs, mean_queue_time, mean_service_time, total_calls, completed_calls, \
              abandoned_calls, bounced_calls, mean_max_queue, max_queue_length, calls_per_hour) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                row.runs as i64,
                row.mean_queue_time,
                row.mean_service_time,
                row.total_calls,
                row.completed_calls,
                row.abandoned_calls,
                row.bounced_calls,
                row.mean_max_queue,
                row.max_queue_length as i64,
                row.calls_per_hour,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
