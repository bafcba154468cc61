//! `cc-core`: foundational types for the callsim queueing engine.
//!
//! This crate is a dependency of every other `cc-*` crate.  It intentionally
//! has no `cc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CallerId`, `HandlerId`                               |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`rng`]         | `RunRng` (one independent stream per replication)     |
//! | [`profile`]     | `PiecewiseRate`, `StaffingPlan`                       |
//! | [`config`]      | `SimConfig`, `TimeRange`                              |
//! | [`error`]       | `ConfigError`, `CoreError`, `CoreResult`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the CLI's JSON config loader.                  |

pub mod config;
pub mod error;
pub mod ids;
pub mod profile;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, TimeRange};
pub use error::{ConfigError, CoreError, CoreResult};
pub use ids::{CallerId, HandlerId};
pub use profile::{PiecewiseRate, RateSegment, StaffingChange, StaffingPlan};
pub use rng::RunRng;
pub use time::{SimClock, SimTime};
