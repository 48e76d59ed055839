//! Command implementations for the Sleeper export jobs
//!
//! Each handler takes a shared [`JobContext`], fetches what it needs, and
//! writes one table into the data directory. Per-league and per-week fetch
//! failures are logged and skipped; missing input tables are errors.

pub mod common;
pub mod drafts;
pub mod leagues;
pub mod matchups;
pub mod players;
pub mod rosters;
pub mod scores;
pub mod status;
pub mod transactions;
pub mod update_all;

pub use common::JobContext;
