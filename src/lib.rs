//! Sleeper Fantasy Football CSV Exporter
//!
//! Polls the public Sleeper read API, flattens the JSON payloads into
//! tables, and keeps a directory of CSV files current for dashboards.
//!
//! ## Jobs
//!
//! - **League index**: every league the tracked user belongs to, per season
//! - **Players, rosters, standings, matchups, transactions**: one table each
//! - **Regular-season results**: cumulative records and playoff ranks,
//!   computed offline from the matchup table
//! - **Historical scores**: starter-level points merged incrementally into
//!   an accumulated table, one row per lineup slot
//! - **Drafts**: picks kept in a local SQLite store and exported
//! - **Last updated / game status**: freshness and live-game checks for
//!   schedulers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{commands::{leagues::handle_leagues, JobContext}, config::Config, Season};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let config = Config {
//!     user_id: Some("731808894699028480".parse()?),
//!     start_year: Season::new(2020),
//!     end_year: Season::current(),
//!     ..Config::default()
//! };
//! let ctx = JobContext::new(config)?;
//! handle_leagues(&ctx).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SLEEPER_USER_ID=731808894699028480
//! export SLEEPER_DATA_DIR=./data
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod exports;
pub mod sleeper;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, Position, RosterId, Season, UserId, Week};
pub use error::{Result, SleeperError};

pub const USER_ID_ENV_VAR: &str = "SLEEPER_USER_ID";
pub const DATA_DIR_ENV_VAR: &str = "SLEEPER_DATA_DIR";
