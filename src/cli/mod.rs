//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Season, UserId};

/// Flags shared by every job.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Directory the CSV tables live in (or set `SLEEPER_DATA_DIR`, default `data`).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Sleeper user whose leagues are tracked (or set `SLEEPER_USER_ID`).
    #[clap(long, short, global = true)]
    pub user_id: Option<UserId>,

    /// Extra observer accounts whose ownership is reported as 0 (repeatable).
    #[clap(long = "observer", global = true)]
    pub observers: Vec<UserId>,

    /// SQLite file for draft picks (default: the user cache directory).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Show debug-level progress.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum ScoresCmd {
    /// Fetch starter scores and merge them into the historical table.
    Rebuild {
        /// Only fetch leagues from this season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Drop the stored rows of every league-week that was refetched before merging.
        #[clap(long)]
        replace_season: bool,
    },

    /// Collapse duplicate lineup slots left behind by older runs.
    Dedupe,

    /// Print a quick sanity summary for one league.
    Inspect {
        #[clap(long, short)]
        league_id: LeagueId,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftsCmd {
    /// Fetch draft picks for every indexed league into the local store and CSV.
    Sync,

    /// Print the stored picks of one league in draft order.
    Show {
        #[clap(long, short)]
        league_id: LeagueId,
    },

    /// Remove a single stored pick by its row id.
    Delete {
        #[clap(long)]
        draft_id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every league the user belongs to, across seasons.
    Leagues {
        /// First season to fetch.
        #[clap(long, default_value_t = Season::new(2020))]
        start_year: Season,

        /// Last season to fetch (defaults to the current year).
        #[clap(long)]
        end_year: Option<Season>,
    },

    /// Export the NFL player catalog (fantasy positions on a team only).
    Players,

    /// Export one row per rostered player per league.
    Rosters,

    /// Export per-roster standings with division names.
    Users,

    /// Export weekly head-to-head results, one row per side.
    Matchups,

    /// Compute cumulative regular-season standings and playoff ranks.
    Results,

    /// Export the add/drop/trade log for one season.
    Transactions {
        /// Season to export (defaults to the current year).
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Historical starter scores.
    Scores {
        #[clap(subcommand)]
        cmd: ScoresCmd,
    },

    /// League draft picks.
    Drafts {
        #[clap(subcommand)]
        cmd: DraftsCmd,
    },

    /// Record the last-modified time of every exported table.
    LastUpdated,

    /// Exit 0 when NFL games are live, 1 otherwise.
    GameStatus,

    /// Run every export in dependency order.
    UpdateAll {
        /// Season used for transactions (defaults to the current year).
        #[clap(long, short)]
        season: Option<Season>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper fantasy football CSV exporter")]
pub struct Cli {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
