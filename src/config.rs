//! Runtime configuration assembled from CLI flags and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::{
    cli::{
        types::{Season, UserId, Week},
        GlobalOpts,
    },
    error::{Result, SleeperError},
    DATA_DIR_ENV_VAR, USER_ID_ENV_VAR,
};

/// Base path for the Sleeper v1 read API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// ESPN's public NFL scoreboard, used only to decide whether games are live.
pub const ESPN_SCOREBOARD_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/football/nfl/scoreboard";

pub const BASE_URL_ENV_VAR: &str = "SLEEPER_BASE_URL";
pub const SCOREBOARD_URL_ENV_VAR: &str = "ESPN_SCOREBOARD_URL";

/// The `--user-id` flag, else `SLEEPER_USER_ID`, else an error naming the env var.
///
/// A set but non-numeric `SLEEPER_USER_ID` is reported as such rather than
/// as missing.
pub fn resolve_user_id(user_id: Option<UserId>) -> Result<UserId> {
    if let Some(id) = user_id {
        return Ok(id);
    }
    match std::env::var(USER_ID_ENV_VAR) {
        Ok(value) => value.parse::<UserId>().map_err(|_| {
            warn!(env_var = USER_ID_ENV_VAR, %value, "ignoring non-numeric user id");
            SleeperError::InvalidUserId {
                env_var: USER_ID_ENV_VAR.to_string(),
                value,
            }
        }),
        Err(_) => Err(SleeperError::MissingUserId {
            env_var: USER_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Everything a job needs to know besides its own arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub base_url: String,
    pub scoreboard_url: String,
    pub user_id: Option<UserId>,
    /// Accounts present in every league; their ownership is exported as `0`.
    pub observers: Vec<UserId>,
    pub db_path: Option<PathBuf>,
    pub start_year: Season,
    pub end_year: Season,
    pub weeks_per_season: Week,
    pub regular_season_weeks: Week,
    pub request_timeout: Duration,
    pub league_pause: Duration,
    pub week_pause: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            base_url: SLEEPER_BASE_URL.to_string(),
            scoreboard_url: ESPN_SCOREBOARD_URL.to_string(),
            user_id: None,
            observers: Vec::new(),
            db_path: None,
            start_year: Season::new(2020),
            end_year: Season::current(),
            weeks_per_season: Week::new(18),
            regular_season_weeks: Week::new(11),
            request_timeout: Duration::from_secs(30),
            league_pause: Duration::from_secs(1),
            week_pause: Duration::from_millis(500),
            user_agent: format!("sleeper-ffl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Merge CLI flags over environment variables over defaults.
    pub fn from_cli(opts: &GlobalOpts) -> Self {
        let mut config = Self::default();

        config.data_dir = opts
            .data_dir
            .clone()
            .or_else(|| std::env::var(DATA_DIR_ENV_VAR).ok().map(PathBuf::from))
            .unwrap_or(config.data_dir);

        if let Ok(url) = std::env::var(BASE_URL_ENV_VAR) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var(SCOREBOARD_URL_ENV_VAR) {
            config.scoreboard_url = url;
        }

        config.user_id = resolve_user_id(opts.user_id.clone()).ok();

        // The tracked account sits in every league as a non-playing observer.
        config.observers = config.user_id.iter().cloned().collect();
        for extra in &opts.observers {
            if !config.observers.contains(extra) {
                config.observers.push(extra.clone());
            }
        }

        config.db_path = opts.db.clone();
        config
    }

    /// The tracked user, or an error naming the env var to set.
    pub fn require_user_id(&self) -> Result<&UserId> {
        self.user_id
            .as_ref()
            .ok_or_else(|| SleeperError::MissingUserId {
                env_var: USER_ID_ENV_VAR.to_string(),
            })
    }

    /// Path of a table inside the data directory.
    pub fn table_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Seasons to poll, oldest first.
    pub fn seasons(&self) -> impl Iterator<Item = Season> {
        (self.start_year.as_u16()..=self.end_year.as_u16()).map(Season::new)
    }

    /// Drop the politeness pauses between requests.
    pub fn without_pauses(mut self) -> Self {
        self.league_pause = Duration::ZERO;
        self.week_pause = Duration::ZERO;
        self
    }
}
