//! Live-game check against ESPN's public NFL scoreboard.
//!
//! The export workflow only needs fresh matchup scores while games are in
//! progress; this is the gate it polls.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Result, SleeperError},
    sleeper::types::de_null_default,
};

/// Scoreboard root; only game state matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scoreboard {
    #[serde(default, deserialize_with = "de_null_default")]
    pub events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreboardEvent {
    #[serde(default, deserialize_with = "de_null_default")]
    pub status: EventStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventStatus {
    #[serde(rename = "type", default, deserialize_with = "de_null_default")]
    pub kind: EventStatusType,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventStatusType {
    /// `pre`, `in` or `post`.
    #[serde(default, deserialize_with = "de_null_default")]
    pub state: String,
}

impl Scoreboard {
    /// True when any game's state is `in`.
    pub fn games_active(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.status.kind.state.eq_ignore_ascii_case("in"))
    }
}

pub async fn fetch_scoreboard(client: &Client, url: &str) -> Result<Scoreboard> {
    debug!(%url, "GET");
    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(SleeperError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(res.json().await?)
}

/// Fetch the scoreboard and report whether any game is live.
pub async fn games_active(client: &Client, url: &str) -> Result<bool> {
    Ok(fetch_scoreboard(client, url).await?.games_active())
}
