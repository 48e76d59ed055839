//! HTTP client for the Sleeper v1 read API.

use std::collections::BTreeMap;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, UserId, Week},
    config::Config,
    core::MemoryCache,
    error::{Result, SleeperError},
};

use super::{
    members::LeagueMembers,
    types::{Draft, DraftPick, League, LeagueUser, MatchupEntry, PlayerInfo, Roster, Transaction},
};


/// Headers sent with every request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Thin typed wrapper over the endpoints the exports read.
#[derive(Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
    members: MemoryCache<LeagueId, LeagueMembers>,
}

impl SleeperClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .default_headers(common_headers())
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            members: MemoryCache::default(),
        })
    }

    /// The underlying reqwest client, for non-Sleeper endpoints.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}{path}` and decode it. A JSON `null` body decodes as `T::default()`.
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self.http.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(SleeperError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = res.json::<Option<T>>().await?;
        Ok(body.unwrap_or_default())
    }

    pub async fn user_leagues(&self, user_id: &UserId, season: Season) -> Result<Vec<League>> {
        self.get_json(&format!("/user/{user_id}/leagues/nfl/{season}"))
            .await
    }

    pub async fn rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("/league/{league_id}/rosters")).await
    }

    pub async fn users(&self, league_id: &LeagueId) -> Result<Vec<LeagueUser>> {
        self.get_json(&format!("/league/{league_id}/users")).await
    }

    pub async fn matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<MatchupEntry>> {
        self.get_json(&format!("/league/{league_id}/matchups/{week}"))
            .await
    }

    pub async fn transactions(
        &self,
        league_id: &LeagueId,
        week: Week,
    ) -> Result<Vec<Transaction>> {
        self.get_json(&format!("/league/{league_id}/transactions/{week}"))
            .await
    }

    pub async fn drafts(&self, league_id: &LeagueId) -> Result<Vec<Draft>> {
        self.get_json(&format!("/league/{league_id}/drafts")).await
    }

    pub async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>> {
        self.get_json(&format!("/draft/{draft_id}/picks")).await
    }

    /// The full NFL player dump, keyed by Sleeper player id (several MB).
    pub async fn players(&self) -> Result<BTreeMap<String, PlayerInfo>> {
        self.get_json("/players/nfl").await
    }

    /// Rosters and users of a league, fetched once per client.
    pub async fn league_members(&self, league_id: &LeagueId) -> Result<LeagueMembers> {
        if let Some(cached) = self.members.get(league_id) {
            debug!(%league_id, "league members cache hit");
            return Ok(cached);
        }

        let rosters = self.rosters(league_id).await?;
        let users = self.users(league_id).await?;
        let members = LeagueMembers::new(rosters, users);
        self.members.put(league_id.clone(), members.clone());
        Ok(members)
    }
}
