//! Wire types for the Sleeper v1 read API.
//!
//! Only the fields the exports need are modelled; everything else in the
//! payloads is ignored. Sleeper is loose about `null` versus missing, so most
//! collections go through [`de_null_default`].

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cli::types::{LeagueId, RosterId, UserId};


/// Treat an explicit `null` the same as a missing field.
pub(crate) fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids show up as JSON strings in most payloads and as numbers in a few.
fn de_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// `GET /user/{user_id}/leagues/nfl/{season}` element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: BTreeMap<String, Value>,
}

impl League {
    /// Division name from league metadata (`division_1`, `division_2`, ...).
    pub fn division_name(&self, division: u8) -> Option<String> {
        match self.metadata.get(&format!("division_{division}"))? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Win/loss and scoring totals Sleeper keeps on each roster.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub fpts: Option<f64>,
    #[serde(default)]
    pub fpts_decimal: Option<f64>,
    #[serde(default)]
    pub fpts_against: Option<f64>,
    #[serde(default)]
    pub fpts_against_decimal: Option<f64>,
    #[serde(default)]
    pub division: Option<u8>,
}

impl RosterSettings {
    /// Sleeper splits season points into whole and hundredths fields.
    pub fn points_for(&self) -> f64 {
        join_decimal(self.fpts, self.fpts_decimal)
    }

    pub fn points_against(&self) -> f64 {
        join_decimal(self.fpts_against, self.fpts_against_decimal)
    }
}

fn join_decimal(whole: Option<f64>, hundredths: Option<f64>) -> f64 {
    whole.unwrap_or(0.0) + hundredths.unwrap_or(0.0) / 100.0
}

/// `GET /league/{league_id}/rosters` element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: RosterSettings,
}

/// `GET /league/{league_id}/users` element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `GET /league/{league_id}/matchups/{week}` element: one roster's week.
///
/// Two entries sharing a `matchup_id` played each other. `matchup_id` is
/// `null` for rosters on a bye or eliminated from the bracket.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchupEntry {
    pub roster_id: RosterId,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<Value>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters_points: Vec<Value>,
}

/// `GET /league/{league_id}/transactions/{week}` element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub transaction_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_ids: Vec<RosterId>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub draft_picks: Vec<Value>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub adds: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub drops: BTreeMap<String, Value>,
    #[serde(default)]
    pub created: Option<i64>,
}

/// `GET /league/{league_id}/drafts` element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Draft {
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub draft_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Player details Sleeper embeds in each pick.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PickMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// `GET /draft/{draft_id}/picks` element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPick {
    pub round: u32,
    pub pick_no: u32,
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub picked_by: Option<String>,
    #[serde(default)]
    pub roster_id: Option<RosterId>,
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub player_id: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: PickMetadata,
}

impl DraftPick {
    pub fn player_name(&self) -> String {
        let first = self.metadata.first_name.as_deref().unwrap_or("");
        let last = self.metadata.last_name.as_deref().unwrap_or("");
        let name = format!("{first} {last}").trim().to_string();
        if name.is_empty() {
            self.player_id.clone().unwrap_or_default()
        } else {
            name
        }
    }
}

/// `GET /players/nfl` value (the payload is an object keyed by player id).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}
