//! Draft boards, one row per pick.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, RosterId, Season},
    core::Table,
    sleeper::{types::DraftPick, NO_OWNER_ID},
    storage::DraftPickRecord,
};

use super::leagues::LeagueRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRow {
    #[serde(rename = "Year")]
    pub year: Season,
    #[serde(rename = "LeagueID")]
    pub league_id: LeagueId,
    #[serde(rename = "LeagueName")]
    pub league_name: String,
    #[serde(rename = "DraftID")]
    pub draft_id: String,
    #[serde(rename = "Round")]
    pub round: u32,
    #[serde(rename = "PickNumber")]
    pub pick_number: u32,
    #[serde(rename = "RosterID")]
    pub roster_id: Option<RosterId>,
    #[serde(rename = "MemberID")]
    pub member_id: String,
    #[serde(rename = "PlayerID")]
    pub player_id: String,
    #[serde(rename = "PlayerName")]
    pub player_name: String,
    #[serde(rename = "Position")]
    pub position: Option<String>,
    #[serde(rename = "Team")]
    pub team: Option<String>,
}

impl Table for DraftRow {
    const FILE_NAME: &'static str = "Drafts_AllYears.csv";
    const HEADERS: &'static [&'static str] = &[
        "Year",
        "LeagueID",
        "LeagueName",
        "DraftID",
        "Round",
        "PickNumber",
        "RosterID",
        "MemberID",
        "PlayerID",
        "PlayerName",
        "Position",
        "Team",
    ];
}

impl DraftRow {
    /// The subset of the pick kept in the local draft store.
    pub fn to_record(&self) -> DraftPickRecord {
        DraftPickRecord {
            id: None,
            league_id: self.league_id.clone(),
            round: self.round,
            pick_number: self.pick_number,
            member_id: self.member_id.clone(),
            player_name: self.player_name.clone(),
            position: self.position.clone(),
            team: self.team.clone(),
        }
    }
}

pub fn flatten_picks(league: &LeagueRow, draft_id: &str, picks: &[DraftPick]) -> Vec<DraftRow> {
    picks
        .iter()
        .map(|pick| DraftRow {
            year: league.year,
            league_id: league.league_id.clone(),
            league_name: league.league_name.clone(),
            draft_id: draft_id.to_string(),
            round: pick.round,
            pick_number: pick.pick_no,
            roster_id: pick.roster_id,
            member_id: pick
                .picked_by
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| NO_OWNER_ID.to_string()),
            player_id: pick.player_id.clone().unwrap_or_default(),
            player_name: pick.player_name(),
            position: pick.metadata.position.clone(),
            team: pick.metadata.team.clone().filter(|t| !t.is_empty()),
        })
        .collect()
}
