//! One row per rostered player per league.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, RosterId, Season, UserId},
    core::Table,
    sleeper::LeagueMembers,
};

use super::leagues::LeagueRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayerRow {
    #[serde(rename = "Year")]
    pub year: Season,
    #[serde(rename = "LeagueID")]
    pub league_id: LeagueId,
    #[serde(rename = "LeagueName")]
    pub league_name: String,
    #[serde(rename = "RosterID")]
    pub roster_id: RosterId,
    #[serde(rename = "OwnerID")]
    pub owner_id: Option<UserId>,
    #[serde(rename = "OwnerName")]
    pub owner_name: String,
    #[serde(rename = "PlayerID")]
    pub player_id: String,
}

impl Table for RosterPlayerRow {
    const FILE_NAME: &'static str = "Rosters_Players_AllYears.csv";
    const HEADERS: &'static [&'static str] = &[
        "Year",
        "LeagueID",
        "LeagueName",
        "RosterID",
        "OwnerID",
        "OwnerName",
        "PlayerID",
    ];
}

pub fn flatten_rosters(league: &LeagueRow, members: &LeagueMembers) -> Vec<RosterPlayerRow> {
    members
        .rosters
        .iter()
        .flat_map(|roster| {
            let owner_name = members.name_or_unknown(roster.owner_id.as_ref());
            roster.players.iter().map(move |player_id| RosterPlayerRow {
                year: league.year,
                league_id: league.league_id.clone(),
                league_name: league.league_name.clone(),
                roster_id: roster.roster_id,
                owner_id: roster.owner_id.clone(),
                owner_name: owner_name.clone(),
                player_id: player_id.clone(),
            })
        })
        .collect()
}
