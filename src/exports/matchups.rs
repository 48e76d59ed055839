//! Weekly head-to-head results, one row per side of each pairing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    cli::types::{LeagueId, RosterId, Season, UserId, Week},
    core::Table,
    sleeper::{types::MatchupEntry, LeagueMembers},
};

use super::leagues::LeagueRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn from_points(points_for: f64, points_against: f64) -> Self {
        match points_for.partial_cmp(&points_against) {
            Some(Ordering::Greater) => Outcome::Win,
            Some(Ordering::Less) => Outcome::Loss,
            _ => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRow {
    #[serde(rename = "Year")]
    pub year: Season,
    #[serde(rename = "LeagueID")]
    pub league_id: LeagueId,
    #[serde(rename = "LeagueName")]
    pub league_name: String,
    #[serde(rename = "Week")]
    pub week: Week,
    #[serde(rename = "RosterID")]
    pub roster_id: RosterId,
    #[serde(rename = "OwnerID")]
    pub owner_id: Option<UserId>,
    #[serde(rename = "OwnerName")]
    pub owner_name: String,
    #[serde(rename = "OpponentRosterID")]
    pub opponent_roster_id: RosterId,
    #[serde(rename = "OpponentID")]
    pub opponent_id: Option<UserId>,
    #[serde(rename = "OpponentName")]
    pub opponent_name: String,
    #[serde(rename = "PointsFor")]
    pub points_for: f64,
    #[serde(rename = "PointsAgainst")]
    pub points_against: f64,
    #[serde(rename = "Outcome")]
    pub outcome: Outcome,
    #[serde(rename = "IsRegularSeason", deserialize_with = "super::de_lenient_bool")]
    pub is_regular_season: bool,
}

impl Table for MatchupRow {
    const FILE_NAME: &'static str = "Matchups_AllYears.csv";
    const HEADERS: &'static [&'static str] = &[
        "Year",
        "LeagueID",
        "LeagueName",
        "Week",
        "RosterID",
        "OwnerID",
        "OwnerName",
        "OpponentRosterID",
        "OpponentID",
        "OpponentName",
        "PointsFor",
        "PointsAgainst",
        "Outcome",
        "IsRegularSeason",
    ];
}

/// Group a week's entries into head-to-head pairs by `matchup_id`.
///
/// Byes (no matchup id) are dropped; groups that aren't exactly two rosters
/// are skipped with a warning. Pairs come out in order of first appearance.
pub fn pair_entries(entries: &[MatchupEntry]) -> Vec<(&MatchupEntry, &MatchupEntry)> {
    let mut groups: Vec<(u32, Vec<&MatchupEntry>)> = Vec::new();
    for entry in entries {
        let Some(id) = entry.matchup_id else {
            continue;
        };
        match groups.iter_mut().find(|(gid, _)| *gid == id) {
            Some((_, members)) => members.push(entry),
            None => groups.push((id, vec![entry])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(id, members)| match members.as_slice() {
            [a, b] => Some((*a, *b)),
            other => {
                warn!(matchup_id = id, rosters = other.len(), "skipping non head-to-head matchup");
                None
            }
        })
        .collect()
}

pub fn flatten_matchups(
    league: &LeagueRow,
    week: Week,
    entries: &[MatchupEntry],
    members: &LeagueMembers,
    regular_season_weeks: Week,
) -> Vec<MatchupRow> {
    let is_regular_season = week <= regular_season_weeks;
    let side = |me: &MatchupEntry, them: &MatchupEntry| {
        let points_for = me.points.unwrap_or(0.0);
        let points_against = them.points.unwrap_or(0.0);
        MatchupRow {
            year: league.year,
            league_id: league.league_id.clone(),
            league_name: league.league_name.clone(),
            week,
            roster_id: me.roster_id,
            owner_id: members.owner_of(me.roster_id).cloned(),
            owner_name: members.owner_name(me.roster_id),
            opponent_roster_id: them.roster_id,
            opponent_id: members.owner_of(them.roster_id).cloned(),
            opponent_name: members.owner_name(them.roster_id),
            points_for,
            points_against,
            outcome: Outcome::from_points(points_for, points_against),
            is_regular_season,
        }
    };

    pair_entries(entries)
        .into_iter()
        .flat_map(|(a, b)| [side(a, b), side(b, a)])
        .collect()
}
