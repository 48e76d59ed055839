//! League index: every league the tracked user belongs to, by season.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, Season},
    core::Table,
    sleeper::types::League,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueRow {
    #[serde(rename = "Year")]
    pub year: Season,
    #[serde(rename = "LeagueID")]
    pub league_id: LeagueId,
    #[serde(rename = "LeagueName")]
    pub league_name: String,
    #[serde(rename = "Division1")]
    pub division1: Option<String>,
    #[serde(rename = "Division2")]
    pub division2: Option<String>,
}

impl Table for LeagueRow {
    const FILE_NAME: &'static str = "LeagueIDs_AllYears.csv";
    const HEADERS: &'static [&'static str] =
        &["Year", "LeagueID", "LeagueName", "Division1", "Division2"];
}

impl LeagueRow {
    pub fn from_league(year: Season, league: &League) -> Self {
        Self {
            year,
            league_id: league.league_id.clone(),
            league_name: league.name.clone().unwrap_or_default(),
            division1: league.division_name(1),
            division2: league.division_name(2),
        }
    }

    /// Division name for a roster's `settings.division` number.
    pub fn division_name(&self, division: Option<u8>) -> Option<String> {
        match division {
            Some(1) => self.division1.clone(),
            Some(2) => self.division2.clone(),
            _ => None,
        }
    }
}

/// Rows belonging to one season.
pub fn for_season(rows: &[LeagueRow], season: Season) -> Vec<LeagueRow> {
    rows.iter().filter(|r| r.year == season).cloned().collect()
}
