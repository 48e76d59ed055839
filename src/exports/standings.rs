//! Season-to-date record of each roster, with division names resolved.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, RosterId, Season, UserId},
    core::Table,
    sleeper::LeagueMembers,
};

use super::leagues::LeagueRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
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
    #[serde(rename = "Division")]
    pub division: Option<u8>,
    #[serde(rename = "DivisionName")]
    pub division_name: Option<String>,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "PointsFor")]
    pub points_for: f64,
    #[serde(rename = "PointsAgainst")]
    pub points_against: f64,
}

impl Table for StandingRow {
    const FILE_NAME: &'static str = "Users_AllYears.csv";
    const HEADERS: &'static [&'static str] = &[
        "Year",
        "LeagueID",
        "LeagueName",
        "RosterID",
        "OwnerID",
        "OwnerName",
        "Division",
        "DivisionName",
        "Wins",
        "Losses",
        "PointsFor",
        "PointsAgainst",
    ];
}

pub fn flatten_standings(league: &LeagueRow, members: &LeagueMembers) -> Vec<StandingRow> {
    members
        .rosters
        .iter()
        .map(|roster| {
            let settings = &roster.settings;
            StandingRow {
                year: league.year,
                league_id: league.league_id.clone(),
                league_name: league.league_name.clone(),
                roster_id: roster.roster_id,
                owner_id: roster.owner_id.clone(),
                owner_name: members.name_or_unknown(roster.owner_id.as_ref()),
                division: settings.division,
                division_name: league.division_name(settings.division),
                wins: settings.wins.unwrap_or(0),
                losses: settings.losses.unwrap_or(0),
                points_for: settings.points_for(),
                points_against: settings.points_against(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::types::{LeagueUser, Roster};
    use serde_json::json;

    #[test]
    fn test_division_names_and_defaults() {
        let league = LeagueRow {
            year: Season::new(2024),
            league_id: LeagueId::new("222"),
            league_name: "SEC".into(),
            division1: Some("East".into()),
            division2: Some("West".into()),
        };
        let rosters: Vec<Roster> = serde_json::from_value(json!([
            {"roster_id": 1, "owner_id": "100",
             "settings": {"wins": 8, "losses": 3, "fpts": 1500, "fpts_decimal": 25,
                          "fpts_against": 1400, "division": 2}},
            {"roster_id": 2, "owner_id": "200", "settings": {"division": 1}},
            {"roster_id": 3, "owner_id": null, "settings": {}}
        ]))
        .unwrap();
        let users: Vec<LeagueUser> = serde_json::from_value(json!([
            {"user_id": "100", "display_name": "alice"},
            {"user_id": "200", "display_name": "bob"}
        ]))
        .unwrap();

        let rows = flatten_standings(&league, &LeagueMembers::new(rosters, users));
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].division_name.as_deref(), Some("West"));
        assert_eq!(rows[0].wins, 8);
        assert!((rows[0].points_for - 1500.25).abs() < 1e-9);
        assert_eq!(rows[0].points_against, 1400.0);

        assert_eq!(rows[1].division_name.as_deref(), Some("East"));
        assert_eq!(rows[1].wins, 0);
        assert_eq!(rows[1].points_for, 0.0);

        assert_eq!(rows[2].division, None);
        assert_eq!(rows[2].division_name, None);
        assert_eq!(rows[2].owner_name, "Unknown");
    }
}
