//! Player catalog: fantasy-relevant NFL players currently on a team.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{cli::types::Position, core::Table, sleeper::types::PlayerInfo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub player_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub team: String,
}

impl Table for PlayerRow {
    const FILE_NAME: &'static str = "Players.csv";
    const HEADERS: &'static [&'static str] = &[
        "player_id",
        "first_name",
        "last_name",
        "position",
        "status",
        "team",
    ];
}

impl PlayerRow {
    /// `"{first} {last}, {position} ({team})"`, the label shown next to starters.
    pub fn label(&self) -> String {
        format!(
            "{} {}, {} ({})",
            self.first_name, self.last_name, self.position, self.team
        )
    }
}

/// Keep players with a team and a fantasy position.
///
/// The map is keyed by player id, so the output is already in id order.
pub fn flatten_players(players: &BTreeMap<String, PlayerInfo>) -> Vec<PlayerRow> {
    players
        .iter()
        .filter(|(_, info)| info.team.is_some())
        .filter(|(_, info)| {
            info.position
                .as_deref()
                .is_some_and(|p| p.parse::<Position>().is_ok())
        })
        .map(|(id, info)| PlayerRow {
            player_id: id.clone(),
            first_name: info.first_name.clone().unwrap_or_default(),
            last_name: info.last_name.clone().unwrap_or_default(),
            position: info.position.clone().unwrap_or_default(),
            status: info.status.clone().unwrap_or_default(),
            team: info.team.clone().unwrap_or_default(),
        })
        .collect()
}

/// player id -> label lookup used when flattening starters.
pub fn label_map(rows: &[PlayerRow]) -> HashMap<String, String> {
    rows.iter()
        .map(|r| (r.player_id.clone(), r.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> BTreeMap<String, PlayerInfo> {
        serde_json::from_value(json!({
            "4046": {"first_name": "Patrick", "last_name": "Mahomes", "position": "QB", "status": "Active", "team": "KC"},
            "KC": {"first_name": "Kansas City", "last_name": "Chiefs", "position": "DEF", "team": "KC"},
            "1001": {"first_name": "Retired", "last_name": "Guy", "position": "WR", "team": null},
            "1002": {"first_name": "Big", "last_name": "Lineman", "position": "OL", "team": "DAL"},
            "1003": {"first_name": "No", "last_name": "Position", "team": "DAL"},
            "2000": {"first_name": "Lead", "last_name": "Blocker", "position": "FB", "status": "Active", "team": "SF"}
        }))
        .unwrap()
    }

    #[test]
    fn test_flatten_filters_team_and_position() {
        let rows = flatten_players(&catalog());
        let ids: Vec<&str> = rows.iter().map(|r| r.player_id.as_str()).collect();
        assert_eq!(ids, vec!["2000", "4046", "KC"]);
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let rows = flatten_players(&catalog());
        let def = rows.iter().find(|r| r.player_id == "KC").unwrap();
        assert_eq!(def.status, "");
        assert_eq!(def.position, "DEF");
    }

    #[test]
    fn test_label_format() {
        let rows = flatten_players(&catalog());
        let labels = label_map(&rows);
        assert_eq!(labels["4046"], "Patrick Mahomes, QB (KC)");
        assert_eq!(labels["KC"], "Kansas City Chiefs, DEF (KC)");
        assert!(!labels.contains_key("1001"));
    }
}
