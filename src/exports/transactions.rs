//! Add/drop/trade log. Nested fields are stored as JSON text cells.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, Season, UserId, Week},
    core::Table,
    error::Result,
    sleeper::{types::Transaction, LeagueMembers},
};

use super::leagues::LeagueRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(rename = "Year")]
    pub year: Season,
    #[serde(rename = "LeagueID")]
    pub league_id: LeagueId,
    #[serde(rename = "LeagueName")]
    pub league_name: String,
    #[serde(rename = "Week")]
    pub week: Week,
    #[serde(rename = "TransactionID")]
    pub transaction_id: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "RosterIDs")]
    pub roster_ids: String,
    #[serde(rename = "OwnerIDs")]
    pub owner_ids: String,
    #[serde(rename = "Picks")]
    pub picks: String,
    #[serde(rename = "Adds")]
    pub adds: String,
    #[serde(rename = "Drops")]
    pub drops: String,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Created")]
    pub created: Option<i64>,
}

impl Table for TransactionRow {
    const FILE_NAME: &'static str = "Transactions_AllYears.csv";
    const HEADERS: &'static [&'static str] = &[
        "Year",
        "LeagueID",
        "LeagueName",
        "Week",
        "TransactionID",
        "Type",
        "RosterIDs",
        "OwnerIDs",
        "Picks",
        "Adds",
        "Drops",
        "Status",
        "Created",
    ];
}

pub fn flatten_transactions(
    league: &LeagueRow,
    week: Week,
    transactions: &[Transaction],
    members: &LeagueMembers,
    observers: &[UserId],
) -> Result<Vec<TransactionRow>> {
    transactions
        .iter()
        .map(|tx| {
            let owner_ids: Vec<String> = tx
                .roster_ids
                .iter()
                .map(|r| members.owner_id_excluding(*r, observers))
                .collect();

            Ok(TransactionRow {
                year: league.year,
                league_id: league.league_id.clone(),
                league_name: league.league_name.clone(),
                week,
                transaction_id: tx.transaction_id.clone(),
                kind: tx.kind.clone(),
                roster_ids: serde_json::to_string(&tx.roster_ids)?,
                owner_ids: serde_json::to_string(&owner_ids)?,
                picks: serde_json::to_string(&tx.draft_picks)?,
                adds: serde_json::to_string(&tx.adds)?,
                drops: serde_json::to_string(&tx.drops)?,
                status: tx.status.clone(),
                created: tx.created,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::types::{LeagueUser, Roster};
    use serde_json::json;

    #[test]
    fn test_flatten_with_observer_and_json_cells() {
        let league = LeagueRow {
            year: Season::new(2025),
            league_id: LeagueId::new("111"),
            league_name: "MAC".into(),
            division1: None,
            division2: None,
        };
        let rosters: Vec<Roster> = serde_json::from_value(json!([
            {"roster_id": 1, "owner_id": "100"},
            {"roster_id": 2, "owner_id": "731808894699028480"}
        ]))
        .unwrap();
        let users: Vec<LeagueUser> = serde_json::from_value(json!([])).unwrap();
        let members = LeagueMembers::new(rosters, users);
        let txs: Vec<Transaction> = serde_json::from_value(json!([
            {"transaction_id": "9001", "type": "trade", "status": "complete",
             "roster_ids": [1, 2, 7],
             "adds": {"4046": 1, "6794": 2},
             "drops": {"4046": 2, "6794": 1},
             "draft_picks": [{"season": "2026", "round": 1, "roster_id": 1, "owner_id": 2}],
             "created": 1_726_000_000_000i64}
        ]))
        .unwrap();

        let rows = flatten_transactions(
            &league,
            Week::new(4),
            &txs,
            &members,
            &[UserId::new("731808894699028480")],
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.week, Week::new(4));
        assert_eq!(r.kind.as_deref(), Some("trade"));
        assert_eq!(r.roster_ids, "[1,2,7]");
        assert_eq!(r.owner_ids, r#"["100","0","0"]"#);
        assert_eq!(r.adds, r#"{"4046":1,"6794":2}"#);
        assert_eq!(r.drops, r#"{"4046":2,"6794":1}"#);
        assert!(r.picks.contains("\"round\":1"));
        assert_eq!(r.created, Some(1_726_000_000_000));
    }

    #[test]
    fn test_empty_collections_serialize_as_empty_json() {
        let league = LeagueRow {
            year: Season::new(2025),
            league_id: LeagueId::new("111"),
            league_name: "MAC".into(),
            division1: None,
            division2: None,
        };
        let txs: Vec<Transaction> =
            serde_json::from_value(json!([{"transaction_id": "1", "type": "free_agent"}])).unwrap();
        let rows =
            flatten_transactions(&league, Week::new(1), &txs, &LeagueMembers::default(), &[])
                .unwrap();

        assert_eq!(rows[0].roster_ids, "[]");
        assert_eq!(rows[0].owner_ids, "[]");
        assert_eq!(rows[0].picks, "[]");
        assert_eq!(rows[0].adds, "{}");
        assert_eq!(rows[0].drops, "{}");
    }
}
