//! Historical starter-level scores and the incremental merge behind them.
//!
//! Every run fetches some subset of league-weeks and folds it into the
//! accumulated `Scores.csv`. A starter slot is identified by
//! `(LeagueYear, league_id, weekNum, roster_id, array_index)`; when the same
//! slot appears twice the later row wins, so re-fetching a week overwrites
//! what was there instead of appending a duplicate.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    cli::types::{LeagueId, RosterId, Season, Week},
    core::Table,
    sleeper::types::MatchupEntry,
};

use super::leagues::LeagueRow;

/// Rows printed by `scores inspect`.
pub const INSPECT_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    #[serde(rename = "LeagueYear")]
    pub league_year: Season,
    pub league_id: LeagueId,
    #[serde(rename = "weekNum")]
    pub week: Week,
    pub roster_id: RosterId,
    #[serde(rename = "lookupID")]
    pub lookup_id: String,
    #[serde(default)]
    pub starter: String,
    pub starter_points: Option<f64>,
    pub array_index: u32,
    #[serde(default)]
    pub label: String,
}

impl Table for ScoreRow {
    const FILE_NAME: &'static str = "Scores.csv";
    const HEADERS: &'static [&'static str] = &[
        "LeagueYear",
        "league_id",
        "weekNum",
        "roster_id",
        "lookupID",
        "starter",
        "starter_points",
        "array_index",
        "label",
    ];
}

/// Sort order of the merged table. League ids are compared numerically,
/// which for unsigned decimal strings means shorter first, then lexically.
type SlotOrder = (Season, (usize, String), RosterId, Week, u32);

impl ScoreRow {
    fn slot_order(&self) -> SlotOrder {
        let id = self.league_id.as_str().to_string();
        (
            self.league_year,
            (id.len(), id),
            self.roster_id,
            self.week,
            self.array_index,
        )
    }
}

fn starter_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn starter_points(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// One row per starter slot of each roster in a league-week.
///
/// `starters` and `starters_points` may differ in length; the shorter side
/// is padded with empty cells.
pub fn flatten_scores(
    league: &LeagueRow,
    week: Week,
    entries: &[MatchupEntry],
    labels: &HashMap<String, String>,
) -> Vec<ScoreRow> {
    let mut rows = Vec::new();
    for entry in entries {
        let lookup_id = format!("{}{}", league.league_id, entry.roster_id);
        let slots = entry.starters.len().max(entry.starters_points.len());
        for i in 0..slots {
            let starter = starter_id(entry.starters.get(i));
            let label = labels.get(&starter).cloned().unwrap_or_default();
            rows.push(ScoreRow {
                league_year: league.year,
                league_id: league.league_id.clone(),
                week,
                roster_id: entry.roster_id,
                lookup_id: lookup_id.clone(),
                starter,
                starter_points: starter_points(entry.starters_points.get(i)),
                array_index: i as u32 + 1,
                label,
            });
        }
    }
    rows
}

/// A league-week whose matchups came back in this run.
pub type FetchedWeek = (Season, LeagueId, Week);

impl ScoreRow {
    pub fn fetched_week(&self) -> FetchedWeek {
        (self.league_year, self.league_id.clone(), self.week)
    }
}

/// Fold freshly fetched rows into the existing table.
///
/// Existing rows of any league-week in `replace` are dropped first, so a
/// slot the roster no longer fills disappears. League-weeks outside `replace`
/// keep their stored rows even when this run failed to fetch them. The result
/// has one row per slot, the fresh one where both exist, ordered by year,
/// league, roster, week and slot.
pub fn merge_scores(
    existing: Vec<ScoreRow>,
    fresh: Vec<ScoreRow>,
    replace: &BTreeSet<FetchedWeek>,
) -> Vec<ScoreRow> {
    let mut merged: BTreeMap<SlotOrder, ScoreRow> = BTreeMap::new();
    let kept = existing
        .into_iter()
        .filter(|r| !replace.contains(&r.fetched_week()));
    for row in kept.chain(fresh) {
        merged.insert(row.slot_order(), row);
    }
    merged.into_values().collect()
}

/// Drop repeated `(league_id, roster_id, weekNum, array_index)` slots,
/// keeping the last occurrence in place. Returns the rows and how many were
/// removed.
pub fn dedupe_slots(rows: Vec<ScoreRow>) -> (Vec<ScoreRow>, usize) {
    let key = |r: &ScoreRow| (r.league_id.clone(), r.roster_id, r.week, r.array_index);

    let mut last: HashMap<(LeagueId, RosterId, Week, u32), usize> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        last.insert(key(row), i);
    }

    let before = rows.len();
    let kept: Vec<ScoreRow> = rows
        .into_iter()
        .enumerate()
        .filter(|(i, row)| last.get(&key(row)) == Some(i))
        .map(|(_, row)| row)
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

/// Diagnostic view of one league's rows in the scores table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub rows: usize,
    pub rosters: usize,
    pub weeks: Vec<Week>,
    pub slots: Vec<u32>,
    pub sample: Vec<ScoreRow>,
}

pub fn inspect_league(rows: &[ScoreRow], league_id: &LeagueId) -> ScoreSummary {
    let league: Vec<&ScoreRow> = rows.iter().filter(|r| &r.league_id == league_id).collect();

    let rosters: BTreeSet<RosterId> = league.iter().map(|r| r.roster_id).collect();
    let weeks: BTreeSet<Week> = league.iter().map(|r| r.week).collect();
    let slots: BTreeSet<u32> = league.iter().map(|r| r.array_index).collect();

    ScoreSummary {
        rows: league.len(),
        rosters: rosters.len(),
        weeks: weeks.into_iter().take(INSPECT_LIMIT).collect(),
        slots: slots.into_iter().take(INSPECT_LIMIT).collect(),
        sample: league.into_iter().take(INSPECT_LIMIT).cloned().collect(),
    }
}

#[cfg(test)]
mod tests;
