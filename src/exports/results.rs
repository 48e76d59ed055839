//! Cumulative regular-season standings, week by week, with playoff ranks.
//!
//! Built purely from the matchup export, so it can be recomputed offline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{LeagueId, RosterId, Season, UserId, Week},
    core::Table,
};

use super::{matchups::MatchupRow, round2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyResultRow {
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
    #[serde(rename = "Week")]
    pub week: Week,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Ties")]
    pub ties: u32,
    #[serde(rename = "PointsFor")]
    pub points_for: f64,
    #[serde(rename = "PointsAgainst")]
    pub points_against: f64,
    #[serde(rename = "GamesPlayed")]
    pub games_played: u32,
    #[serde(rename = "WinPct")]
    pub win_pct: f64,
    #[serde(rename = "PointDiff")]
    pub point_diff: f64,
    #[serde(rename = "AvgPointsFor")]
    pub avg_points_for: f64,
    #[serde(rename = "AvgPointsAgainst")]
    pub avg_points_against: f64,
    #[serde(rename = "PlayoffScore")]
    pub playoff_score: f64,
    #[serde(rename = "PlayoffRank")]
    pub playoff_rank: u32,
}

impl Table for WeeklyResultRow {
    const FILE_NAME: &'static str = "Results_RegularSeason.csv";
    const HEADERS: &'static [&'static str] = &[
        "Year",
        "LeagueID",
        "LeagueName",
        "RosterID",
        "OwnerID",
        "OwnerName",
        "Week",
        "Wins",
        "Losses",
        "Ties",
        "PointsFor",
        "PointsAgainst",
        "GamesPlayed",
        "WinPct",
        "PointDiff",
        "AvgPointsFor",
        "AvgPointsAgainst",
        "PlayoffScore",
        "PlayoffRank",
    ];
}

/// Points-for acts as the tiebreaker inside the playoff score.
const POINTS_TIEBREAK_SCALE: f64 = 10_000.0;

#[derive(Default)]
struct Tally {
    wins: u32,
    losses: u32,
    ties: u32,
    points_for: f64,
    points_against: f64,
}

impl Tally {
    fn add(&mut self, row: &MatchupRow) {
        let (pf, pa) = (row.points_for, row.points_against);
        if pf > pa {
            self.wins += 1;
        } else if pf < pa {
            self.losses += 1;
        } else if pf > 0.0 {
            self.ties += 1;
        }
        self.points_for += pf;
        self.points_against += pa;
    }
}

/// A matchup counts toward standings when it is a played regular-season game.
fn counts(row: &MatchupRow, regular_season_weeks: Week) -> bool {
    row.is_regular_season
        && row.week.as_u16() >= 1
        && row.week <= regular_season_weeks
        && !(row.points_for == 0.0 && row.points_against == 0.0)
}

pub fn compute_results(matchups: &[MatchupRow], regular_season_weeks: Week) -> Vec<WeeklyResultRow> {
    type TeamKey = (Season, LeagueId, RosterId);

    // team -> week -> that week's tally, plus the latest identity seen
    let mut weekly: BTreeMap<TeamKey, BTreeMap<Week, Tally>> = BTreeMap::new();
    let mut identity: BTreeMap<TeamKey, &MatchupRow> = BTreeMap::new();

    for row in matchups.iter().filter(|r| counts(r, regular_season_weeks)) {
        let key = (row.year, row.league_id.clone(), row.roster_id);
        weekly
            .entry(key.clone())
            .or_default()
            .entry(row.week)
            .or_default()
            .add(row);
        identity.insert(key, row);
    }

    let mut out = Vec::new();
    for (key, weeks) in &weekly {
        let who = identity[key];
        let mut running = Tally::default();
        for (week, tally) in weeks {
            running.wins += tally.wins;
            running.losses += tally.losses;
            running.ties += tally.ties;
            running.points_for += tally.points_for;
            running.points_against += tally.points_against;

            let games = running.wins + running.losses + running.ties;
            let per_game = |v: f64| if games == 0 { 0.0 } else { v / games as f64 };
            out.push(WeeklyResultRow {
                year: key.0,
                league_id: key.1.clone(),
                league_name: who.league_name.clone(),
                roster_id: key.2,
                owner_id: who.owner_id.clone(),
                owner_name: who.owner_name.clone(),
                week: *week,
                wins: running.wins,
                losses: running.losses,
                ties: running.ties,
                points_for: round2(running.points_for),
                points_against: round2(running.points_against),
                games_played: games,
                win_pct: per_game(running.wins as f64),
                point_diff: round2(running.points_for - running.points_against),
                avg_points_for: round2(per_game(running.points_for)),
                avg_points_against: round2(per_game(running.points_against)),
                playoff_score: running.wins as f64 + running.points_for / POINTS_TIEBREAK_SCALE,
                playoff_rank: 0,
            });
        }
    }

    assign_playoff_ranks(&mut out);
    out.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then_with(|| a.league_name.cmp(&b.league_name))
            .then_with(|| a.week.cmp(&b.week))
            .then_with(|| a.playoff_rank.cmp(&b.playoff_rank))
            .then_with(|| a.roster_id.cmp(&b.roster_id))
    });
    out
}

/// Competition ("min") ranking of playoff score, descending, per league-week.
fn assign_playoff_ranks(rows: &mut [WeeklyResultRow]) {
    let mut scores: BTreeMap<(Season, LeagueId, Week), Vec<f64>> = BTreeMap::new();
    for r in rows.iter() {
        scores
            .entry((r.year, r.league_id.clone(), r.week))
            .or_default()
            .push(r.playoff_score);
    }
    for r in rows.iter_mut() {
        let peers = &scores[&(r.year, r.league_id.clone(), r.week)];
        let better = peers.iter().filter(|s| **s > r.playoff_score).count();
        r.playoff_rank = better as u32 + 1;
    }
}
