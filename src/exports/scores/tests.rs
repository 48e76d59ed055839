use super::*;
use serde_json::json;

fn league(year: u16, id: &str) -> LeagueRow {
    LeagueRow {
        year: Season::new(year),
        league_id: LeagueId::new(id),
        league_name: "ACC".into(),
        division1: None,
        division2: None,
    }
}

fn row(year: u16, league_id: &str, week: u16, roster: u32, slot: u32, points: f64) -> ScoreRow {
    ScoreRow {
        league_year: Season::new(year),
        league_id: LeagueId::new(league_id),
        week: Week::new(week),
        roster_id: RosterId::new(roster),
        lookup_id: format!("{league_id}{roster}"),
        starter: format!("p{slot}"),
        starter_points: Some(points),
        array_index: slot,
        label: String::new(),
    }
}

fn labels() -> HashMap<String, String> {
    HashMap::from([("4046".to_string(), "Patrick Mahomes, QB (KC)".to_string())])
}

#[test]
fn test_flatten_pads_uneven_arrays() {
    let entries: Vec<MatchupEntry> = serde_json::from_value(json!([
        {"roster_id": 3, "matchup_id": 1,
         "starters": ["4046", "0", "KC"],
         "starters_points": [24.3, 0.0]}
    ]))
    .unwrap();

    let rows = flatten_scores(&league(2025, "1180"), Week::new(2), &entries, &labels());
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].lookup_id, "11803");
    assert_eq!(rows[0].starter, "4046");
    assert_eq!(rows[0].starter_points, Some(24.3));
    assert_eq!(rows[0].array_index, 1);
    assert_eq!(rows[0].label, "Patrick Mahomes, QB (KC)");

    assert_eq!(rows[1].starter, "0");
    assert_eq!(rows[1].label, "");

    assert_eq!(rows[2].starter, "KC");
    assert_eq!(rows[2].starter_points, None);
    assert_eq!(rows[2].array_index, 3);
}

#[test]
fn test_flatten_more_points_than_starters() {
    let entries: Vec<MatchupEntry> = serde_json::from_value(json!([
        {"roster_id": 1, "starters": [], "starters_points": [1.5, 2.5]},
        {"roster_id": 2, "starters": null, "starters_points": null}
    ]))
    .unwrap();

    let rows = flatten_scores(&league(2025, "1"), Week::new(1), &entries, &labels());
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.starter.is_empty()));
    assert_eq!(rows[1].starter_points, Some(2.5));
}

#[test]
fn test_merge_fresh_rows_win() {
    let existing = vec![row(2025, "1", 1, 1, 1, 10.0), row(2025, "1", 1, 1, 2, 5.0)];
    let fresh = vec![row(2025, "1", 1, 1, 1, 12.5)];

    let merged = merge_scores(existing, fresh, &BTreeSet::new());
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].starter_points, Some(12.5));
    assert_eq!(merged[1].starter_points, Some(5.0));
}

#[test]
fn test_merge_is_idempotent() {
    let fetched = vec![row(2025, "1", 3, 2, 1, 7.0), row(2025, "1", 3, 2, 2, 8.0)];

    let once = merge_scores(Vec::new(), fetched.clone(), &BTreeSet::new());
    let twice = merge_scores(once.clone(), fetched, &BTreeSet::new());
    assert_eq!(once, twice);
}

#[test]
fn test_merge_sorts_league_ids_numerically() {
    let fresh = vec![
        row(2025, "900", 1, 1, 1, 1.0),
        row(2024, "1000", 1, 1, 1, 1.0),
        row(2025, "1000", 2, 1, 1, 1.0),
        row(2025, "1000", 1, 2, 1, 1.0),
        row(2025, "1000", 1, 1, 2, 1.0),
        row(2025, "1000", 1, 1, 1, 1.0),
    ];

    let merged = merge_scores(Vec::new(), fresh, &BTreeSet::new());
    let order: Vec<(u16, &str, u32, u16, u32)> = merged
        .iter()
        .map(|r| {
            (
                r.league_year.as_u16(),
                r.league_id.as_str(),
                r.roster_id.as_u32(),
                r.week.as_u16(),
                r.array_index,
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            (2024, "1000", 1, 1, 1),
            (2025, "900", 1, 1, 1),
            (2025, "1000", 1, 1, 1),
            (2025, "1000", 1, 1, 2),
            (2025, "1000", 1, 2, 1),
            (2025, "1000", 2, 1, 1),
        ]
    );
}

fn fetched(year: u16, league_id: &str, week: u16) -> FetchedWeek {
    (Season::new(year), LeagueId::new(league_id), Week::new(week))
}

#[test]
fn test_replace_season_drops_stale_slots() {
    // A roster that started a ninth slot earlier in the season no longer does.
    let existing = vec![
        row(2024, "1", 1, 1, 1, 3.0),
        row(2025, "2", 1, 1, 1, 4.0),
        row(2025, "2", 1, 1, 9, 4.0),
    ];
    let fresh = vec![row(2025, "2", 1, 1, 1, 6.0)];

    let merged = merge_scores(existing, fresh, &BTreeSet::from([fetched(2025, "2", 1)]));
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].league_year, Season::new(2024));
    assert_eq!(merged[1].starter_points, Some(6.0));
    assert!(merged.iter().all(|r| r.array_index != 9));
}

#[test]
fn test_replace_keeps_weeks_that_were_not_fetched() {
    // Week 2 of league "2" and all of league "3" failed to come back this run.
    let existing = vec![
        row(2025, "2", 1, 1, 9, 4.0),
        row(2025, "2", 2, 1, 9, 5.0),
        row(2025, "3", 1, 1, 9, 7.0),
    ];
    let fresh = vec![row(2025, "2", 1, 1, 1, 6.0)];
    let replace: BTreeSet<FetchedWeek> = fresh.iter().map(ScoreRow::fetched_week).collect();

    let merged = merge_scores(existing, fresh, &replace);
    let kept: Vec<(&str, u16, u32)> = merged
        .iter()
        .map(|r| (r.league_id.as_str(), r.week.as_u16(), r.array_index))
        .collect();
    assert_eq!(kept, vec![("2", 1, 1), ("2", 2, 9), ("3", 1, 9)]);
}

#[test]
fn test_dedupe_keeps_last_in_place() {
    let mut later = row(2025, "1", 1, 1, 1, 99.0);
    later.label = "later".into();
    let rows = vec![
        row(2025, "1", 1, 1, 1, 1.0),
        row(2025, "1", 1, 2, 1, 2.0),
        later,
    ];

    let (kept, removed) = dedupe_slots(rows);
    assert_eq!(removed, 1);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].roster_id, RosterId::new(2));
    assert_eq!(kept[1].label, "later");
}

#[test]
fn test_dedupe_ignores_year() {
    let rows = vec![row(2024, "1", 1, 1, 1, 1.0), row(2025, "1", 1, 1, 1, 2.0)];
    let (kept, removed) = dedupe_slots(rows);
    assert_eq!(removed, 1);
    assert_eq!(kept[0].league_year, Season::new(2025));
}

#[test]
fn test_inspect_league() {
    let mut rows = Vec::new();
    for week in 1..=3 {
        for roster in 1..=2 {
            for slot in 1..=9 {
                rows.push(row(2025, "1", week, roster, slot, 0.0));
            }
        }
    }
    rows.push(row(2025, "2", 1, 1, 1, 0.0));

    let summary = inspect_league(&rows, &LeagueId::new("1"));
    assert_eq!(summary.rows, 54);
    assert_eq!(summary.rosters, 2);
    assert_eq!(summary.weeks, vec![Week::new(1), Week::new(2), Week::new(3)]);
    assert_eq!(summary.slots, (1..=9).collect::<Vec<_>>());
    assert_eq!(summary.sample.len(), INSPECT_LIMIT);

    let empty = inspect_league(&rows, &LeagueId::new("404"));
    assert_eq!(empty.rows, 0);
    assert!(empty.sample.is_empty());
}

#[test]
fn test_csv_round_trip_with_blank_cells() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(ScoreRow::FILE_NAME);
    let mut blank = row(2025, "1", 1, 1, 1, 0.0);
    blank.starter = String::new();
    blank.starter_points = None;

    crate::core::write_table(&path, &[blank.clone()]).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(
        "LeagueYear,league_id,weekNum,roster_id,lookupID,starter,starter_points,array_index,label"
    ));

    let back: Vec<ScoreRow> = crate::core::read_table(&path).unwrap();
    assert_eq!(back, vec![blank]);
}
