//! Historical scores command implementations

use std::collections::BTreeSet;

use tracing::info;

use crate::{
    cli::ScoresCmd,
    core::{read_table, read_table_or_empty, write_table_atomic},
    exports::{
        leagues::for_season,
        players::label_map,
        scores::{dedupe_slots, flatten_scores, inspect_league, merge_scores, FetchedWeek},
        PlayerRow, ScoreRow,
    },
    LeagueId, Result, Season,
};

use super::{
    common::{report_saved, JobContext},
    matchups::fetch_league_weeks,
};

pub async fn handle_scores(ctx: &JobContext, cmd: ScoresCmd) -> Result<usize> {
    match cmd {
        ScoresCmd::Rebuild {
            season,
            replace_season,
        } => handle_rebuild(ctx, season, replace_season).await,
        ScoresCmd::Dedupe => handle_dedupe(ctx),
        ScoresCmd::Inspect { league_id } => handle_inspect(ctx, &league_id),
    }
}

/// Fetch starter scores and fold them into `Scores.csv`.
///
/// With `replace_season`, stored rows of every league-week that came back
/// with data are discarded first, so slots a roster no longer fills
/// disappear. League-weeks whose fetch failed keep what was stored.
pub async fn handle_rebuild(
    ctx: &JobContext,
    season: Option<Season>,
    replace_season: bool,
) -> Result<usize> {
    let players: Vec<PlayerRow> = read_table(&ctx.path_of::<PlayerRow>())?;
    let labels = label_map(&players);

    let mut leagues = ctx.league_index()?;
    if let Some(season) = season {
        leagues = for_season(&leagues, season);
    }

    let path = ctx.path_of::<ScoreRow>();
    let existing: Vec<ScoreRow> = read_table_or_empty(&path)?;
    info!(rows = existing.len(), "loaded existing scores");

    let mut fresh = Vec::new();
    for (i, league) in leagues.iter().enumerate() {
        if i > 0 {
            ctx.pause_between_leagues().await;
        }
        for (week, entries) in fetch_league_weeks(ctx, league).await {
            fresh.extend(flatten_scores(league, week, &entries, &labels));
        }
    }

    if fresh.is_empty() {
        println!("⚠ No new score rows fetched; {} left unchanged", path.display());
        return Ok(0);
    }

    let replaced: BTreeSet<FetchedWeek> = if replace_season {
        fresh.iter().map(ScoreRow::fetched_week).collect()
    } else {
        BTreeSet::new()
    };
    let fetched = fresh.len();
    let merged = merge_scores(existing, fresh, &replaced);
    write_table_atomic(&path, &merged)?;

    println!("✓ Merged {} fetched score rows", fetched);
    report_saved(merged.len(), "score", &path);
    Ok(merged.len())
}

/// Rewrite `Scores.csv` with duplicate lineup slots collapsed.
pub fn handle_dedupe(ctx: &JobContext) -> Result<usize> {
    let path = ctx.path_of::<ScoreRow>();
    let rows: Vec<ScoreRow> = read_table(&path)?;
    let (kept, removed) = dedupe_slots(rows);
    write_table_atomic(&path, &kept)?;

    println!("✓ Removed {} duplicate score rows", removed);
    report_saved(kept.len(), "score", &path);
    Ok(removed)
}

pub fn handle_inspect(ctx: &JobContext, league_id: &LeagueId) -> Result<usize> {
    let rows: Vec<ScoreRow> = read_table(&ctx.path_of::<ScoreRow>())?;
    let summary = inspect_league(&rows, league_id);

    if summary.rows == 0 {
        println!("⚠ No score rows for league {}", league_id);
        return Ok(0);
    }

    let join = |items: Vec<String>| items.join(", ");
    println!("League {}: {} rows", league_id, summary.rows);
    println!("Distinct rosters: {}", summary.rosters);
    println!(
        "Weeks: {}",
        join(summary.weeks.iter().map(|w| w.to_string()).collect())
    );
    println!(
        "Slots: {}",
        join(summary.slots.iter().map(|s| s.to_string()).collect())
    );
    println!();
    println!(
        "{:<6} {:<5} {:<7} {:<5} {:<10} {:>8}  {}",
        "Year", "Week", "Roster", "Slot", "Starter", "Points", "Label"
    );
    for r in &summary.sample {
        let points = r
            .starter_points
            .map(|p| format!("{:.2}", p))
            .unwrap_or_default();
        println!(
            "{:<6} {:<5} {:<7} {:<5} {:<10} {:>8}  {}",
            r.league_year, r.week, r.roster_id, r.array_index, r.starter, points, r.label
        );
    }
    Ok(summary.rows)
}
