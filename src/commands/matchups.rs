//! Matchup and regular-season results command implementations

use tracing::{debug, warn};

use crate::{
    core::read_table,
    exports::{
        matchups::flatten_matchups, results::compute_results, LeagueRow, MatchupRow,
    },
    sleeper::types::MatchupEntry,
    Result, Week,
};

use super::common::{save_table, JobContext};

/// Every week's raw matchup entries for one league. Weeks that fail to load
/// are logged and left out.
pub(crate) async fn fetch_league_weeks(
    ctx: &JobContext,
    league: &LeagueRow,
) -> Vec<(Week, Vec<MatchupEntry>)> {
    let mut weeks = Vec::new();
    for week in Week::through(ctx.config.weeks_per_season) {
        if week.as_u16() > 1 {
            ctx.pause_between_weeks().await;
        }
        match ctx.client.matchups(&league.league_id, week).await {
            Ok(entries) => {
                debug!(league_id = %league.league_id, %week, count = entries.len(), "fetched matchups");
                weeks.push((week, entries));
            }
            Err(e) => warn!(league_id = %league.league_id, %week, error = %e, "skipping week"),
        }
    }
    weeks
}

pub async fn handle_matchups(ctx: &JobContext) -> Result<usize> {
    let mut rows = Vec::new();

    for (i, league) in ctx.league_index()?.iter().enumerate() {
        if i > 0 {
            ctx.pause_between_leagues().await;
        }
        let members = match ctx.client.league_members(&league.league_id).await {
            Ok(m) => m,
            Err(e) => {
                warn!(league_id = %league.league_id, error = %e, "skipping league");
                continue;
            }
        };

        for (week, entries) in fetch_league_weeks(ctx, league).await {
            rows.extend(flatten_matchups(
                league,
                week,
                &entries,
                &members,
                ctx.config.regular_season_weeks,
            ));
        }
    }

    save_table(ctx, &rows, "matchup")
}

/// Recompute standings offline from the matchup table.
pub fn handle_results(ctx: &JobContext) -> Result<usize> {
    let matchups: Vec<MatchupRow> = read_table(&ctx.path_of::<MatchupRow>())?;
    let rows = compute_results(&matchups, ctx.config.regular_season_weeks);
    save_table(ctx, &rows, "weekly result")
}
