//! Roster and standings command implementations
//!
//! Both walk the league index and read the same members payload, so in a
//! pipeline run the second job is served from the client's cache.

use tracing::warn;

use crate::{
    exports::{rosters::flatten_rosters, standings::flatten_standings, LeagueRow},
    sleeper::LeagueMembers,
    Result,
};

use super::common::{save_table, JobContext};

/// Fetch the members of every indexed league, skipping leagues that fail.
async fn members_by_league(ctx: &JobContext) -> Result<Vec<(LeagueRow, LeagueMembers)>> {
    let mut out = Vec::new();
    for (i, league) in ctx.league_index()?.into_iter().enumerate() {
        if i > 0 {
            ctx.pause_between_leagues().await;
        }
        match ctx.client.league_members(&league.league_id).await {
            Ok(members) => out.push((league, members)),
            Err(e) => warn!(league_id = %league.league_id, error = %e, "skipping league"),
        }
    }
    Ok(out)
}

pub async fn handle_rosters(ctx: &JobContext) -> Result<usize> {
    let rows: Vec<_> = members_by_league(ctx)
        .await?
        .iter()
        .flat_map(|(league, members)| flatten_rosters(league, members))
        .collect();
    save_table(ctx, &rows, "roster player")
}

pub async fn handle_users(ctx: &JobContext) -> Result<usize> {
    let rows: Vec<_> = members_by_league(ctx)
        .await?
        .iter()
        .flat_map(|(league, members)| flatten_standings(league, members))
        .collect();
    save_table(ctx, &rows, "user standing")
}
