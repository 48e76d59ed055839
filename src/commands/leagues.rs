//! League index command implementation

use tracing::{info, warn};

use crate::{exports::LeagueRow, Result};

use super::common::{save_table, JobContext};

/// Fetch the tracked user's leagues for every configured season and
/// overwrite the league index. A season that fails to load is skipped.
pub async fn handle_leagues(ctx: &JobContext) -> Result<usize> {
    let user_id = ctx.config.require_user_id()?;
    let mut rows = Vec::new();

    for (i, season) in ctx.config.seasons().enumerate() {
        if i > 0 {
            ctx.pause_between_leagues().await;
        }
        match ctx.client.user_leagues(user_id, season).await {
            Ok(leagues) => {
                info!(%season, count = leagues.len(), "fetched leagues");
                rows.extend(leagues.iter().map(|l| LeagueRow::from_league(season, l)));
            }
            Err(e) => warn!(%season, error = %e, "failed to fetch leagues"),
        }
    }

    save_table(ctx, &rows, "league")
}
