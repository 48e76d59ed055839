//! Full pipeline: every export in dependency order.

use crate::{Result, Season};

use super::{
    common::JobContext,
    leagues::handle_leagues,
    matchups::{handle_matchups, handle_results},
    players::handle_players,
    rosters::{handle_rosters, handle_users},
    scores::handle_rebuild,
    status::handle_last_updated,
    transactions::handle_transactions,
};

/// Run the whole refresh. Any failing step aborts the run.
///
/// `season` is the in-progress season: its transactions are exported and the
/// stored scores of every league-week it returns are replaced by the fresh fetch.
pub async fn handle_update_all(ctx: &JobContext, season: Option<Season>) -> Result<()> {
    let season = season.unwrap_or(ctx.config.end_year);

    println!("--- Leagues ---");
    handle_leagues(ctx).await?;
    println!("--- Players ---");
    handle_players(ctx).await?;
    println!("--- Rosters ---");
    handle_rosters(ctx).await?;
    println!("--- Users ---");
    handle_users(ctx).await?;
    println!("--- Matchups ---");
    handle_matchups(ctx).await?;
    println!("--- Transactions ---");
    handle_transactions(ctx, Some(season)).await?;
    println!("--- Scores ---");
    handle_rebuild(ctx, Some(season), true).await?;
    println!("--- Results ---");
    handle_results(ctx)?;
    println!("--- Last updated ---");
    handle_last_updated(ctx)?;

    println!("\n✓ Update complete!");
    Ok(())
}
