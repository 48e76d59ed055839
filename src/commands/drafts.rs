//! Draft board command implementations

use tracing::{info, warn};

use crate::{
    cli::DraftsCmd,
    exports::drafts::flatten_picks,
    LeagueId, Result,
};

use super::common::{save_table, JobContext};

pub async fn handle_drafts(ctx: &JobContext, cmd: DraftsCmd) -> Result<usize> {
    match cmd {
        DraftsCmd::Sync => handle_sync(ctx).await,
        DraftsCmd::Show { league_id } => handle_show(ctx, &league_id),
        DraftsCmd::Delete { draft_id } => handle_delete(ctx, draft_id),
    }
}

/// Store every indexed league's draft picks and export `Drafts_AllYears.csv`.
pub async fn handle_sync(ctx: &JobContext) -> Result<usize> {
    let mut db = ctx.draft_db()?;
    let mut rows = Vec::new();

    for (i, league) in ctx.league_index()?.iter().enumerate() {
        if i > 0 {
            ctx.pause_between_leagues().await;
        }
        let drafts = match ctx.client.drafts(&league.league_id).await {
            Ok(d) => d,
            Err(e) => {
                warn!(league_id = %league.league_id, error = %e, "skipping league drafts");
                continue;
            }
        };

        for draft_id in drafts.iter().filter_map(|d| d.draft_id.as_deref()) {
            let picks = match ctx.client.draft_picks(draft_id).await {
                Ok(p) => p,
                Err(e) => {
                    warn!(%draft_id, error = %e, "skipping draft");
                    continue;
                }
            };
            let board = flatten_picks(league, draft_id, &picks);
            let records: Vec<_> = board.iter().map(|r| r.to_record()).collect();
            db.add_draft_picks(&records)?;
            info!(league_id = %league.league_id, %draft_id, picks = board.len(), "stored draft");
            rows.extend(board);
        }
    }

    save_table(ctx, &rows, "draft pick")
}

pub fn handle_show(ctx: &JobContext, league_id: &LeagueId) -> Result<usize> {
    let db = ctx.draft_db()?;
    let picks = db.get_draft_by_league(league_id)?;

    if picks.is_empty() {
        println!("⚠ No stored draft picks for league {}", league_id);
        return Ok(0);
    }

    println!(
        "{:<6} {:<5} {:<5} {:<20} {:<28} {:<4} {}",
        "ID", "Rd", "Pick", "Member", "Player", "Pos", "Team"
    );
    for p in &picks {
        println!(
            "{:<6} {:<5} {:<5} {:<20} {:<28} {:<4} {}",
            p.id.unwrap_or_default(),
            p.round,
            p.pick_number,
            p.member_id,
            p.player_name,
            p.position.as_deref().unwrap_or("-"),
            p.team.as_deref().unwrap_or("-")
        );
    }
    Ok(picks.len())
}

pub fn handle_delete(ctx: &JobContext, draft_id: i64) -> Result<usize> {
    let mut db = ctx.draft_db()?;
    if db.delete_draft_pick(draft_id)? {
        println!("✓ Deleted draft pick {}", draft_id);
        Ok(1)
    } else {
        println!("⚠ No draft pick with id {}", draft_id);
        Ok(0)
    }
}
