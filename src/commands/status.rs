//! File freshness and live-game command implementations

use crate::{
    espn::scoreboard::games_active,
    exports::last_update::scan_data_dir,
    Result,
};

use super::common::{save_table, JobContext};

pub fn handle_last_updated(ctx: &JobContext) -> Result<usize> {
    let rows = scan_data_dir(&ctx.config.data_dir)?;
    save_table(ctx, &rows, "file timestamp")
}

/// True when any NFL game is in progress.
pub async fn handle_game_status(ctx: &JobContext) -> Result<bool> {
    let active = games_active(ctx.client.http(), &ctx.config.scoreboard_url).await?;
    if active {
        println!("Games are active");
    } else {
        println!("No games in progress");
    }
    Ok(active)
}
