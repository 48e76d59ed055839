//! Player catalog command implementation

use tracing::info;

use crate::{exports::players::flatten_players, Result, SleeperError};

use super::common::{save_table, JobContext};

/// Refresh `Players.csv`. An empty dump is an error so a bad response never
/// wipes the label lookup the scores job depends on.
pub async fn handle_players(ctx: &JobContext) -> Result<usize> {
    println!("Fetching NFL player catalog...");
    let players = ctx.client.players().await?;
    if players.is_empty() {
        return Err(SleeperError::NoData);
    }
    let rows = flatten_players(&players);
    info!(total = players.len(), kept = rows.len(), "filtered player catalog");
    save_table(ctx, &rows, "player")
}
