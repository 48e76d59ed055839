//! Transactions command implementation

use tracing::{info, warn};

use crate::{
    core::{read_table_or_empty, write_table},
    exports::{leagues::for_season, transactions::flatten_transactions, TransactionRow},
    Result, Season, Week,
};

use super::common::{report_saved, JobContext};

/// Export one season's transactions. Rows already stored for other seasons
/// are kept, so the table accumulates across runs.
pub async fn handle_transactions(ctx: &JobContext, season: Option<Season>) -> Result<usize> {
    let season = season.unwrap_or(ctx.config.end_year);
    let leagues = for_season(&ctx.league_index()?, season);
    if leagues.is_empty() {
        println!("⚠ No leagues indexed for {}", season);
    }

    let mut fresh = Vec::new();
    for (i, league) in leagues.iter().enumerate() {
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

        for week in Week::through(ctx.config.weeks_per_season) {
            if week.as_u16() > 1 {
                ctx.pause_between_weeks().await;
            }
            match ctx.client.transactions(&league.league_id, week).await {
                Ok(txs) => fresh.extend(flatten_transactions(
                    league,
                    week,
                    &txs,
                    &members,
                    &ctx.config.observers,
                )?),
                Err(e) => {
                    warn!(league_id = %league.league_id, %week, error = %e, "skipping week")
                }
            }
        }
        info!(league_id = %league.league_id, "fetched transactions");
    }

    let path = ctx.path_of::<TransactionRow>();
    let mut rows: Vec<TransactionRow> = read_table_or_empty(&path)?
        .into_iter()
        .filter(|r: &TransactionRow| r.year != season)
        .collect();
    let count = fresh.len();
    rows.extend(fresh);
    write_table(&path, &rows)?;
    report_saved(count, &format!("{} transaction", season), &path);
    Ok(count)
}
