//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{Cli, Commands},
    commands::{
        drafts::handle_drafts,
        leagues::handle_leagues,
        matchups::{handle_matchups, handle_results},
        players::handle_players,
        rosters::{handle_rosters, handle_users},
        scores::handle_scores,
        status::{handle_game_status, handle_last_updated},
        transactions::handle_transactions,
        update_all::handle_update_all,
        JobContext,
    },
    config::Config,
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Cli::parse();
    init_tracing(app.global.verbose);

    let mut config = Config::from_cli(&app.global);
    if let Commands::Leagues {
        start_year,
        end_year,
    } = &app.command
    {
        config.start_year = *start_year;
        config.end_year = end_year.unwrap_or(config.end_year);
    }
    let ctx = JobContext::new(config)?;

    match app.command {
        Commands::Leagues { .. } => {
            handle_leagues(&ctx).await?;
        }
        Commands::Players => {
            handle_players(&ctx).await?;
        }
        Commands::Rosters => {
            handle_rosters(&ctx).await?;
        }
        Commands::Users => {
            handle_users(&ctx).await?;
        }
        Commands::Matchups => {
            handle_matchups(&ctx).await?;
        }
        Commands::Results => {
            handle_results(&ctx)?;
        }
        Commands::Transactions { season } => {
            handle_transactions(&ctx, season).await?;
        }
        Commands::Scores { cmd } => {
            handle_scores(&ctx, cmd).await?;
        }
        Commands::Drafts { cmd } => {
            handle_drafts(&ctx, cmd).await?;
        }
        Commands::LastUpdated => {
            handle_last_updated(&ctx)?;
        }
        Commands::GameStatus => {
            if !handle_game_status(&ctx).await? {
                std::process::exit(1);
            }
        }
        Commands::UpdateAll { season } => handle_update_all(&ctx, season).await?,
    }

    Ok(())
}
