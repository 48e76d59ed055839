//! Shared resources and helpers for the export jobs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{
    config::Config,
    core::{read_table, write_table, Table},
    exports::LeagueRow,
    sleeper::SleeperClient,
    storage::DraftDatabase,
    Result,
};

/// What every job needs: the resolved config and one API client, so the
/// client's member cache is shared by all jobs of a pipeline run.
pub struct JobContext {
    pub config: Config,
    pub client: SleeperClient,
}

impl JobContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = SleeperClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Location of `T`'s CSV in the data directory.
    pub fn path_of<T: Table>(&self) -> PathBuf {
        self.config.table_path(T::FILE_NAME)
    }

    /// The league index every per-league job iterates. Missing is an error.
    pub fn league_index(&self) -> Result<Vec<LeagueRow>> {
        read_table(&self.path_of::<LeagueRow>())
    }

    /// Open the draft store at `--db` or the default cache location.
    pub fn draft_db(&self) -> Result<DraftDatabase> {
        Ok(DraftDatabase::new(self.config.db_path.as_deref())?)
    }

    pub async fn pause_between_leagues(&self) {
        pause(self.config.league_pause).await;
    }

    pub async fn pause_between_weeks(&self) {
        pause(self.config.week_pause).await;
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Overwrite `T`'s table and report it. Returns the row count.
pub fn save_table<T: Table>(ctx: &JobContext, rows: &[T], what: &str) -> Result<usize> {
    let path = ctx.path_of::<T>();
    write_table(&path, rows)?;
    report_saved(rows.len(), what, &path);
    Ok(rows.len())
}

pub fn report_saved(count: usize, what: &str, path: &Path) {
    println!("✓ Saved {} {} records to {}", count, what, path.display());
}
