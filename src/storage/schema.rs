//! Database schema and connection management

use crate::error::SleeperError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for draft boards
pub struct DraftDatabase {
    pub(crate) conn: Connection,
}

impl DraftDatabase {
    /// Open (or create) the database at `path`, or at the default cache
    /// location, and ensure the table exists
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let db_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::database_path()?,
        };

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let db = Self { conn };
        db.create_table()?;
        Ok(db)
    }

    /// Throwaway database for tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.create_table()?;
        Ok(db)
    }

    /// Default location: `<cache dir>/sleeper-ffl/drafts.db`
    pub fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| SleeperError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("sleeper-ffl").join("drafts.db"))
    }

    /// Create the `league_drafts` table if it does not exist
    pub fn create_table(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS league_drafts (
                draft_id INTEGER PRIMARY KEY AUTOINCREMENT,
                league_id TEXT NOT NULL,
                round INTEGER NOT NULL,
                pick_number INTEGER NOT NULL,
                member_id TEXT NOT NULL,
                player_name TEXT NOT NULL,
                position TEXT,
                team TEXT,
                UNIQUE (league_id, round, pick_number)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_league_drafts_league
             ON league_drafts(league_id)",
            [],
        )?;

        Ok(())
    }
}
