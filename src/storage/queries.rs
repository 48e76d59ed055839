//! Draft pick query operations

use super::{models::DraftPickRecord, schema::DraftDatabase};
use crate::cli::types::LeagueId;
use anyhow::Result;
use rusqlite::{params, Row};

impl DraftDatabase {
    /// Insert a pick, replacing any stored pick in the same league slot.
    /// Returns the new row id.
    pub fn add_draft_pick(&mut self, pick: &DraftPickRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT OR REPLACE INTO league_drafts
             (league_id, round, pick_number, member_id, player_name, position, team)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                pick.league_id.as_str(),
                pick.round,
                pick.pick_number,
                pick.member_id,
                pick.player_name,
                pick.position,
                pick.team
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Store a whole board in one transaction. Returns the number of picks written.
    pub fn add_draft_picks(&mut self, picks: &[DraftPickRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO league_drafts
                 (league_id, round, pick_number, member_id, player_name, position, team)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )?;
            for pick in picks {
                stmt.execute(params![
                    pick.league_id.as_str(),
                    pick.round,
                    pick.pick_number,
                    pick.member_id,
                    pick.player_name,
                    pick.position,
                    pick.team
                ])?;
            }
        }
        tx.commit()?;
        Ok(picks.len())
    }

    /// All stored picks of a league, in draft order
    pub fn get_draft_by_league(&self, league_id: &LeagueId) -> Result<Vec<DraftPickRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT draft_id, league_id, round, pick_number, member_id, player_name, position, team
             FROM league_drafts
             WHERE league_id = ?
             ORDER BY round, pick_number",
        )?;

        let rows = stmt.query_map(params![league_id.as_str()], row_to_pick)?;

        let mut picks = Vec::new();
        for row in rows {
            picks.push(row?);
        }
        Ok(picks)
    }

    /// Delete one stored pick by row id. Returns whether a row was removed.
    pub fn delete_draft_pick(&mut self, draft_id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM league_drafts WHERE draft_id = ?", params![draft_id])?;
        Ok(affected > 0)
    }
}

fn row_to_pick(row: &Row) -> rusqlite::Result<DraftPickRecord> {
    let league_id: String = row.get(1)?;
    Ok(DraftPickRecord {
        id: Some(row.get(0)?),
        league_id: LeagueId::new(league_id),
        round: row.get(2)?,
        pick_number: row.get(3)?,
        member_id: row.get(4)?,
        player_name: row.get(5)?,
        position: row.get(6)?,
        team: row.get(7)?,
    })
}
