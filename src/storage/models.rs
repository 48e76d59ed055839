//! Data models for the storage layer

use crate::cli::types::LeagueId;
use serde::{Deserialize, Serialize};

/// One pick as stored in `league_drafts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPickRecord {
    /// Row id; `None` until the pick has been stored
    pub id: Option<i64>,
    pub league_id: LeagueId,
    pub round: u32,
    pub pick_number: u32,
    pub member_id: String,
    pub player_name: String,
    pub position: Option<String>,
    pub team: Option<String>,
}
