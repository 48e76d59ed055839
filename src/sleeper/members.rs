//! Roster-to-owner lookups for one league.

use std::collections::HashMap;

use crate::cli::types::{RosterId, UserId};

use super::types::{LeagueUser, Roster};

/// Display name used when a roster has no owner or the owner left the league.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Owner id written for observers and unowned rosters in transaction exports.
pub const NO_OWNER_ID: &str = "0";

/// A league's rosters joined with its users.
#[derive(Debug, Clone, Default)]
pub struct LeagueMembers {
    pub rosters: Vec<Roster>,
    display_names: HashMap<UserId, String>,
}

impl LeagueMembers {
    pub fn new(rosters: Vec<Roster>, users: Vec<LeagueUser>) -> Self {
        let display_names = users
            .into_iter()
            .filter_map(|u| u.display_name.map(|name| (u.user_id, name)))
            .collect();
        Self {
            rosters,
            display_names,
        }
    }

    pub fn roster(&self, roster_id: RosterId) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.roster_id == roster_id)
    }

    pub fn owner_of(&self, roster_id: RosterId) -> Option<&UserId> {
        self.roster(roster_id)?.owner_id.as_ref()
    }

    pub fn display_name(&self, user_id: &UserId) -> Option<&str> {
        self.display_names.get(user_id).map(String::as_str)
    }

    /// Display name of `user_id`, or [`UNKNOWN_OWNER`].
    pub fn name_or_unknown(&self, user_id: Option<&UserId>) -> String {
        user_id
            .and_then(|id| self.display_name(id))
            .unwrap_or(UNKNOWN_OWNER)
            .to_string()
    }

    /// Display name of the roster's owner, or [`UNKNOWN_OWNER`].
    pub fn owner_name(&self, roster_id: RosterId) -> String {
        self.name_or_unknown(self.owner_of(roster_id))
    }

    /// Owner id for transaction exports: observers and unowned rosters map to `0`.
    pub fn owner_id_excluding(&self, roster_id: RosterId, observers: &[UserId]) -> String {
        match self.owner_of(roster_id) {
            Some(owner) if !observers.contains(owner) => owner.to_string(),
            _ => NO_OWNER_ID.to_string(),
        }
    }
}
