//! ID types for Sleeper fantasy football entities.

use crate::error::{Result, SleeperError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper League IDs.
///
/// Sleeper hands out 18-19 digit snowflake IDs. They are kept as text so that
/// values round-trip through CSV exactly as the API returned them.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::LeagueId;
///
/// let league_id = LeagueId::new("1192383038721757184");
/// assert_eq!(league_id.as_str(), "1192383038721757184");
/// assert_eq!(league_id.to_string(), "1192383038721757184");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // Reject anything that isn't a snowflake before it gets into a URL.
        trimmed.parse::<u64>()?;
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for Sleeper user IDs (roster owners, observers).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed.parse::<u64>()?;
        Ok(Self(trimmed.to_string()))
    }
}

/// Roster slot number within a league (1-based, small).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(pub u32);

impl RosterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RosterId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
