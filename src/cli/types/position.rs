//! Fantasy football position types.

use crate::error::SleeperError;
use std::fmt;
use std::str::FromStr;

/// Positions kept in the player catalog.
///
/// Sleeper's `/players/nfl` dump also lists offensive linemen, defenders and
/// long snappers; only fantasy-relevant positions are exported.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// let qb: Position = "QB".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert!("OL".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    FB,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
        Position::FB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::FB => "FB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = SleeperError;

    /// Exact, case-sensitive match on Sleeper's position codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SleeperError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions_round_trip() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_non_fantasy_positions_rejected() {
        for code in ["OL", "LB", "DB", "LS", "qb", ""] {
            match code.parse::<Position>() {
                Err(SleeperError::InvalidPosition { position }) => assert_eq!(position, code),
                other => panic!("expected InvalidPosition for {code:?}, got {other:?}"),
            }
        }
    }
}
