//! Flattened CSV tables produced by the export jobs.
//!
//! Each submodule owns one output file: its row type (a [`Table`]), and the
//! pure functions that turn API payloads into rows. Fetching and file I/O
//! live in `commands`.
//!
//! [`Table`]: crate::core::Table

use serde::{Deserialize, Deserializer};

pub mod drafts;
pub mod last_update;
pub mod leagues;
pub mod matchups;
pub mod players;
pub mod results;
pub mod rosters;
pub mod scores;
pub mod standings;
pub mod transactions;

pub use drafts::DraftRow;
pub use last_update::LastUpdateRow;
pub use leagues::LeagueRow;
pub use matchups::MatchupRow;
pub use players::PlayerRow;
pub use results::WeeklyResultRow;
pub use rosters::RosterPlayerRow;
pub use scores::ScoreRow;
pub use standings::StandingRow;
pub use transactions::TransactionRow;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accepts `true`/`false` in any case as well as `1`/`0`, as spreadsheet
/// tools rewrite booleans.
pub(crate) fn de_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid boolean: {other}"))),
    }
}
