//! Sleeper fantasy platform API access.

pub mod http;
pub mod members;
pub mod types;

pub use http::SleeperClient;
pub use members::{LeagueMembers, NO_OWNER_ID, UNKNOWN_OWNER};
