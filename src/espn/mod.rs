//! ESPN public endpoints.

pub mod scoreboard;
