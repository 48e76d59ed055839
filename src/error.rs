//! Error types for the Sleeper fantasy football exporter

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("User ID not provided and {env_var} environment variable not set")]
    MissingUserId { env_var: String },

    #[error("{env_var} is set to {value:?}, which is not a numeric user ID")]
    InvalidUserId { env_var: String, value: String },

    #[error("Missing input file: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("{url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Sleeper API returned no data")]
    NoData,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}

impl From<anyhow::Error> for SleeperError {
    fn from(err: anyhow::Error) -> Self {
        SleeperError::Storage {
            message: err.to_string(),
        }
    }
}
