//! Unit tests for error handling

use super::*;
use std::io;

#[tokio::test]
async fn test_http_error_conversion() {
    let client = reqwest::Client::new();
    let result = client
        .get("http://invalid-url-that-does-not-exist.fake")
        .send()
        .await;
    let err = SleeperError::from(result.unwrap_err());

    match err {
        SleeperError::Http(_) => (),
        _ => panic!("Expected Http error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    match SleeperError::from(json_error) {
        SleeperError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    match SleeperError::from(io_error) {
        SleeperError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_csv_error_conversion() {
    let data = "a,b\n1,2,3\n";
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let csv_error = reader.records().next().unwrap().unwrap_err();
    match SleeperError::from(csv_error) {
        SleeperError::Csv(_) => (),
        _ => panic!("Expected Csv error variant"),
    }
}

#[test]
fn test_invalid_header_error_conversion() {
    let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
    match SleeperError::from(header_error) {
        SleeperError::InvalidHeader(_) => (),
        _ => panic!("Expected InvalidHeader error variant"),
    }
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "abc".parse::<u16>().unwrap_err();
    match SleeperError::from(parse_error) {
        SleeperError::InvalidNumber(_) => (),
        _ => panic!("Expected InvalidNumber error variant"),
    }
}

#[test]
fn test_anyhow_error_becomes_storage() {
    let err = SleeperError::from(anyhow::anyhow!("database is locked"));
    match err {
        SleeperError::Storage { message } => assert_eq!(message, "database is locked"),
        _ => panic!("Expected Storage error variant"),
    }
}

#[test]
fn test_error_display_messages() {
    let err = SleeperError::MissingUserId {
        env_var: "SLEEPER_USER_ID".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "User ID not provided and SLEEPER_USER_ID environment variable not set"
    );

    let err = SleeperError::InvalidUserId {
        env_var: "SLEEPER_USER_ID".to_string(),
        value: "mickey".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "SLEEPER_USER_ID is set to \"mickey\", which is not a numeric user ID"
    );

    let err = SleeperError::MissingInput {
        path: PathBuf::from("data/Players.csv"),
    };
    assert_eq!(err.to_string(), "Missing input file: data/Players.csv");

    let err = SleeperError::UnexpectedStatus {
        url: "https://api.sleeper.app/v1/players/nfl".to_string(),
        status: 503,
    };
    assert_eq!(
        err.to_string(),
        "https://api.sleeper.app/v1/players/nfl returned HTTP 503"
    );

    assert_eq!(SleeperError::NoData.to_string(), "Sleeper API returned no data");
}
