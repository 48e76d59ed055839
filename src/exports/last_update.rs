//! Modification times of the exported tables, for dashboard freshness checks.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    core::{clock::format_eastern, Table},
    error::Result,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastUpdateRow {
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "LastModifiedET")]
    pub last_modified_et: String,
    #[serde(rename = "Size_KB")]
    pub size_kb: f64,
}

impl Table for LastUpdateRow {
    const FILE_NAME: &'static str = "LastUpdate.csv";
    const HEADERS: &'static [&'static str] = &["FileName", "LastModifiedET", "Size_KB"];
}

fn size_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 10.0).round() / 10.0
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Describe every CSV directly inside `dir`, except the tracker's own output.
pub fn scan_data_dir(dir: &Path) -> Result<Vec<LastUpdateRow>> {
    let mut rows = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_csv(&path) || file_name.eq_ignore_ascii_case(LastUpdateRow::FILE_NAME) {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => continue,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        let modified = match meta.modified() {
            Ok(t) => t,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "no modification time");
                continue;
            }
        };

        rows.push(LastUpdateRow {
            file_name,
            last_modified_et: format_eastern(DateTime::<Utc>::from(modified)),
            size_kb: size_kb(meta.len()),
        });
    }
    rows.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_size_rounding() {
        assert_eq!(size_kb(0), 0.0);
        assert_eq!(size_kb(1024), 1.0);
        assert_eq!(size_kb(1536), 1.5);
        assert_eq!(size_kb(1100), 1.1);
    }

    #[test]
    fn test_scan_lists_csvs_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Scores.csv"), vec![b'x'; 2048]).unwrap();
        fs::write(dir.path().join("Players.CSV"), "a,b\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        fs::write(dir.path().join("LastUpdate.csv"), "old").unwrap();
        fs::create_dir(dir.path().join("archive.csv")).unwrap();

        let rows = scan_data_dir(dir.path()).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["Players.CSV", "Scores.csv"]);
        assert_eq!(rows[1].size_kb, 2.0);
        assert!(rows[0].last_modified_et.ends_with("EST") || rows[0].last_modified_et.ends_with("EDT"));
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(scan_data_dir(&dir.path().join("nope")).is_err());
    }
}
