//! CSV table reading and writing.
//!
//! Every export is a flat CSV with a fixed header. Row types implement
//! [`Table`] so the header is written even when a run produced no rows,
//! which keeps downstream dashboard imports from failing on a missing schema.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Result, SleeperError};

/// A row type that maps to one CSV file in the data directory.
pub trait Table: Serialize + DeserializeOwned {
    /// File name inside the data directory.
    const FILE_NAME: &'static str;
    /// Column names, in serialization order.
    const HEADERS: &'static [&'static str];
}

/// Read every row of `path`. A missing file is an error.
pub fn read_table<T: Table>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(SleeperError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    read_rows(path)
}

/// Read every row of `path`, treating a missing or zero-byte file as empty.
pub fn read_table_or_empty<T: Table>(path: &Path) -> Result<Vec<T>> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => Ok(Vec::new()),
        Ok(_) => read_rows(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn read_rows<T: Table>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Overwrite `path` with the header and `rows`, creating parent directories.
pub fn write_table<T: Table>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Like [`write_table`], but readers never observe a half-written file.
pub fn write_table_atomic<T: Table>(path: &Path, rows: &[T]) -> Result<()> {
    let tmp = temp_sibling(path);
    write_table(&tmp, rows)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Points")]
        points: Option<f64>,
    }

    impl Table for Sample {
        const FILE_NAME: &'static str = "Sample.csv";
        const HEADERS: &'static [&'static str] = &["Name", "Points"];
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(Sample::FILE_NAME);
        let rows = vec![
            Sample {
                name: "Alpha".into(),
                points: Some(12.5),
            },
            Sample {
                name: "Beta".into(),
                points: None,
            },
        ];

        write_table(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Name,Points\nAlpha,12.5\nBeta,\n");

        let back: Vec<Sample> = read_table(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_empty_rows_still_write_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Sample::FILE_NAME);
        write_table::<Sample>(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Points\n");
        assert!(read_table::<Sample>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_error_for_required_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.csv");
        match read_table::<Sample>(&path) {
            Err(SleeperError::MissingInput { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_or_zero_byte_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Sample::FILE_NAME);
        assert!(read_table_or_empty::<Sample>(&path).unwrap().is_empty());

        fs::write(&path, "").unwrap();
        assert!(read_table_or_empty::<Sample>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_fields_are_trimmed_on_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Sample::FILE_NAME);
        fs::write(&path, "Name,Points\n  Gamma , 3 \n").unwrap();
        let rows: Vec<Sample> = read_table(&path).unwrap();
        assert_eq!(rows[0].name, "Gamma");
        assert_eq!(rows[0].points, Some(3.0));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Sample::FILE_NAME);
        write_table_atomic(
            &path,
            &[Sample {
                name: "Delta".into(),
                points: Some(1.0),
            }],
        )
        .unwrap();

        assert!(path.exists());
        assert!(!temp_sibling(&path).exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
