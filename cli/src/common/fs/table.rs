//! # Leadbox CSV Tables
//!
//! File: cli/src/common/fs/table.rs
//!
//! ## Overview
//!
//! Whole-file reads and rewrites of a CSV table whose first row names the
//! columns. Rows are mapped to and from serde types by header name, so a
//! struct's `#[serde(rename_all = "camelCase")]` field names are the column
//! names.
//!
//! Reading never fails: a missing file is an empty table, and a file that
//! cannot be opened or decoded is logged and also treated as empty. Writing
//! always emits the given header row first, even for an empty table, and
//! replaces the file's previous contents.
//!
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Loads every row of the table at `path`.
pub fn read_table<R: DeserializeOwned>(path: &Path) -> Vec<R> {
    if !path.exists() {
        debug!("Table {} does not exist yet; treating it as empty.", path.display());
        return Vec::new();
    }
    match try_read_table(path) {
        Ok(rows) => {
            debug!("Read {} rows from {}", rows.len(), path.display());
            rows
        }
        Err(e) => {
            warn!(
                "Could not read table {} ({}); treating it as empty.",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

fn try_read_table<R: DeserializeOwned>(path: &Path) -> csv::Result<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    reader.deserialize().collect()
}

/// Replaces the table at `path` with `headers` followed by `rows`.
///
/// The column order of each serialized row must match `headers`.
pub fn write_table<R: Serialize>(path: &Path, headers: &[&str], rows: &[R]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        id: u64,
        display_name: String,
        note: Option<String>,
    }

    const HEADERS: &[&str] = &["id", "displayName", "note"];

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let rows: Vec<Row> = read_table(&dir.path().join("absent.csv"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        let rows = vec![
            Row {
                id: 1,
                display_name: "Ada, Countess".into(),
                note: None,
            },
            Row {
                id: 2,
                display_name: "Grace".into(),
                note: Some("line one\nline two".into()),
            },
        ];

        write_table(&path, HEADERS, &rows).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("id,displayName,note\n"));
        let back: Vec<Row> = read_table(&path);
        assert_eq!(back, rows);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_table::<Row>(&path, HEADERS, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,displayName,note\n");
        assert!(read_table::<Row>(&path).is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.csv");
        fs::write(&path, "id,displayName,note\nnot-a-number,Ada,\n").unwrap();
        assert!(read_table::<Row>(&path).is_empty());

        fs::write(&path, [0xff, 0xfe, 0x00, 0x13]).unwrap();
        assert!(read_table::<Row>(&path).is_empty());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("rows.csv");
        assert!(write_table::<Row>(&path, HEADERS, &[]).is_err());
    }
}
