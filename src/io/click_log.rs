// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Append-only click log.
//!
//! One log file is created per run, named after the start time. Each
//! accepted click appends a single `<index>, <x>, <y>` line. The file is
//! reopened for every record so that earlier lines survive a crash.

use crate::config::Settings;
use crate::models::point::Point;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build the log file path for a run started at `started_at`.
pub fn log_file_path(dir: &Path, started_at: NaiveDateTime, settings: &Settings) -> PathBuf {
    let mut file_name = started_at.format(&settings.file_name_format).to_string();
    if !settings.file_extension.is_empty() {
        file_name.push('.');
        file_name.push_str(&settings.file_extension);
    }
    dir.join(file_name)
}

/// Format a coordinate the way it appears in the log and the table.
///
/// Whole numbers keep a trailing `.0` so values read as floats.
pub fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}

/// Format one log line, including the trailing newline.
pub fn format_record(index: usize, point: &Point) -> String {
    format!(
        "{}, {}, {}\n",
        index,
        format_coordinate(point.x),
        format_coordinate(point.y)
    )
}

/// Handle to the per-run log file. Holds the path only, never the file.
#[derive(Debug, Clone)]
pub struct ClickLog {
    path: PathBuf,
}

impl ClickLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file on first write.
    pub fn append(&self, index: usize, point: &Point) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        file.write_all(format_record(index, point).as_bytes())
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;

        log::debug!("Logged point {} to {}", index, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_log_file_path_uses_timestamp() {
        let path = log_file_path(Path::new("/data"), start_time(), &Settings::default());
        assert_eq!(path, PathBuf::from("/data/2024-03-07_09-05-42.txt"));
    }

    #[test]
    fn test_log_file_path_is_pure() {
        let settings = Settings::default();
        let a = log_file_path(Path::new("/data"), start_time(), &settings);
        let b = log_file_path(Path::new("/data"), start_time(), &settings);
        assert_eq!(a, b);
    }

    #[test]
    fn test_log_file_path_custom_scheme() {
        let settings = Settings {
            file_name_format: "clicks_%H%M".to_string(),
            file_extension: "csv".to_string(),
            ..Settings::default()
        };
        let path = log_file_path(Path::new("/data"), start_time(), &settings);
        assert_eq!(path, PathBuf::from("/data/clicks_0905.csv"));
    }

    #[test]
    fn test_format_record() {
        assert_eq!(format_record(0, &Point::new(10.0, 20.0)), "0, 10.0, 20.0\n");
        assert_eq!(format_record(1, &Point::new(30.5, 5.0)), "1, 30.5, 5.0\n");
        assert_eq!(format_record(2, &Point::new(-0.25, 1e3)), "2, -0.25, 1000.0\n");
    }

    #[test]
    fn test_append_creates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log = ClickLog::new(dir.path().join("clicks.txt"));
        assert!(!log.path().exists());

        log.append(0, &Point::new(10.0, 20.0)).unwrap();
        log.append(1, &Point::new(30.5, 5.0)).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "0, 10.0, 20.0\n1, 30.5, 5.0\n");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clicks.txt");
        std::fs::write(&path, "0, 1.0, 1.0\n").unwrap();

        ClickLog::new(path.clone()).append(0, &Point::new(2.0, 2.0)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "0, 1.0, 1.0\n0, 2.0, 2.0\n");
    }

    #[test]
    fn test_append_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log = ClickLog::new(dir.path().join("missing").join("clicks.txt"));
        let err = log.append(0, &Point::new(1.0, 1.0)).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
