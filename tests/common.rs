#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, isolated from the user's config and never pausing.
pub fn ttm(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("timetracker-migrate");
    cmd.arg("--no-pause")
        .arg("--config")
        .arg(dir.join("missing.conf"));
    cmd
}

/// Create a temp dir with `data.json` holding `contents`.
pub fn setup_data_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    fs::write(&path, contents).expect("write data file");
    (dir, path)
}

/// Legacy document used by most tests: two activities on one day, one on another.
pub fn legacy_document(version: &str) -> Value {
    json!({
        "Version": version,
        "TrackerEntries": {
            "2024-05-01": [
                { "Name": "A", "Start": "2024-05-01T09:00:00", "End": "2024-05-01T10:00:00" },
                { "Name": "B", "Start": "2024-05-01T10:00:00", "End": "2024-05-01T11:00:00" },
                { "Name": "A", "Start": "2024-05-01T11:00:00", "End": null }
            ],
            "2024-05-02": [
                { "Name": "C", "Start": "2024-05-02T08:00:00", "End": "2024-05-02T08:30:00" }
            ]
        }
    })
}

pub fn entries_of(value: &Value) -> Map<String, Value> {
    value["TrackerEntries"]
        .as_object()
        .expect("TrackerEntries object")
        .clone()
}

/// Total number of `{Start, End}` pairs across all days of an aggregated map.
pub fn count_sub_entries(entries: &Map<String, Value>) -> usize {
    entries
        .values()
        .flat_map(|day| day.as_array().expect("day array"))
        .map(|e| e["SubEntries"].as_array().expect("SubEntries").len())
        .sum()
}

/// Total number of records across all days of a legacy map.
pub fn count_legacy_entries(entries: &Map<String, Value>) -> usize {
    entries
        .values()
        .map(|day| day.as_array().expect("day array").len())
        .sum()
}
