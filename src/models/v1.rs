//! Legacy schema: one record per start/end interval.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Start")]
    pub start: Value, // ISO date-time as written by the plugin
    #[serde(rename = "End")]
    pub end: Value, // null while the entry is still running
}

/// Decode one day of legacy entries, reporting the exact failing position.
pub fn parse_day(date: &str, raw: &Value) -> AppResult<Vec<LegacyEntry>> {
    let items = raw.as_array().ok_or_else(|| {
        AppError::MalformedDocument(format!("TrackerEntries[\"{}\"] is not an array", date))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            LegacyEntry::deserialize(item).map_err(|e| {
                AppError::MalformedDocument(format!(
                    "TrackerEntries[\"{}\"][{}]: {}",
                    date, idx, e
                ))
            })
        })
        .collect()
}

/// Decode the whole legacy `TrackerEntries` map, keeping date order.
pub fn parse_entries(raw: &Map<String, Value>) -> AppResult<Vec<(String, Vec<LegacyEntry>)>> {
    raw.iter()
        .map(|(date, day)| -> AppResult<_> { Ok((date.clone(), parse_day(date, day)?)) })
        .collect()
}
