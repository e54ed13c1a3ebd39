//! Transformations between consecutive data-file schemas.
//!
//! Each function receives the `TrackerEntries` map of the version it is
//! registered under and returns the map in the next version's shape.

use crate::errors::AppResult;
use crate::models::v1;
use crate::models::v2::{SubEntry, TrackerEntry};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Group legacy interval records by activity name.
///
/// Names keep their first-seen order within a day and every legacy record
/// becomes exactly one sub-entry of its group, in the original order.
pub fn aggregate_sub_entries(entries: &Map<String, Value>) -> AppResult<Map<String, Value>> {
    let days = v1::parse_entries(entries)?;
    let mut out = Map::new();

    for (date, legacy) in days {
        let grouped = group_day(legacy);
        out.insert(date, serde_json::to_value(grouped)?);
    }

    Ok(out)
}

fn group_day(legacy: Vec<v1::LegacyEntry>) -> Vec<TrackerEntry> {
    let mut grouped: Vec<TrackerEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in legacy {
        let pos = *index.entry(entry.name.clone()).or_insert_with(|| {
            grouped.push(TrackerEntry::new(entry.name.clone()));
            grouped.len() - 1
        });

        grouped[pos].sub_entries.push(SubEntry {
            start: entry.start,
            end: entry.end,
        });
    }

    grouped
}
