//! Aggregated schema: one record per activity name per day.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubEntry {
    #[serde(rename = "Start")]
    pub start: Value,
    #[serde(rename = "End")]
    pub end: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SubEntries")]
    pub sub_entries: Vec<SubEntry>,
}

impl TrackerEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_entries: Vec::new(),
        }
    }
}
