//! Versioned envelope around the plugin data file.
//!
//! Only `Version` and `TrackerEntries` are interpreted here. The shape of
//! `TrackerEntries` depends on the version and is checked by the migration
//! step that consumes it (see `models::v1` / `models::v2`). Any other
//! top-level key is carried through untouched.

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Key written by an older migration script instead of `Version`.
pub const MISSPELLED_VERSION_KEY: &str = "Verion";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionedDocument {
    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "TrackerEntries")]
    pub tracker_entries: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Top-level keys in the order they were read.
    #[serde(skip)]
    key_order: Vec<String>,

    /// Set when loading had to repair the document (stray `Verion` key).
    #[serde(skip)]
    pub reconciled: bool,
}

impl VersionedDocument {
    /// Parse a document from raw file contents.
    ///
    /// Syntax errors surface as `InvalidJson`; valid JSON without the
    /// envelope fields surfaces as `MalformedDocument`.
    pub fn parse(contents: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> AppResult<Self> {
        if !value.is_object() {
            return Err(AppError::MalformedDocument(
                "top-level value is not a JSON object".into(),
            ));
        }

        let key_order: Vec<String> = value
            .as_object()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();

        let mut doc: VersionedDocument = serde_json::from_value(value)
            .map_err(|e| AppError::MalformedDocument(e.to_string()))?;

        doc.key_order = key_order;
        doc.reconcile_version_field()?;
        Ok(doc)
    }

    /// Files migrated by the older script carry the new version under
    /// `Verion` while `Version` still holds the old tag. The misspelled key
    /// was written last, so it wins.
    fn reconcile_version_field(&mut self) -> AppResult<()> {
        let Some(stray) = self.extra.shift_remove(MISSPELLED_VERSION_KEY) else {
            return Ok(());
        };

        let Value::String(tag) = stray else {
            return Err(AppError::MalformedDocument(format!(
                "`{}` is not a string",
                MISSPELLED_VERSION_KEY
            )));
        };

        log::debug!(
            "reconciling version field: '{}' -> '{}' (from `{}`)",
            self.version,
            tag,
            MISSPELLED_VERSION_KEY
        );
        self.version = tag;
        self.reconciled = true;
        Ok(())
    }

    /// All top-level fields, keys read from disk first in their original
    /// order, then anything new.
    fn ordered_fields(&self) -> Map<String, Value> {
        let mut rest = Map::new();
        rest.insert("Version".into(), Value::String(self.version.clone()));
        rest.insert(
            "TrackerEntries".into(),
            Value::Object(self.tracker_entries.clone()),
        );
        rest.extend(self.extra.clone());

        let mut ordered = Map::new();
        for key in &self.key_order {
            if let Some(v) = rest.shift_remove(key) {
                ordered.insert(key.clone(), v);
            }
        }
        ordered.extend(rest);
        ordered
    }

    pub fn to_json(&self, pretty: bool) -> AppResult<String> {
        let fields = self.ordered_fields();
        let out = if pretty {
            serde_json::to_string_pretty(&fields)?
        } else {
            serde_json::to_string(&fields)?
        };
        Ok(out)
    }
}
