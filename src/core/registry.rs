//! Table of one-step migrations, keyed by the version each step consumes.

use super::steps;
use crate::errors::AppResult;
use crate::models::VersionedDocument;
use serde_json::{Map, Value};

pub type Transform = fn(&Map<String, Value>) -> AppResult<Map<String, Value>>;

/// A single migration from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub from: &'static str,
    pub to: &'static str,
    pub description: &'static str,
    pub transform: Transform,
}

impl Step {
    /// Apply the step, returning the reshaped document and its new tag.
    ///
    /// On error the input document is consumed and nothing is returned.
    pub fn apply(&self, mut doc: VersionedDocument) -> AppResult<(VersionedDocument, &'static str)> {
        doc.tracker_entries = (self.transform)(&doc.tracker_entries)?;
        doc.version = self.to.to_string();
        Ok((doc, self.to))
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    steps: Vec<Step>,
}

impl Registry {
    /// Each `from` tag may appear only once; `get` returns the first match.
    pub fn new(steps: Vec<Step>) -> Self {
        debug_assert!(
            steps
                .iter()
                .enumerate()
                .all(|(i, s)| steps[..i].iter().all(|p| p.from != s.from)),
            "duplicate `from` tag in migration registry"
        );
        Self { steps }
    }

    /// Migrations known to this build.
    ///
    /// `v1_0_0`/`v1_0_1` are the tags of the standalone migration script,
    /// `v1`/`v2` the ones the plugin itself serialises.
    pub fn builtin() -> Self {
        Self::new(vec![
            Step {
                from: "v1_0_0",
                to: "v1_0_1",
                description: "group intervals of the same activity into SubEntries",
                transform: steps::aggregate_sub_entries,
            },
            Step {
                from: "v1",
                to: "v2",
                description: "group intervals of the same activity into SubEntries",
                transform: steps::aggregate_sub_entries,
            },
        ])
    }

    pub fn get(&self, version: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.from == version)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when `version` is produced or consumed by any step.
    pub fn knows(&self, version: &str) -> bool {
        self.steps.iter().any(|s| s.from == version || s.to == version)
    }
}
