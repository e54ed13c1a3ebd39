//! Migration driver: chains registry steps until the document's version has
//! no further step.

use super::registry::Registry;
use crate::errors::{AppError, AppResult};
use crate::models::VersionedDocument;
use std::collections::HashSet;

/// One step that was applied during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedStep {
    pub from: String,
    pub to: String,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct MigrationOutcome {
    pub document: VersionedDocument,
    pub applied: Vec<AppliedStep>,
}

impl MigrationOutcome {
    /// Whether the in-memory document differs from what was loaded.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty() || self.document.reconciled
    }
}

/// Bring `document` to the newest version reachable through `registry`.
///
/// A version that is not a key of the registry ends the loop. Revisiting a
/// version, or applying more steps than the registry holds, is reported as
/// `CycleDetected`.
pub fn migrate(document: VersionedDocument, registry: &Registry) -> AppResult<MigrationOutcome> {
    let mut doc = document;
    let mut applied = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut trail = vec![doc.version.clone()];

    while let Some(step) = registry.get(&doc.version) {
        if !visited.insert(doc.version.clone()) || applied.len() >= registry.len() {
            return Err(AppError::CycleDetected {
                version: doc.version.clone(),
                trail,
            });
        }

        log::debug!("applying step {} -> {}", step.from, step.to);
        let (next, tag) = step.apply(doc)?;
        doc = next;

        applied.push(AppliedStep {
            from: step.from.to_string(),
            to: tag.to_string(),
            description: step.description,
        });
        trail.push(tag.to_string());
    }

    log::debug!(
        "migration finished at '{}' after {} step(s)",
        doc.version,
        applied.len()
    );

    Ok(MigrationOutcome {
        document: doc,
        applied,
    })
}
