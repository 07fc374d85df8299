//! Path registry service
//!
//! Tracks, for every logical output path claimed during one assembly run,
//! the contributor that claimed it first. One registry per run, handed to
//! each packaging task explicitly.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::ContributorId;
use crate::domain::value_objects::LogicalPath;

/// First-writer-wins map of output paths to their owners.
///
/// `register` holds the lock across its check and insert, so two
/// registrations of the same path can never both succeed.
#[derive(Debug, Default)]
pub struct PathRegistry {
    entries: Mutex<BTreeMap<LogicalPath, ContributorId>>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path` for `contributor`.
    ///
    /// Returns `false` and leaves the registry untouched when the path is
    /// already claimed, including by the same contributor.
    pub fn register(&self, contributor: &ContributorId, path: &LogicalPath) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(path) {
            return false;
        }
        entries.insert(path.clone(), contributor.clone());
        true
    }

    pub fn is_registered(&self, path: &LogicalPath) -> bool {
        self.lock().contains_key(path)
    }

    /// Contributor that first claimed `path`.
    pub fn owner(&self, path: &LogicalPath) -> Option<ContributorId> {
        self.lock().get(path).cloned()
    }

    /// Paths claimed by one contributor, sorted.
    pub fn paths_of(&self, contributor: &ContributorId) -> Vec<LogicalPath> {
        self.lock()
            .iter()
            .filter(|(_, owner)| *owner == contributor)
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Every claimed path, sorted.
    pub fn full_structure(&self) -> Vec<LogicalPath> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The only mutation is a single insert, so a poisoned map is still whole.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<LogicalPath, ContributorId>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
