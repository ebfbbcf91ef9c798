use std::collections::HashMap;

use behavior_core::{PrerequisiteEntry, PrerequisiteId, PrerequisiteOracle};

/// Prerequisite rules keyed by id.
#[derive(Debug, Default)]
pub struct PrerequisiteOracleImpl {
    entries: HashMap<PrerequisiteId, PrerequisiteEntry>,
}

impl PrerequisiteOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = PrerequisiteEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn add(&mut self, entry: PrerequisiteEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PrerequisiteOracle for PrerequisiteOracleImpl {
    fn prerequisite(&self, id: PrerequisiteId) -> Option<PrerequisiteEntry> {
        self.entries.get(&id).cloned()
    }
}
