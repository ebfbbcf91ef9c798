//! [`behavior_core::CreatureOracle`] backed by an in-memory map.
use std::collections::HashMap;

use behavior_core::{CreatureEntry, CreatureId, CreatureOracle};

#[derive(Debug, Default)]
pub struct CreatureOracleImpl {
    entries: HashMap<CreatureId, CreatureEntry>,
}

impl CreatureOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CreatureEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn add(&mut self, entry: CreatureEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CreatureOracle for CreatureOracleImpl {
    fn creature(&self, id: CreatureId) -> Option<CreatureEntry> {
        self.entries.get(&id).cloned()
    }
}
