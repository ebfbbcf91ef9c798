//! [`behavior_core::AbilityOracle`] backed by an in-memory map.
use std::collections::HashMap;

use behavior_core::{AbilityEntry, AbilityId, AbilityOracle};

#[derive(Debug, Default)]
pub struct AbilityOracleImpl {
    entries: HashMap<AbilityId, AbilityEntry>,
}

impl AbilityOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = AbilityEntry>) -> Self {
        let mut oracle = Self::new();
        for entry in entries {
            oracle.add(entry);
        }
        oracle
    }

    /// Add an ability entry, replacing any entry with the same id.
    pub fn add(&mut self, entry: AbilityEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AbilityOracle for AbilityOracleImpl {
    fn ability(&self, id: AbilityId) -> Option<AbilityEntry> {
        self.entries.get(&id).copied()
    }
}
