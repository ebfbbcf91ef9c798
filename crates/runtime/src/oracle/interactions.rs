use std::collections::HashMap;

use behavior_core::{InteractionEntry, InteractionId, InteractionOracle};

/// Interaction data entries keyed by id.
#[derive(Debug, Default)]
pub struct InteractionOracleImpl {
    entries: HashMap<InteractionId, InteractionEntry>,
}

impl InteractionOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = InteractionEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn add(&mut self, entry: InteractionEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InteractionOracle for InteractionOracleImpl {
    fn interaction(&self, id: InteractionId) -> Option<InteractionEntry> {
        self.entries.get(&id).cloned()
    }
}
