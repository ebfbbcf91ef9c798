//! Creature catalog loader.

use std::path::Path;

use behavior_core::CreatureEntry;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_ron};

/// Creature catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureEntry>,
}

/// Loader for the creature catalog.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load creature entries from a RON file containing a `CreatureCatalog`.
    pub fn load(path: &Path) -> LoadResult<Vec<CreatureEntry>> {
        let catalog: CreatureCatalog = read_ron(path, "creature catalog")?;
        ensure_unique_ids(&catalog.creatures, |c| c.id, "creature")?;
        Ok(catalog.creatures)
    }
}
