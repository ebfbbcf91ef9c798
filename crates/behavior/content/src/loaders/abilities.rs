//! Ability catalog loader.

use std::path::Path;

use behavior_core::AbilityEntry;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_ron};

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityCatalog {
    pub abilities: Vec<AbilityEntry>,
}

/// Loader for the ability catalog.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load ability entries from a RON file containing an `AbilityCatalog`.
    pub fn load(path: &Path) -> LoadResult<Vec<AbilityEntry>> {
        let catalog: AbilityCatalog = read_ron(path, "ability catalog")?;
        ensure_unique_ids(&catalog.abilities, |a| a.id, "ability")?;
        for ability in &catalog.abilities {
            if ability.id.is_none() {
                anyhow::bail!("Ability id 0 is reserved");
            }
            if ability.max_range.is_nan() || ability.max_range < 0.0 {
                anyhow::bail!("Ability {} has invalid max_range {}", ability.id, ability.max_range);
            }
        }
        Ok(catalog.abilities)
    }
}
