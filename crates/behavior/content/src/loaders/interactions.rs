//! Interaction catalog loader.

use std::path::Path;

use behavior_core::InteractionEntry;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_ron};

/// Interaction catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionCatalog {
    pub interactions: Vec<InteractionEntry>,
}

/// Loader for the interaction catalog.
pub struct InteractionLoader;

impl InteractionLoader {
    /// Load interaction entries from a RON file containing an `InteractionCatalog`.
    pub fn load(path: &Path) -> LoadResult<Vec<InteractionEntry>> {
        let catalog: InteractionCatalog = read_ron(path, "interaction catalog")?;
        ensure_unique_ids(&catalog.interactions, |i| i.id, "interaction")?;
        Ok(catalog.interactions)
    }
}
