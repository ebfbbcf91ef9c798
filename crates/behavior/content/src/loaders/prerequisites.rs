//! Prerequisite rule loader.
//!
//! Rule types and comparison operators stay raw numbers here; the rule engine
//! reports unknown ones when a rule is evaluated.

use std::collections::HashSet;
use std::path::Path;

use behavior_core::{PrerequisiteEntry, PrerequisiteId, PrerequisiteType};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_ron};

/// Prerequisite rule catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrerequisiteCatalog {
    pub prerequisites: Vec<PrerequisiteEntry>,
}

/// Loader for prerequisite rules.
pub struct PrerequisiteLoader;

impl PrerequisiteLoader {
    /// Load rules from a RON file containing a `PrerequisiteCatalog`.
    ///
    /// Rejects duplicate ids and composite checks that reference a rule
    /// missing from the same file.
    pub fn load(path: &Path) -> LoadResult<Vec<PrerequisiteEntry>> {
        let catalog: PrerequisiteCatalog = read_ron(path, "prerequisite catalog")?;
        ensure_unique_ids(&catalog.prerequisites, |p| p.id, "prerequisite")?;

        let known: HashSet<PrerequisiteId> = catalog.prerequisites.iter().map(|p| p.id).collect();
        for entry in &catalog.prerequisites {
            let references = entry
                .checks
                .iter()
                .filter(|c| c.kind == PrerequisiteType::Prerequisite as u32)
                .map(|c| PrerequisiteId(c.object_id));
            for reference in references {
                if !known.contains(&reference) {
                    anyhow::bail!(
                        "Prerequisite {} references unknown rule {}",
                        entry.id,
                        reference
                    );
                }
            }
        }
        Ok(catalog.prerequisites)
    }
}
