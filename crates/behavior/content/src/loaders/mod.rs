//! Content loaders for reading behavior data from files.
//!
//! Every catalog is a RON struct wrapping a list of entries; ids must be
//! unique within a catalog.

pub mod abilities;
pub mod config;
pub mod creatures;
pub mod factory;
pub mod interactions;
pub mod prerequisites;

pub use abilities::AbilityLoader;
pub use config::ConfigLoader;
pub use creatures::CreatureLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use interactions::InteractionLoader;
pub use prerequisites::PrerequisiteLoader;

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a RON file.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}

/// Fails on the first id that appears twice.
pub(crate) fn ensure_unique_ids<T, K>(
    entries: &[T],
    id: impl Fn(&T) -> K,
    what: &str,
) -> LoadResult<()>
where
    K: Eq + Hash + Display,
{
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        let key = id(entry);
        if seen.contains(&key) {
            anyhow::bail!("Duplicate {} id {}", what, key);
        }
        seen.insert(key);
    }
    Ok(())
}
