//! Content factory for loading every behavior catalog from one directory.

use std::path::{Path, PathBuf};

use behavior_core::{
    AbilityEntry, BehaviorConfig, CreatureEntry, InteractionEntry, PrerequisiteEntry,
};

use crate::loaders::{
    AbilityLoader, ConfigLoader, CreatureLoader, InteractionLoader, LoadResult,
    PrerequisiteLoader,
};

/// All static content the engine consumes.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub config: BehaviorConfig,
    pub abilities: Vec<AbilityEntry>,
    pub creatures: Vec<CreatureEntry>,
    pub interactions: Vec<InteractionEntry>,
    pub prerequisites: Vec<PrerequisiteEntry>,
}

/// Content factory that loads behavior content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── behavior.toml
/// ├── abilities.ron
/// ├── creatures.ron
/// ├── interactions.ron
/// └── prerequisites.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "behavior.toml";
    pub const ABILITIES_FILE: &'static str = "abilities.ron";
    pub const CREATURES_FILE: &'static str = "creatures.ron";
    pub const INTERACTIONS_FILE: &'static str = "interactions.ron";
    pub const PREREQUISITES_FILE: &'static str = "prerequisites.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load engine configuration from `behavior.toml`.
    pub fn load_config(&self) -> LoadResult<BehaviorConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<Vec<AbilityEntry>> {
        AbilityLoader::load(&self.data_dir.join(Self::ABILITIES_FILE))
    }

    /// Load the creature catalog from `creatures.ron`.
    pub fn load_creatures(&self) -> LoadResult<Vec<CreatureEntry>> {
        CreatureLoader::load(&self.data_dir.join(Self::CREATURES_FILE))
    }

    /// Load the interaction catalog from `interactions.ron`.
    pub fn load_interactions(&self) -> LoadResult<Vec<InteractionEntry>> {
        InteractionLoader::load(&self.data_dir.join(Self::INTERACTIONS_FILE))
    }

    /// Load prerequisite rules from `prerequisites.ron`.
    pub fn load_prerequisites(&self) -> LoadResult<Vec<PrerequisiteEntry>> {
        PrerequisiteLoader::load(&self.data_dir.join(Self::PREREQUISITES_FILE))
    }

    /// Load every catalog.
    ///
    /// Missing files yield defaults (an empty catalog or the default config);
    /// files that exist but fail to parse are errors.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_optional(Self::CONFIG_FILE, |f| f.load_config())?,
            abilities: self.load_optional(Self::ABILITIES_FILE, |f| f.load_abilities())?,
            creatures: self.load_optional(Self::CREATURES_FILE, |f| f.load_creatures())?,
            interactions: self.load_optional(Self::INTERACTIONS_FILE, |f| f.load_interactions())?,
            prerequisites: self
                .load_optional(Self::PREREQUISITES_FILE, |f| f.load_prerequisites())?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_optional<T: Default>(
        &self,
        file: &str,
        load: impl FnOnce(&Self) -> LoadResult<T>,
    ) -> LoadResult<T> {
        if self.data_dir.join(file).is_file() {
            load(self)
        } else {
            Ok(T::default())
        }
    }
}
