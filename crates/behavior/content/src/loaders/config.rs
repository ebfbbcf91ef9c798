//! Engine configuration loader.

use std::path::Path;

use behavior_core::BehaviorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<BehaviorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<BehaviorConfig> {
        let config: BehaviorConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.pursuit_speed_factor <= 0.0 {
            anyhow::bail!("pursuit_speed_factor must be positive");
        }
        if config.auto_attack_interval_ms == 0 {
            anyhow::bail!("auto_attack_interval_ms must be positive");
        }
        Ok(config)
    }
}
