//! Runtime configuration.
//!
//! Values come from a TOML file, environment variables, or both (environment
//! wins). Engine tuning lives in [`behavior_core::BehaviorConfig`] and is
//! loaded with the content, not here.
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Runtime configuration shared by the orchestrator and its components.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Interaction sessions unresolved after this long are dropped.
    /// Zero disables expiry.
    pub session_timeout_ms: u64,
    /// Directory holding behavior content, loaded when the builder is given
    /// neither content nor oracles.
    pub content_dir: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 30_000;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BEHAVIOR_SESSION_TIMEOUT_MS` - Session expiry in milliseconds (default: 30000)
    /// - `BEHAVIOR_CONTENT_DIR` - Content directory (default: bundled data)
    /// - `BEHAVIOR_LOG` - Default log filter directive (default: info)
    /// - `BEHAVIOR_LOG_DIR` - Also write logs to this directory
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(RuntimeError::ConfigParse)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml_str(&content)?.with_env_overrides())
    }

    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(timeout) = read_env::<u64>("BEHAVIOR_SESSION_TIMEOUT_MS") {
            self.session_timeout_ms = timeout;
        }
        if let Some(dir) = read_env::<PathBuf>("BEHAVIOR_CONTENT_DIR") {
            self.content_dir = Some(dir);
        }
        if let Some(filter) = read_env::<String>("BEHAVIOR_LOG") {
            self.logging.filter = filter;
        }
        if let Some(dir) = read_env::<PathBuf>("BEHAVIOR_LOG_DIR") {
            self.logging.directory = Some(dir);
        }
        self
    }

    pub fn session_timeout(&self) -> Option<Duration> {
        (self.session_timeout_ms > 0).then(|| Duration::from_millis(self.session_timeout_ms))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            session_timeout_ms: Self::DEFAULT_SESSION_TIMEOUT_MS,
            content_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Tracing subscriber settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub ansi: bool,
    /// Optional directory for a log file written alongside stderr.
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
            directory: None,
            file_name: "behavior.log".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
