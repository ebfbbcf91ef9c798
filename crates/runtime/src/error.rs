//! Unified error type surfaced by the runtime.
//!
//! Wraps failures from the behavior components, content loading and logging
//! setup so hosts can bubble them up with consistent context.
use std::path::PathBuf;

use behavior_core::{
    AiError, BehaviorError, CreatureId, EntityId, ErrorSeverity, InteractionError,
    InteractionId, OracleError, PrerequisiteError,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires content or oracles to be configured before building")]
    MissingOracles,

    #[error("failed to load behavior content from {path}")]
    Content {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("failed to read runtime config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse runtime config")]
    ConfigParse(#[source] toml::de::Error),

    #[error("invalid log filter directive")]
    LogFilter(#[source] tracing_subscriber::filter::ParseError),

    #[error("failed to create log directory {path}")]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("global tracing subscriber already installed")]
    Subscriber(#[source] tracing_subscriber::util::TryInitError),

    #[error("unit {0} is not managed by the runtime")]
    UnknownUnit(EntityId),

    #[error("unit {0} is already spawned")]
    DuplicateUnit(EntityId),

    #[error("creature entry {0} not found")]
    MissingCreatureEntry(CreatureId),

    #[error("interaction entry {0} not found")]
    UnknownInteraction(InteractionId),

    #[error("player {0} has no open interaction session")]
    NoSession(EntityId),

    #[error("AI update failed for unit {unit}")]
    Ai {
        unit: EntityId,
        #[source]
        source: AiError,
    },

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Prerequisite(#[from] PrerequisiteError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BehaviorError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownUnit(_)
            | Self::DuplicateUnit(_)
            | Self::UnknownInteraction(_)
            | Self::NoSession(_) => ErrorSeverity::Validation,
            Self::Ai { source, .. } => source.severity(),
            Self::Interaction(e) => e.severity(),
            Self::Prerequisite(e) => e.severity(),
            Self::Oracle(e) => e.severity(),
            Self::Subscriber(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::Content { .. } => "RUNTIME_CONTENT",
            Self::ConfigIo { .. } => "RUNTIME_CONFIG_IO",
            Self::ConfigParse(_) => "RUNTIME_CONFIG_PARSE",
            Self::LogFilter(_) => "RUNTIME_LOG_FILTER",
            Self::LogDirectory { .. } => "RUNTIME_LOG_DIRECTORY",
            Self::Subscriber(_) => "RUNTIME_SUBSCRIBER",
            Self::UnknownUnit(_) => "RUNTIME_UNKNOWN_UNIT",
            Self::DuplicateUnit(_) => "RUNTIME_DUPLICATE_UNIT",
            Self::MissingCreatureEntry(_) => "RUNTIME_MISSING_CREATURE_ENTRY",
            Self::UnknownInteraction(_) => "RUNTIME_UNKNOWN_INTERACTION",
            Self::NoSession(_) => "RUNTIME_NO_SESSION",
            Self::Ai { source, .. } => source.error_code(),
            Self::Interaction(e) => e.error_code(),
            Self::Prerequisite(e) => e.error_code(),
            Self::Oracle(e) => e.error_code(),
        }
    }
}
