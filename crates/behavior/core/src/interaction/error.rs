use crate::env::OracleError;
use crate::error::{BehaviorError, ErrorSeverity};
use crate::state::CreatureId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    /// The activation target's creature entry is needed to interpret the chain.
    #[error("creature entry {0} not found")]
    MissingCreatureEntry(CreatureId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BehaviorError for InteractionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCreatureEntry(_) => ErrorSeverity::Fatal,
            Self::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCreatureEntry(_) => "INTERACTION_MISSING_CREATURE_ENTRY",
            Self::Oracle(e) => e.error_code(),
        }
    }
}
