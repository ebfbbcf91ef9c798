use crate::env::OracleError;
use crate::error::{BehaviorError, ErrorSeverity};
use crate::state::AbilityId;

/// Errors raised while ticking an AI controller.
///
/// Both variants mean the static data the controller depends on is unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("ability entry {0} not found")]
    MissingAbilityEntry(AbilityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BehaviorError for AiError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingAbilityEntry(_) => ErrorSeverity::Fatal,
            Self::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAbilityEntry(_) => "AI_MISSING_ABILITY_ENTRY",
            Self::Oracle(e) => e.error_code(),
        }
    }
}
