use super::PrerequisiteType;
use crate::env::OracleError;
use crate::error::{BehaviorError, ErrorSeverity};
use crate::state::PrerequisiteId;

/// Configuration errors raised while evaluating prerequisite rules.
///
/// A rule that simply does not hold is `Ok(false)`, never an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PrerequisiteError {
    #[error("prerequisite rule {0} not found")]
    RuleNotFound(PrerequisiteId),

    #[error("unknown prerequisite type {0}")]
    UnknownType(u32),

    #[error("no check registered for prerequisite type {0}")]
    UnregisteredType(PrerequisiteType),

    #[error("prerequisite type {0} is already registered")]
    DuplicateRegistration(PrerequisiteType),

    #[error("prerequisite rule {rule} nests deeper than {limit} levels")]
    DepthExceeded { rule: PrerequisiteId, limit: usize },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BehaviorError for PrerequisiteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RuleNotFound(_) => ErrorSeverity::Validation,
            Self::UnknownType(_)
            | Self::UnregisteredType(_)
            | Self::DuplicateRegistration(_)
            | Self::DepthExceeded { .. } => ErrorSeverity::Fatal,
            Self::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RuleNotFound(_) => "PREREQUISITE_RULE_NOT_FOUND",
            Self::UnknownType(_) => "PREREQUISITE_UNKNOWN_TYPE",
            Self::UnregisteredType(_) => "PREREQUISITE_UNREGISTERED_TYPE",
            Self::DuplicateRegistration(_) => "PREREQUISITE_DUPLICATE_REGISTRATION",
            Self::DepthExceeded { .. } => "PREREQUISITE_DEPTH_EXCEEDED",
            Self::Oracle(e) => e.error_code(),
        }
    }
}
