//! Oracle access errors.

use crate::error::{BehaviorError, ErrorSeverity};

/// Errors that occur when an oracle required by an operation is absent.
///
/// The engine cannot interpret any static data without its oracle, so every
/// variant is fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("AbilityOracle not available")]
    AbilitiesNotAvailable,

    #[error("CreatureOracle not available")]
    CreaturesNotAvailable,

    #[error("InteractionOracle not available")]
    InteractionsNotAvailable,

    #[error("PrerequisiteOracle not available")]
    PrerequisitesNotAvailable,

    #[error("AccountOracle not available")]
    AccountsNotAvailable,
}

impl BehaviorError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            AbilitiesNotAvailable => "ORACLE_ABILITIES_NOT_AVAILABLE",
            CreaturesNotAvailable => "ORACLE_CREATURES_NOT_AVAILABLE",
            InteractionsNotAvailable => "ORACLE_INTERACTIONS_NOT_AVAILABLE",
            PrerequisitesNotAvailable => "ORACLE_PREREQUISITES_NOT_AVAILABLE",
            AccountsNotAvailable => "ORACLE_ACCOUNTS_NOT_AVAILABLE",
        }
    }
}
