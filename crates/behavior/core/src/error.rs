//! Common error infrastructure for behavior-core.
//!
//! Domain-specific errors (e.g., `AiError`, `PrerequisiteError`) are defined in
//! their respective modules alongside the components that raise them. This
//! module provides the shared classification used to decide how a caller
//! reacts to a failure.
//!
//! # Taxonomy
//!
//! - **Fatal**: static data is malformed (a required ability or creature entry
//!   is missing, an unregistered rule type is referenced). Not retried.
//! - **Validation**: a caller referenced something that does not exist.
//! - **Recoverable**: policy outcomes are never errors; they are logged and a
//!   documented default is returned instead. The variant exists for callers
//!   that wrap this taxonomy.
//!
//! Expected misses (empty threat table, target out of range, timer not yet
//! elapsed) are ordinary control flow and never surface as errors.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition that may succeed on retry.
    Recoverable,

    /// Invalid input that should not be retried without changes.
    ///
    /// Examples: unknown rule id requested by gameplay code
    Validation,

    /// Unexpected state inconsistency that indicates a bug.
    Internal,

    /// Configuration or static data is unusable; the operation is aborted.
    ///
    /// Examples: missing auto-attack ability entry, missing oracle
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates broken configuration or a bug.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all behavior-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable, upper-snake-case code from `error_code`
pub trait BehaviorError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
