//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`BattleError`, `OracleError`, `ActionFailure`) live
//! next to the code that raises them. This module provides the shared
//! classification so callers can decide how to react without matching on every
//! variant.
//!
//! # Design Principles
//!
//! - **Fatal vs. recoverable**: only structurally invalid input (unknown
//!   encounter phase, malformed snapshot, missing catalogs) is surfaced as a hard
//!   error. Gameplay failures are reported inside the action outcome.
//! - **Stable codes**: every error exposes a static code for logs and tests.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player can pick another action and try again
/// - **Validation**: invalid input, should not be retried unchanged
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: the call cannot proceed with the provided state or catalogs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or an alternative action.
    ///
    /// Examples: not enough MP, failed flee roll
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: action submitted to a finished encounter
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the provided state or environment cannot be used.
    ///
    /// Examples: snapshot missing fields, catalog oracle not provided
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

    /// Returns true if this error indicates an internal bug or unusable input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
