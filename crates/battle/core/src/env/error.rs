//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing catalog data.
///
/// The engine cannot resolve anything without its catalogs, so missing oracles
/// are fatal. Unknown ids are validation errors on the caller's input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// OpponentOracle is not available in the environment.
    #[error("OpponentOracle not available")]
    OpponentsNotAvailable,

    /// ClassOracle is not available in the environment.
    #[error("ClassOracle not available")]
    ClassesNotAvailable,

    /// ActionOracle is not available in the environment.
    #[error("ActionOracle not available")]
    ActionsNotAvailable,

    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// Class template was not found by ID.
    #[error("class template '{0}' not found")]
    ClassNotFound(String),

    /// Opponent template was not found by ID.
    #[error("opponent template '{0}' not found")]
    OpponentNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            OpponentsNotAvailable | ClassesNotAvailable | ActionsNotAvailable
            | ConfigNotAvailable => ErrorSeverity::Fatal,

            ClassNotFound(_) | OpponentNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            OpponentsNotAvailable => "ORACLE_OPPONENTS_NOT_AVAILABLE",
            ClassesNotAvailable => "ORACLE_CLASSES_NOT_AVAILABLE",
            ActionsNotAvailable => "ORACLE_ACTIONS_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            OpponentNotFound(_) => "ORACLE_OPPONENT_NOT_FOUND",
        }
    }
}
