//! Errors surfaced by the battle engine.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Hard failures of an engine call. None of them mutate the state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// Action submitted while the encounter is not in progress.
    #[error("no active encounter")]
    NoActiveEncounter,

    /// `start` called on an encounter that already started.
    #[error("encounter already started")]
    AlreadyStarted,

    /// Snapshot is missing fields, has the wrong version or breaks an invariant.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// Snapshot could not be encoded.
    #[error("snapshot encoding failed: {0}")]
    Encoding(String),

    /// Every opponent template was excluded or the catalog is empty.
    #[error("no eligible opponent template")]
    NoEligibleOpponent,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActiveEncounter | Self::AlreadyStarted => ErrorSeverity::Validation,
            Self::MalformedSnapshot(_) | Self::NoEligibleOpponent => ErrorSeverity::Fatal,
            Self::Encoding(_) => ErrorSeverity::Internal,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveEncounter => "BATTLE_NO_ACTIVE_ENCOUNTER",
            Self::AlreadyStarted => "BATTLE_ALREADY_STARTED",
            Self::MalformedSnapshot(_) => "BATTLE_MALFORMED_SNAPSHOT",
            Self::Encoding(_) => "BATTLE_ENCODING",
            Self::NoEligibleOpponent => "BATTLE_NO_ELIGIBLE_OPPONENT",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
