//! Non-fatal action failures.

use crate::error::{ErrorSeverity, GameError};
use crate::state::StatusKind;

/// Why an action did not take effect.
///
/// These never abort the call; they are reported inside the
/// [`ActionOutcome`](super::ActionOutcome) alongside a log line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionFailure {
    /// Not enough MP. Nothing was spent.
    #[error("not enough MP for {action}: need {required}, have {available}")]
    InsufficientResource {
        action: String,
        required: u32,
        available: u32,
    },

    /// A sleep-class effect suppressed the attempt.
    #[error("cannot act due to {0}")]
    Incapacitated(StatusKind),

    /// The flee roll failed. MP was still spent.
    #[error("could not escape")]
    FleeFailed,
}

impl GameError for ActionFailure {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientResource { .. } => "ACTION_INSUFFICIENT_RESOURCE",
            Self::Incapacitated(_) => "ACTION_INCAPACITATED",
            Self::FleeFailed => "ACTION_FLEE_FAILED",
        }
    }
}
