//! JSON snapshots and digests of [`EncounterState`].
//!
//! The boundary layer stores the JSON between player decisions. Decoding
//! validates the schema version and state invariants, so a tampered or stale
//! snapshot is refused instead of resumed.

use sha2::{Digest, Sha256};

use super::BattleError;
use crate::state::EncounterState;

impl EncounterState {
    /// Encodes the state as compact JSON.
    ///
    /// Decoding the result and encoding it again yields identical bytes.
    pub fn to_json(&self) -> Result<String, BattleError> {
        serde_json::to_string(self).map_err(|err| BattleError::Encoding(err.to_string()))
    }

    /// Rebuilds a state from JSON produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    ///
    /// `BattleError::MalformedSnapshot` if a field is missing or mistyped, the
    /// version differs from [`EncounterState::VERSION`], or an invariant fails.
    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        let state: Self = serde_json::from_str(json).map_err(|err| {
            tracing::warn!(error = %err, "rejected snapshot");
            BattleError::MalformedSnapshot(err.to_string())
        })?;
        state.validate().map_err(|reason| {
            tracing::warn!(%reason, "rejected snapshot");
            BattleError::MalformedSnapshot(reason)
        })?;
        Ok(state)
    }

    /// SHA-256 over the canonical bincode encoding.
    pub fn digest(&self) -> Result<[u8; 32], BattleError> {
        let bytes = bincode::serialize(self).map_err(|err| BattleError::Encoding(err.to_string()))?;
        Ok(Sha256::digest(&bytes).into())
    }
}
