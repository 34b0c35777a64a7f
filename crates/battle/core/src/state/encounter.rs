//! Authoritative encounter state.
//!
//! Everything the engine needs to resume an encounter lives in
//! [`EncounterState`], including the random source. Nothing is cached outside
//! of it.

use crate::env::PcgRng;
use crate::state::Combatant;

/// How a finished encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Victory,
    Defeat,
    Fled,
}

/// Encounter lifecycle. `Terminated` is absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "state", content = "outcome", rename_all = "snake_case")
)]
pub enum EncounterPhase {
    #[default]
    NotStarted,
    InProgress,
    Terminated(Outcome),
}

/// One encounter between the player and a single opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    /// Snapshot schema version.
    pub version: u16,
    pub phase: EncounterPhase,
    pub player: Combatant,
    /// Absent until the encounter starts.
    pub opponent: Option<Combatant>,
    /// Completed rounds.
    pub turn: u32,
    /// Ordered battle log. Never truncated.
    pub log: Vec<String>,
    pub rng: PcgRng,
}

impl EncounterState {
    pub const VERSION: u16 = 1;

    /// A not-yet-started encounter for `player`, seeded with `seed`.
    pub fn new(player: Combatant, seed: u64) -> Self {
        Self {
            version: Self::VERSION,
            phase: EncounterPhase::NotStarted,
            player,
            opponent: None,
            turn: 0,
            log: Vec::new(),
            rng: PcgRng::seeded(seed),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == EncounterPhase::InProgress
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, EncounterPhase::Terminated(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            EncounterPhase::Terminated(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The player with encounter-scoped fields stripped, ready to persist.
    pub fn persisted_player(&self) -> Combatant {
        let mut player = self.player.clone();
        player.leave_encounter();
        player
    }

    /// Checks the invariants a reconstructed encounter must hold.
    pub fn validate(&self) -> Result<(), String> {
        if self.version != Self::VERSION {
            return Err(format!(
                "unsupported snapshot version {} (expected {})",
                self.version,
                Self::VERSION
            ));
        }
        self.player.validate()?;
        if self.player.is_opponent() {
            return Err("player carries opponent data".into());
        }
        match (&self.phase, &self.opponent) {
            (EncounterPhase::NotStarted, Some(_)) => {
                Err("opponent present before the encounter started".into())
            }
            (EncounterPhase::InProgress | EncounterPhase::Terminated(_), None) => {
                Err("opponent missing from a started encounter".into())
            }
            (_, Some(opponent)) if !opponent.is_opponent() => {
                Err(format!("{} is missing its opponent data", opponent.name))
            }
            (_, Some(opponent)) => opponent.validate(),
            (EncounterPhase::NotStarted, None) => Ok(()),
        }
    }
}
