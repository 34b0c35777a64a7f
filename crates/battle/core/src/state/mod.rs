//! Mutable encounter state.
//!
//! ```text
//! EncounterState
//! ├── phase, turn, log, rng
//! ├── player:   Combatant
//! └── opponent: Option<Combatant>  (with OpponentPayload)
//! ```
mod combatant;
mod encounter;
mod status;

pub use combatant::{ActionBook, BASIC_ACTIONS, Combatant, OpponentPayload};
pub use encounter::{EncounterPhase, EncounterState, Outcome};
pub use status::{
    EffectDuration, Element, Potency, StatusApplication, StatusEffect, StatusEffects, StatusKind,
};
