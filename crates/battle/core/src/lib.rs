//! Deterministic turn-based encounter rules.
//!
//! `battle-core` resolves one player-versus-opponent encounter at a time:
//! action resolution, damage and healing formulas, status effects, opponent
//! generation and AI, progression and snapshots. Every round flows through
//! [`engine::BattleEngine`], and all random draws come from the seeded
//! generator stored in [`EncounterState`], so a snapshot plus a decision
//! always produces the same next snapshot.
//!
//! Static content (classes, opponents, actions, rules) is injected through the
//! oracle traits in [`env`]; `battle-content` provides file-backed loaders.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod formula;
pub mod opponent;
pub mod progression;
pub mod state;
pub mod stats;
pub mod status;

pub use action::{
    ActionCategory, ActionFailure, ActionOutcome, ActionRequest, available_actions,
    resolve_opponent_action, resolve_player_action,
};
pub use config::{BattleConfig, LevelUpIncrements};
pub use engine::{BattleEngine, BattleError, RoundReport, start_encounter, submit_action};
pub use env::{
    AbilityDefinition, AbilityEffect, ActionCatalog, ActionOracle, BaseStats, BattleEnv,
    CatalogBundle, ClassOracle, ClassTemplate, ConfigOracle, Env, OpponentOracle,
    OpponentTemplate, OracleError, PcgRng, RngSource, ScriptedRng, SkillDefinition, SkillEffect,
    SpellDefinition, SpellSchool, SpellTarget, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use formula::{DamageRoll, FormulaProfile};
pub use state::{
    ActionBook, Combatant, EffectDuration, EncounterPhase, EncounterState, Element,
    OpponentPayload, Potency, StatusApplication, StatusEffect, StatusEffects, StatusKind, Outcome,
};
pub use stats::{CoreStatKind, CoreStats, ResourceMeter, StatModifiers, StatsSnapshot};
