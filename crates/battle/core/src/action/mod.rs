//! Action requests, outcomes and the resolver.
//!
//! A request is `(category, name)`. The resolver turns it into a planned action
//! by looking it up in the combatant's [`ActionBook`] and the catalog, checks
//! the MP gate, and executes it against the opponent.
//!
//! ```text
//! ActionRequest ──► plan ──► sleep-class check ──► MP gate ──► execute ──► ActionOutcome
//!                    │
//!                    └─ unknown / unlearned ──► basic attack (logged)
//! ```
//!
//! [`ActionBook`]: crate::state::ActionBook

pub mod available;
mod ability;
mod basic;
mod error;
mod resolver;
mod skill;
mod spell;

pub use available::available_actions;
pub use error::ActionFailure;
pub use resolver::{resolve_opponent_action, resolve_player_action};

/// Top-level action category.
///
/// Parsing accepts the wire spelling (`blackMagic`) as well as snake case and
/// short aliases, ignoring ASCII case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(ascii_case_insensitive)]
pub enum ActionCategory {
    #[strum(to_string = "basic")]
    Basic,
    #[strum(to_string = "ability", serialize = "abilities")]
    Ability,
    #[strum(to_string = "skill", serialize = "skills")]
    Skill,
    #[strum(to_string = "blackMagic", serialize = "black_magic", serialize = "black")]
    BlackMagic,
    #[strum(to_string = "whiteMagic", serialize = "white_magic", serialize = "white")]
    WhiteMagic,
}

/// One player decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRequest {
    pub category: ActionCategory,
    pub name: String,
}

impl ActionRequest {
    pub fn new(category: ActionCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    pub fn attack() -> Self {
        Self::new(ActionCategory::Basic, "attack")
    }

    pub fn defend() -> Self {
        Self::new(ActionCategory::Basic, "defend")
    }

    /// Builds a request from boundary strings.
    ///
    /// An unknown category keeps the whole input as a basic action name, which
    /// the resolver then reports and replaces with a basic attack.
    pub fn parse(category: &str, name: &str) -> Self {
        match category.parse::<ActionCategory>() {
            Ok(category) => Self::new(category, name),
            Err(_) => {
                tracing::warn!(category, name, "unknown action category");
                Self::new(ActionCategory::Basic, format!("{category} {name}"))
            }
        }
    }
}

/// Result of resolving one action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// HP removed from the other side (or the recipient of a spell).
    pub damage: u32,
    /// HP restored.
    pub healing: u32,
    pub critical: bool,
    pub missed: bool,
    pub success: bool,
    pub failure: Option<ActionFailure>,
    /// Whether the attempt used up the actor's turn.
    pub turn_spent: bool,
    /// Set by a successful flee.
    pub ended_encounter: bool,
    pub lines: Vec<String>,
}

impl ActionOutcome {
    fn new() -> Self {
        Self {
            damage: 0,
            healing: 0,
            critical: false,
            missed: false,
            success: true,
            failure: None,
            turn_spent: true,
            ended_encounter: false,
            lines: Vec::new(),
        }
    }

    fn fail(&mut self, failure: ActionFailure, turn_spent: bool) {
        self.success = false;
        self.turn_spent = turn_spent;
        self.failure = Some(failure);
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}
