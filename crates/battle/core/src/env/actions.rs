//! Action catalog definitions and oracle interface.
//!
//! Abilities, skills and spells are data. The resolver looks them up by name
//! and evaluates them through a handful of effect dispatchers, so adding a new
//! spell tier is a catalog change only.

use crate::action::ActionCategory;
use crate::state::{Element, StatusApplication};
use crate::stats::CoreStatKind;

/// What an ability does. Abilities never cost MP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// Raises one of the caster's stats by the configured amount, up to the cap.
    Cheer { stat: CoreStatKind },
    /// Taunts the opponent, blocking its signature move.
    Provoke,
    /// Tries to take one item from the opponent's loot table.
    Steal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    pub name: String,
    pub effect: AbilityEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// What a skill does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Lowers one of the opponent's stats by the configured break amount.
    Break { stat: CoreStatKind },
    /// Physical attack that rolls a status bundle on hit.
    Strike { effects: Vec<StatusApplication> },
    /// Attempts to leave the encounter.
    Flee,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    pub mp_cost: u32,
    pub effect: SkillEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Spell school. Black spells deal damage, white spells heal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellSchool {
    Black,
    White,
}

/// Who receives a spell's number and its status bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellTarget {
    Opponent,
    Caster,
}

/// One spell, black or white, evaluated by a single dispatcher.
///
/// `power == 0` skips the damage/healing roll and only applies `effects`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub name: String,
    pub school: SpellSchool,
    #[cfg_attr(feature = "serde", serde(default = "default_element"))]
    pub element: Element,
    pub mp_cost: u32,
    pub power: u32,
    pub target: SpellTarget,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<StatusApplication>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

#[cfg(feature = "serde")]
fn default_element() -> Element {
    Element::None
}

/// All action definitions known to the engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCatalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilityDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<SpellDefinition>,
}

/// Provides action definitions by name. Lookups ignore ASCII case.
pub trait ActionOracle: Send + Sync {
    fn catalog(&self) -> &ActionCatalog;

    fn ability(&self, name: &str) -> Option<&AbilityDefinition> {
        self.catalog()
            .abilities
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    fn skill(&self, name: &str) -> Option<&SkillDefinition> {
        self.catalog()
            .skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    fn spell(&self, school: SpellSchool, name: &str) -> Option<&SpellDefinition> {
        self.catalog()
            .spells
            .iter()
            .find(|s| s.school == school && s.name.eq_ignore_ascii_case(name))
    }

    /// MP cost of a named action in a category. Unknown names cost nothing.
    fn mp_cost(&self, category: ActionCategory, name: &str) -> u32 {
        match category {
            ActionCategory::Basic | ActionCategory::Ability => 0,
            ActionCategory::Skill => self.skill(name).map_or(0, |s| s.mp_cost),
            ActionCategory::BlackMagic => self
                .spell(SpellSchool::Black, name)
                .map_or(0, |s| s.mp_cost),
            ActionCategory::WhiteMagic => self
                .spell(SpellSchool::White, name)
                .map_or(0, |s| s.mp_cost),
        }
    }
}
