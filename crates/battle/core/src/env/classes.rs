//! Class template definitions and oracle interface.

use super::opponents::BaseStats;
use crate::state::{ActionBook, Combatant};
use crate::stats::{CoreStats, ResourceMeter};

/// Catalog row describing a playable class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    /// Catalog key (e.g. "warrior").
    pub id: String,
    /// Display name, becomes the combatant's name.
    pub name: String,
    pub base_stats: BaseStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub black_magic: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub white_magic: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ClassTemplate {
    /// Creates a fresh level-1 player from this template with full pools.
    pub fn to_combatant(&self) -> Combatant {
        let stats = &self.base_stats;
        let mut combatant = Combatant::new(
            self.name.clone(),
            ResourceMeter::full(stats.hp),
            ResourceMeter::full(stats.mp),
            CoreStats::new(
                stats.strength,
                stats.defense,
                stats.magic,
                stats.magic_defense,
                stats.agility,
                stats.luck,
            ),
        );
        combatant.actions = ActionBook {
            abilities: self.abilities.clone(),
            skills: self.skills.clone(),
            black_magic: self.black_magic.clone(),
            white_magic: self.white_magic.clone(),
        };
        combatant
    }
}

/// Provides playable class templates.
pub trait ClassOracle: Send + Sync {
    fn classes(&self) -> &[ClassTemplate];

    fn class(&self, id: &str) -> Option<&ClassTemplate> {
        self.classes().iter().find(|c| c.id == id)
    }
}
