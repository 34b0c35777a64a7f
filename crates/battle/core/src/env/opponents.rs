//! Opponent template definitions and oracle interface.
//!
//! Templates are immutable catalog rows. The opponent generator scales one of
//! them to the player's level and turns it into a [`Combatant`].
//!
//! [`Combatant`]: crate::state::Combatant

/// Unscaled stat block shared by class and opponent templates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub mp: u32,
    pub strength: u32,
    pub defense: u32,
    pub magic: u32,
    pub magic_defense: u32,
    pub agility: u32,
    pub luck: u32,
}

impl BaseStats {
    /// Applies `f` to every value, including the two pools.
    pub fn map(&self, f: impl Fn(u32) -> u32) -> Self {
        Self {
            hp: f(self.hp),
            mp: f(self.mp),
            strength: f(self.strength),
            defense: f(self.defense),
            magic: f(self.magic),
            magic_defense: f(self.magic_defense),
            agility: f(self.agility),
            luck: f(self.luck),
        }
    }
}

/// Catalog row describing one kind of opponent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentTemplate {
    /// Stable identifier, used by exclusion lists.
    pub id: String,
    /// Display name used in log lines.
    pub name: String,
    pub base_stats: BaseStats,
    /// Per-template difficulty factor applied to every stat.
    pub stat_multiplier: f64,
    /// Signature move used by the AI when hurt.
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_move: Option<String>,
    /// Experience awarded at level 1, before scaling.
    pub exp_value: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    /// Loot table: candidate drops on victory and targets for Steal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Provides opponent templates by definition ID.
pub trait OpponentOracle: Send + Sync {
    /// All templates in catalog order.
    fn templates(&self) -> &[OpponentTemplate];

    /// Looks up a template by ID.
    fn template(&self, id: &str) -> Option<&OpponentTemplate> {
        self.templates().iter().find(|t| t.id == id)
    }
}
