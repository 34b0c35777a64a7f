use crate::formula::FormulaProfile;

/// Rules table and tunable balance parameters for encounters.
///
/// Values default to the shipped balance and can be overridden from
/// `rules.toml` by the content loaders. Missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Which damage/healing model the formula library evaluates.
    pub formula_profile: FormulaProfile,

    /// Experience needed per level.
    pub level_threshold: u32,
    /// Fixed increments applied on every level gained.
    pub level_up: LevelUpIncrements,
    /// Additive opponent scaling per player level above 1.
    pub level_scaling_step: f64,

    /// HP ratio under which an opponent considers its signature move.
    pub signature_hp_ratio: f64,
    /// Probability of using the signature move once triggered.
    pub signature_chance: f64,
    /// Damage multiplier of a signature move over a normal attack.
    pub signature_multiplier: f64,

    /// Defense added by Defend for the next incoming enemy action.
    pub defend_bonus: u32,
    /// Strength gained per Cheer.
    pub cheer_bonus: i32,
    /// Upper bound for the strength modifier granted by Cheer.
    pub cheer_cap: i32,
    /// Turns a Provoke lasts on the opponent.
    pub provoke_turns: u32,
    /// Stat reduction applied by Power Break / Armor Break.
    pub break_amount: i32,

    /// Base flee chance in percent.
    pub flee_base_percent: i32,
    /// Flee percent gained per point of agility over the opponent.
    pub flee_agility_step: i32,
    /// Base steal chance in percent.
    pub steal_base_percent: i32,
    /// Steal percent gained per point of luck over the opponent.
    pub steal_luck_step: i32,
    /// Chance per remaining loot entry to drop on victory.
    pub drop_chance_percent: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of distinct status effects attached to one combatant.
    pub const MAX_STATUS_EFFECTS: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_THRESHOLD: u32 = 100;
    pub const DEFAULT_LEVEL_SCALING_STEP: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            formula_profile: FormulaProfile::Curved,
            level_threshold: Self::DEFAULT_LEVEL_THRESHOLD,
            level_up: LevelUpIncrements::default(),
            level_scaling_step: Self::DEFAULT_LEVEL_SCALING_STEP,
            signature_hp_ratio: 0.3,
            signature_chance: 0.4,
            signature_multiplier: 1.5,
            defend_bonus: 5,
            cheer_bonus: 2,
            cheer_cap: 10,
            provoke_turns: 3,
            break_amount: 5,
            flee_base_percent: 50,
            flee_agility_step: 2,
            steal_base_percent: 50,
            steal_luck_step: 2,
            drop_chance_percent: 50,
        }
    }

    pub fn with_profile(mut self, formula_profile: FormulaProfile) -> Self {
        self.formula_profile = formula_profile;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-level stat growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelUpIncrements {
    pub hp: u32,
    pub mp: u32,
    /// Added to every base attribute.
    pub attribute: u32,
}

impl Default for LevelUpIncrements {
    fn default() -> Self {
        Self {
            hp: 40,
            mp: 5,
            attribute: 1,
        }
    }
}
