//! Damage and healing formulas.
//!
//! Every function here is pure: it reads [`StatsSnapshot`]s, draws from the
//! supplied [`RngSource`] and returns a number. Applying the number to a
//! combatant is the action resolver's job.
//!
//! Two profiles exist. `Curved` is the canonical one. `Linear` is kept for
//! parity with older balance data and is selected through
//! [`BattleConfig::formula_profile`](crate::config::BattleConfig).
//!
//! [`StatsSnapshot`]: crate::stats::StatsSnapshot
//! [`RngSource`]: crate::env::RngSource

pub mod critical;
pub mod healing;
pub mod magic;
pub mod physical;

pub use critical::{CRITICAL_MULTIPLIER, magic_critical_percent, physical_critical_percent};
pub use healing::healing;
pub use magic::magic_damage;
pub use physical::{physical_damage, signature_damage};

/// Upper bound for any single damage number.
pub const DAMAGE_CAP: f64 = 99_999.0;

/// Which set of magic/healing formulas to evaluate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum FormulaProfile {
    /// Final Fantasy style curves.
    #[default]
    Curved,
    /// Linear stat scaling.
    Linear,
}

/// A rolled damage number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub critical: bool,
}

/// Truncates toward zero and floors at 1.
pub(crate) fn at_least_one(value: f64) -> u32 {
    if value < 1.0 { 1 } else { value as u32 }
}
