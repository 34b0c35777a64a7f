//! Healing.

use super::FormulaProfile;
use crate::env::RngSource;
use crate::stats::StatsSnapshot;

/// Rolls the HP restored by a healing spell of `power`.
///
/// # Formula
///
/// ```text
/// Curved: raw = power * (magic + power) / 2
/// Linear: raw = power + (magic² / 6 + power) + 4
/// result = min(floor(raw * U[0.8, 1.2)), missing_hp)
/// ```
pub fn healing(
    profile: FormulaProfile,
    caster: &StatsSnapshot,
    power: u32,
    missing_hp: u32,
    rng: &mut dyn RngSource,
) -> u32 {
    let magic = f64::from(caster.magic);
    let power = f64::from(power);
    let raw = match profile {
        FormulaProfile::Curved => power * (magic + power) / 2.0,
        FormulaProfile::Linear => power + (magic * magic / 6.0 + power) + 4.0,
    };
    let rolled = (raw * rng.uniform(0.8, 1.2)).floor();
    (rolled.max(0.0) as u32).min(missing_hp)
}
