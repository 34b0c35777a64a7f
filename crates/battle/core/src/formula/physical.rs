//! Physical damage.

use super::critical::{CRITICAL_MULTIPLIER, physical_critical_percent};
use super::{DamageRoll, at_least_one};
use crate::env::RngSource;
use crate::stats::StatsSnapshot;

/// Rolls a physical hit from `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// base   = strength * 0.8 + level * 0.5
/// damage = base * U[1.0, 1.25) * (1.5 if critical)
///        + level * 0.1
///        - target_defense * 0.875
/// result = max(1, trunc(damage))
/// ```
///
/// Draws the variance first, then the critical roll.
pub fn physical_damage(
    attacker: &StatsSnapshot,
    defender: &StatsSnapshot,
    rng: &mut dyn RngSource,
) -> DamageRoll {
    let base = f64::from(attacker.strength) * 0.8 + f64::from(attacker.level) * 0.5;
    let mut damage = base * rng.uniform(1.0, 1.25);

    let critical = rng.percent(physical_critical_percent(attacker.luck));
    if critical {
        damage *= CRITICAL_MULTIPLIER;
    }

    damage += f64::from(attacker.level) * 0.1;
    damage -= f64::from(defender.defense) * 0.875;

    DamageRoll {
        amount: at_least_one(damage),
        critical,
    }
}

/// Signature move: a normal physical hit scaled by `multiplier`.
pub fn signature_damage(
    attacker: &StatsSnapshot,
    defender: &StatsSnapshot,
    multiplier: f64,
    rng: &mut dyn RngSource,
) -> DamageRoll {
    let roll = physical_damage(attacker, defender, rng);
    DamageRoll {
        amount: at_least_one(f64::from(roll.amount) * multiplier),
        critical: roll.critical,
    }
}
