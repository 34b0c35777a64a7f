//! Magical damage.

use super::critical::{CRITICAL_MULTIPLIER, magic_critical_percent};
use super::{DAMAGE_CAP, DamageRoll, FormulaProfile, at_least_one};
use crate::env::RngSource;
use crate::stats::StatsSnapshot;

/// Rolls spell damage of `power` from `caster` against `target`.
///
/// # Formula (Curved)
///
/// ```text
/// raw    = min(power * (magic² / 6 + power) + 4, 99999)
/// mdef   = (target_mdef - 280.4)² / 110 + 16
/// base   = raw * mdef / 730
/// damage = base * (730 - (mdef * 51 - target_mdef² / 11) / 10) / 730
///        * (1.5 if critical)
/// result = clamp(trunc(damage), 0, 99999)
/// ```
///
/// The curve is not monotonic and yields 0 against low magic defense.
///
/// # Formula (Linear)
///
/// ```text
/// damage = (magic * 0.8 + power * 0.5) * U[1.0, 1.25) * (1.5 if critical)
///        - target_mdef * 0.875
/// result = max(1, trunc(damage))
/// ```
pub fn magic_damage(
    profile: FormulaProfile,
    caster: &StatsSnapshot,
    target: &StatsSnapshot,
    power: u32,
    rng: &mut dyn RngSource,
) -> DamageRoll {
    match profile {
        FormulaProfile::Curved => curved(caster, target, power, rng),
        FormulaProfile::Linear => linear(caster, target, power, rng),
    }
}

fn curved(
    caster: &StatsSnapshot,
    target: &StatsSnapshot,
    power: u32,
    rng: &mut dyn RngSource,
) -> DamageRoll {
    let magic = f64::from(caster.magic);
    let power = f64::from(power);
    let target_mdef = f64::from(target.magic_defense);

    let raw = (power * (magic * magic / 6.0 + power) + 4.0).min(DAMAGE_CAP);
    let mdef = (target_mdef - 280.4).powi(2) / 110.0 + 16.0;
    let base = raw * mdef / 730.0;
    let mut damage = base * (730.0 - (mdef * 51.0 - target_mdef * target_mdef / 11.0) / 10.0) / 730.0;

    let critical = rng.percent(magic_critical_percent(caster.luck));
    if critical {
        damage *= CRITICAL_MULTIPLIER;
    }

    DamageRoll {
        amount: damage.clamp(0.0, DAMAGE_CAP) as u32,
        critical,
    }
}

fn linear(
    caster: &StatsSnapshot,
    target: &StatsSnapshot,
    power: u32,
    rng: &mut dyn RngSource,
) -> DamageRoll {
    let base = f64::from(caster.magic) * 0.8 + f64::from(power) * 0.5;
    let mut damage = base * rng.uniform(1.0, 1.25);

    let critical = rng.percent(magic_critical_percent(caster.luck));
    if critical {
        damage *= CRITICAL_MULTIPLIER;
    }

    damage -= f64::from(target.magic_defense) * 0.875;

    DamageRoll {
        amount: at_least_one(damage.min(DAMAGE_CAP)),
        critical,
    }
}
