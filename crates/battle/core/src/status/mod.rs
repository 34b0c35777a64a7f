//! Status effect rules.
//!
//! ```text
//! on hit        roll each StatusApplication, attach on success (replacing)
//! before action sleep-class effect? consume it and skip the attempt
//! on damage     matching Nullify(element)? consume it and cancel the damage
//! end of turn   DoT / Regen apply, Turns(n) tick down, zero is removed
//! ```
//!
//! All functions append their battle log lines to the caller's buffer.

use crate::env::RngSource;
use crate::state::{
    Combatant, EffectDuration, Element, StatusApplication, StatusKind,
};

/// Rolls every application in `bundle` against `target`.
///
/// Returns the kinds that were attached.
pub fn apply_bundle(
    target: &mut Combatant,
    bundle: &[StatusApplication],
    rng: &mut dyn RngSource,
    lines: &mut Vec<String>,
) -> Vec<StatusKind> {
    let mut attached = Vec::new();
    for application in bundle {
        if !rng.chance(application.chance) {
            continue;
        }
        if target.status.attach(application.effect()) {
            lines.push(attach_line(&target.name, application.kind));
            attached.push(application.kind);
        } else {
            tracing::debug!(target = %target.name, kind = %application.kind, "status set full, effect dropped");
        }
    }
    attached
}

fn attach_line(name: &str, kind: StatusKind) -> String {
    match kind {
        StatusKind::Burn => format!("{name} is burning!"),
        StatusKind::Poison => format!("{name} is poisoned!"),
        StatusKind::Regen => format!("{name} is regenerating!"),
        StatusKind::Blind => format!("{name} is blinded!"),
        StatusKind::Haste => format!("{name} speeds up!"),
        StatusKind::Slow => format!("{name} slows down!"),
        StatusKind::Provoke => format!("{name} is provoked!"),
        StatusKind::Sleep => format!("{name} falls asleep!"),
        StatusKind::Paralyze => format!("{name} is paralyzed!"),
        StatusKind::Freeze => format!("{name} is frozen solid!"),
        StatusKind::Nullify(element) => {
            format!("{name} is shielded against {} damage!", element.label())
        }
    }
}

/// Consumes a sleep-class effect if one is attached.
///
/// Returns the kind that suppressed the attempt.
pub fn consume_incapacitation(actor: &mut Combatant, lines: &mut Vec<String>) -> Option<StatusKind> {
    let kind = actor.status.incapacitation()?;
    actor.status.remove(kind);
    let line = match kind {
        StatusKind::Sleep => format!("{} is asleep and cannot act!", actor.name),
        StatusKind::Freeze => format!("{} is frozen and cannot act!", actor.name),
        _ => format!("{} is paralyzed and cannot act!", actor.name),
    };
    lines.push(line);
    Some(kind)
}

/// Consumes a matching nullification, if any.
///
/// Returns true if the damage instance must be cancelled.
pub fn absorb(target: &mut Combatant, element: Element, lines: &mut Vec<String>) -> bool {
    if element == Element::None {
        return false;
    }
    if target.status.remove(StatusKind::Nullify(element)).is_none() {
        return false;
    }
    lines.push(format!(
        "{}'s barrier nullifies the {} damage!",
        target.name,
        element.label()
    ));
    true
}

/// Rolls Blind's miss chance for a physical attack.
pub fn blinded_miss(attacker: &Combatant, rng: &mut dyn RngSource) -> bool {
    match attacker.status.get(StatusKind::Blind) {
        Some(effect) => rng.percent(f64::from(effect.potency.value())),
        None => false,
    }
}

/// HP changes produced by one end-of-turn tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub damage: u32,
    pub healing: u32,
}

/// End-of-turn processing for one combatant.
///
/// Combatants at 0 HP are skipped. Damage and regeneration resolve before the
/// counter ticks, so an effect applies on the turn it expires.
pub fn tick(combatant: &mut Combatant, lines: &mut Vec<String>) -> TickReport {
    let mut report = TickReport::default();
    if !combatant.is_alive() {
        return report;
    }

    let max_hp = combatant.hp.maximum;
    let effects: Vec<_> = combatant.status.iter().copied().collect();
    for effect in &effects {
        if !matches!(effect.duration, EffectDuration::Turns(_)) || !combatant.is_alive() {
            continue;
        }
        let amount = effect.potency.resolve(max_hp);
        match effect.kind {
            StatusKind::Burn | StatusKind::Poison => {
                let dealt = combatant.take_damage(amount);
                report.damage += dealt;
                lines.push(format!(
                    "{} takes {dealt} damage from {}!",
                    combatant.name, effect.kind
                ));
            }
            StatusKind::Regen => {
                let healed = combatant.heal(amount);
                report.healing += healed;
                if healed > 0 {
                    lines.push(format!("{} regenerates {healed} HP!", combatant.name));
                }
            }
            _ => {}
        }
    }

    let name = combatant.name.clone();
    combatant.status.retain(|effect| match &mut effect.duration {
        EffectDuration::UntilConsumed => true,
        EffectDuration::Turns(remaining) => {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                lines.push(format!("{name}'s {} wore off.", effect.kind));
                false
            } else {
                true
            }
        }
    });

    tracing::debug!(
        combatant = %combatant.name,
        damage = report.damage,
        healing = report.healing,
        remaining = combatant.status.len(),
        "status tick"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{Potency, StatusEffect};
    use crate::stats::{CoreStats, ResourceMeter};

    fn dummy(hp: u32) -> Combatant {
        Combatant::new(
            "Dummy",
            ResourceMeter::full(hp),
            ResourceMeter::full(10),
            CoreStats::new(10, 10, 10, 10, 10, 10),
        )
    }

    fn timed(kind: StatusKind, turns: u32, potency: Potency) -> StatusEffect {
        StatusEffect::new(kind, EffectDuration::Turns(turns), potency)
    }

    fn application(kind: StatusKind, chance: f64) -> StatusApplication {
        StatusApplication {
            kind,
            duration: EffectDuration::Turns(3),
            potency: Potency::Flat(2),
            chance,
        }
    }

    #[test]
    fn bundle_rolls_each_application() {
        let mut target = dummy(100);
        let mut lines = Vec::new();
        // first roll passes 0.5, second fails 0.5
        let mut rng = ScriptedRng::new(vec![0, u32::MAX], u32::MAX);
        let attached = apply_bundle(
            &mut target,
            &[application(StatusKind::Burn, 0.5), application(StatusKind::Blind, 0.5)],
            &mut rng,
            &mut lines,
        );
        assert_eq!(attached, vec![StatusKind::Burn]);
        assert!(target.status.has(StatusKind::Burn));
        assert!(!target.status.has(StatusKind::Blind));
        assert_eq!(lines, vec!["Dummy is burning!".to_string()]);
    }

    #[test]
    fn burn_ticks_then_expires() {
        let mut target = dummy(100);
        target.status.attach(timed(StatusKind::Burn, 2, Potency::Flat(4)));
        let mut lines = Vec::new();

        assert_eq!(tick(&mut target, &mut lines).damage, 4);
        assert!(target.status.has(StatusKind::Burn));
        assert_eq!(tick(&mut target, &mut lines).damage, 4);
        assert!(!target.status.has(StatusKind::Burn));
        assert_eq!(target.hp.current, 92);
        assert_eq!(tick(&mut target, &mut lines), TickReport::default());
    }

    #[test]
    fn poison_uses_current_maximum() {
        let mut target = dummy(840);
        target.status.attach(timed(StatusKind::Poison, 3, Potency::PercentOfMax(10)));
        let mut lines = Vec::new();
        assert_eq!(tick(&mut target, &mut lines).damage, 84);

        target.hp.grow_and_refill(160);
        assert_eq!(tick(&mut target, &mut lines).damage, 100);
    }

    #[test]
    fn regen_clamps_to_maximum() {
        let mut target = dummy(100);
        target.take_damage(5);
        target.status.attach(timed(StatusKind::Regen, 3, Potency::PercentOfMax(10)));
        let mut lines = Vec::new();
        assert_eq!(tick(&mut target, &mut lines).healing, 5);
        assert_eq!(target.hp.current, 100);
    }

    #[test]
    fn defeated_combatants_are_not_ticked() {
        let mut target = dummy(10);
        target.take_damage(10);
        target.status.attach(timed(StatusKind::Burn, 1, Potency::Flat(4)));
        let mut lines = Vec::new();
        tick(&mut target, &mut lines);
        assert!(target.status.has(StatusKind::Burn));
        assert!(lines.is_empty());
    }

    #[test]
    fn nullify_consumes_once_and_never_ticks() {
        let mut target = dummy(100);
        target.status.attach(StatusEffect::new(
            StatusKind::Nullify(Element::Fire),
            EffectDuration::UntilConsumed,
            Potency::Flat(0),
        ));
        let mut lines = Vec::new();
        for _ in 0..5 {
            tick(&mut target, &mut lines);
        }
        assert!(!absorb(&mut target, Element::Ice, &mut lines));
        assert!(!absorb(&mut target, Element::None, &mut lines));
        assert!(absorb(&mut target, Element::Fire, &mut lines));
        assert!(!absorb(&mut target, Element::Fire, &mut lines));
    }

    #[test]
    fn incapacitation_is_consumed() {
        let mut actor = dummy(100);
        actor.status.attach(timed(StatusKind::Sleep, 3, Potency::Flat(0)));
        let mut lines = Vec::new();
        assert_eq!(consume_incapacitation(&mut actor, &mut lines), Some(StatusKind::Sleep));
        assert_eq!(consume_incapacitation(&mut actor, &mut lines), None);
        assert_eq!(lines, vec!["Dummy is asleep and cannot act!".to_string()]);
    }

    #[test]
    fn blind_miss_uses_potency_percent() {
        let mut actor = dummy(100);
        assert!(!blinded_miss(&actor, &mut ScriptedRng::constant(0)));
        actor.status.attach(timed(StatusKind::Blind, 3, Potency::Flat(50)));
        assert!(blinded_miss(&actor, &mut ScriptedRng::constant(0)));
        assert!(!blinded_miss(&actor, &mut ScriptedRng::constant(u32::MAX)));
    }
}
