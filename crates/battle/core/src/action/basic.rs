//! Attack, Defend and signature moves.

use super::ActionOutcome;
use crate::config::BattleConfig;
use crate::env::RngSource;
use crate::formula::{self, DamageRoll};
use crate::state::{Combatant, Element};
use crate::status;

/// How a physical strike is reported and scaled.
#[derive(Clone, Copy)]
pub(super) enum Strike<'a> {
    Attack,
    Signature { name: &'a str, multiplier: f64 },
}

/// Resolves one physical strike. Returns true if it landed.
pub(super) fn strike(
    actor: &Combatant,
    target: &mut Combatant,
    kind: Strike<'_>,
    rng: &mut dyn RngSource,
    outcome: &mut ActionOutcome,
) -> bool {
    if let Strike::Signature { name, .. } = kind {
        outcome.line(format!("{} uses {name}!", actor.name));
    }
    if status::blinded_miss(actor, rng) {
        outcome.missed = true;
        outcome.line(format!("{} attacks but misses {}!", actor.name, target.name));
        return false;
    }

    let attacker = actor.snapshot();
    let defender = target.snapshot();
    let DamageRoll { amount, critical } = match kind {
        Strike::Attack => formula::physical_damage(&attacker, &defender, rng),
        Strike::Signature { multiplier, .. } => {
            formula::signature_damage(&attacker, &defender, multiplier, rng)
        }
    };
    let dealt = deal_damage(target, amount, Element::None, &mut outcome.lines);

    outcome.damage += dealt;
    outcome.critical |= critical;
    let line = match (kind, critical) {
        (Strike::Attack, true) => format!(
            "CRITICAL HIT! {} strikes {} for {dealt} damage!",
            actor.name, target.name
        ),
        (Strike::Attack, false) => {
            format!("{} attacks {} for {dealt} damage!", actor.name, target.name)
        }
        (Strike::Signature { .. }, true) => {
            format!("CRITICAL HIT! {} takes {dealt} damage!", target.name)
        }
        (Strike::Signature { .. }, false) => format!("{} takes {dealt} damage!", target.name),
    };
    outcome.line(line);
    true
}

pub(super) fn defend(actor: &mut Combatant, rules: &BattleConfig, outcome: &mut ActionOutcome) {
    actor.guard = Some(rules.defend_bonus);
    outcome.line(format!("{} takes a defensive stance!", actor.name));
}

/// Applies one damage instance, honouring elemental nullification.
pub(super) fn deal_damage(
    target: &mut Combatant,
    amount: u32,
    element: Element,
    lines: &mut Vec<String>,
) -> u32 {
    if status::absorb(target, element, lines) {
        return 0;
    }
    target.take_damage(amount)
}
