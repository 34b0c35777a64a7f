//! Abilities: Cheer, Provoke and Steal.

use super::ActionOutcome;
use crate::config::BattleConfig;
use crate::env::{AbilityDefinition, AbilityEffect, RngSource};
use crate::state::{Combatant, EffectDuration, Potency, StatusEffect, StatusKind};
use crate::stats::CoreStatKind;

pub(super) fn execute(
    ability: &AbilityDefinition,
    actor: &mut Combatant,
    target: &mut Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
    outcome: &mut ActionOutcome,
) {
    match ability.effect {
        AbilityEffect::Cheer { stat } => {
            outcome.line(format!("{} uses {}!", actor.name, ability.name));
            let applied = actor
                .modifiers
                .adjust(stat, rules.cheer_bonus, Some(rules.cheer_cap));
            if applied > 0 {
                outcome.line(format!(
                    "{}'s {} rises by {applied}!",
                    actor.name,
                    stat.label()
                ));
            } else {
                outcome.line(format!(
                    "{}'s {} won't go any higher!",
                    actor.name,
                    stat.label()
                ));
            }
        }
        AbilityEffect::Provoke => {
            target.status.attach(StatusEffect::new(
                StatusKind::Provoke,
                EffectDuration::Turns(rules.provoke_turns),
                Potency::Flat(0),
            ));
            outcome.line(format!("{} provokes {}!", actor.name, target.name));
        }
        AbilityEffect::Steal => steal(actor, target, rules, rng, outcome),
    }
}

/// Steal chance in percent.
///
/// ```text
/// clamp(base + (actor_luck - target_luck) * step, 5, 95)
/// ```
fn steal_percent(actor: &Combatant, target: &Combatant, rules: &BattleConfig) -> f64 {
    let diff = i64::from(actor.effective(CoreStatKind::Luck))
        - i64::from(target.effective(CoreStatKind::Luck));
    let percent = i64::from(rules.steal_base_percent) + diff * i64::from(rules.steal_luck_step);
    percent.clamp(5, 95) as f64
}

fn steal(
    actor: &mut Combatant,
    target: &mut Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
    outcome: &mut ActionOutcome,
) {
    let percent = steal_percent(actor, target, rules);
    let Some(loot) = target
        .opponent
        .as_mut()
        .map(|payload| &mut payload.loot)
        .filter(|loot| !loot.is_empty())
    else {
        outcome.line(format!("{} has nothing to steal!", target.name));
        return;
    };

    if rng.percent(percent) {
        let item = loot.remove(0);
        outcome.line(format!("{} stole {item} from {}!", actor.name, target.name));
        actor.items.push(item);
    } else {
        outcome.line(format!("{} failed to steal anything.", actor.name));
    }
}
