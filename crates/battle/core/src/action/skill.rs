//! Skills: stat breaks, status strikes and Flee.

use super::basic::{Strike, strike};
use super::{ActionFailure, ActionOutcome};
use crate::config::BattleConfig;
use crate::env::{RngSource, SkillDefinition, SkillEffect};
use crate::state::Combatant;
use crate::stats::CoreStatKind;
use crate::status;

pub(super) fn execute(
    skill: &SkillDefinition,
    actor: &mut Combatant,
    target: &mut Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
    outcome: &mut ActionOutcome,
) {
    match &skill.effect {
        SkillEffect::Break { stat } => {
            outcome.line(format!("{} uses {}!", actor.name, skill.name));
            let applied = target.modifiers.adjust(*stat, -rules.break_amount, None);
            outcome.line(format!(
                "{}'s {} drops by {}!",
                target.name,
                stat.label(),
                applied.unsigned_abs()
            ));
        }
        SkillEffect::Strike { effects } => {
            outcome.line(format!("{} uses {}!", actor.name, skill.name));
            let landed = strike(actor, target, Strike::Attack, rng, outcome);
            if landed && target.is_alive() {
                status::apply_bundle(target, effects, rng, &mut outcome.lines);
            }
        }
        SkillEffect::Flee => flee(actor, target, rules, rng, outcome),
    }
}

/// Flee chance in percent.
///
/// ```text
/// clamp(base + (actor_agility - target_agility) * step, 5, 95)
/// ```
fn flee_percent(actor: &Combatant, target: &Combatant, rules: &BattleConfig) -> f64 {
    let diff = i64::from(actor.effective(CoreStatKind::Agility))
        - i64::from(target.effective(CoreStatKind::Agility));
    let percent = i64::from(rules.flee_base_percent) + diff * i64::from(rules.flee_agility_step);
    percent.clamp(5, 95) as f64
}

fn flee(
    actor: &Combatant,
    target: &Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
    outcome: &mut ActionOutcome,
) {
    if rng.percent(flee_percent(actor, target, rules)) {
        outcome.ended_encounter = true;
        outcome.line(format!("{} fled from battle!", actor.name));
    } else {
        outcome.fail(ActionFailure::FleeFailed, false);
        outcome.line(format!("{} couldn't escape!", actor.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{CoreStats, ResourceMeter};

    fn with_agility(agility: u32) -> Combatant {
        Combatant::new(
            "Runner",
            ResourceMeter::full(100),
            ResourceMeter::full(10),
            CoreStats::new(10, 10, 10, 10, agility, 10),
        )
    }

    #[test]
    fn flee_percent_is_clamped() {
        let rules = BattleConfig::default();
        assert_eq!(flee_percent(&with_agility(25), &with_agility(15), &rules), 70.0);
        assert_eq!(flee_percent(&with_agility(99), &with_agility(1), &rules), 95.0);
        assert_eq!(flee_percent(&with_agility(1), &with_agility(99), &rules), 5.0);
    }
}
