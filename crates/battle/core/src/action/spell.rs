//! Spell dispatcher shared by black and white magic.

use super::ActionOutcome;
use super::basic::deal_damage;
use crate::config::BattleConfig;
use crate::env::{RngSource, SpellDefinition, SpellSchool, SpellTarget};
use crate::formula;
use crate::state::{Combatant, Element};
use crate::status;

pub(super) fn execute(
    spell: &SpellDefinition,
    actor: &mut Combatant,
    target: &mut Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
    outcome: &mut ActionOutcome,
) {
    outcome.line(format!("{} casts {}!", actor.name, spell.name));
    let caster = actor.snapshot();
    let recipient = match spell.target {
        SpellTarget::Opponent => target,
        SpellTarget::Caster => actor,
    };

    if spell.power > 0 {
        match spell.school {
            SpellSchool::Black => {
                let roll = formula::magic_damage(
                    rules.formula_profile,
                    &caster,
                    &recipient.snapshot(),
                    spell.power,
                    rng,
                );
                let dealt = deal_damage(recipient, roll.amount, spell.element, &mut outcome.lines);
                outcome.damage += dealt;
                outcome.critical |= roll.critical;
                let element = match spell.element {
                    Element::None => String::new(),
                    element => format!("{} ", element.label()),
                };
                let prefix = if roll.critical { "CRITICAL HIT! " } else { "" };
                outcome.line(format!(
                    "{prefix}{} takes {dealt} {element}damage!",
                    recipient.name
                ));
            }
            SpellSchool::White => {
                let amount = formula::healing(
                    rules.formula_profile,
                    &caster,
                    spell.power,
                    recipient.hp.missing(),
                    rng,
                );
                let healed = recipient.heal(amount);
                outcome.healing += healed;
                outcome.line(format!("{} recovers {healed} HP!", recipient.name));
            }
        }
    }

    if recipient.is_alive() {
        status::apply_bundle(recipient, &spell.effects, rng, &mut outcome.lines);
    }
}
