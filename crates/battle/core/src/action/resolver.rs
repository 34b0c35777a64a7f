//! Turns requests into effects on the two combatants.

use super::basic::{self, Strike};
use super::{ActionCategory, ActionFailure, ActionOutcome, ActionRequest, ability, skill, spell};
use crate::config::BattleConfig;
use crate::env::{
    AbilityDefinition, ActionOracle, RngSource, SkillDefinition, SpellDefinition, SpellSchool,
};
use crate::opponent::{OpponentMove, choose_move};
use crate::state::Combatant;
use crate::status;

/// A request resolved against the actor's known actions and the catalog.
enum Plan<'d> {
    Attack,
    Defend,
    Ability(&'d AbilityDefinition),
    Skill(&'d SkillDefinition),
    Spell(&'d SpellDefinition),
}

impl Plan<'_> {
    fn mp_cost(&self) -> u32 {
        match self {
            Plan::Attack | Plan::Defend | Plan::Ability(_) => 0,
            Plan::Skill(skill) => skill.mp_cost,
            Plan::Spell(spell) => spell.mp_cost,
        }
    }

    fn name(&self) -> &str {
        match self {
            Plan::Attack => "attack",
            Plan::Defend => "defend",
            Plan::Ability(ability) => &ability.name,
            Plan::Skill(skill) => &skill.name,
            Plan::Spell(spell) => &spell.name,
        }
    }
}

fn lookup<'d>(
    request: &ActionRequest,
    actor: &Combatant,
    actions: &'d dyn ActionOracle,
) -> Option<Plan<'d>> {
    let name = actor.actions.find(request.category, &request.name)?;
    match request.category {
        ActionCategory::Basic if name == "defend" => Some(Plan::Defend),
        ActionCategory::Basic => Some(Plan::Attack),
        ActionCategory::Ability => actions.ability(name).map(Plan::Ability),
        ActionCategory::Skill => actions.skill(name).map(Plan::Skill),
        ActionCategory::BlackMagic => actions.spell(SpellSchool::Black, name).map(Plan::Spell),
        ActionCategory::WhiteMagic => actions.spell(SpellSchool::White, name).map(Plan::Spell),
    }
}

fn plan<'d>(
    request: &ActionRequest,
    actor: &Combatant,
    actions: &'d dyn ActionOracle,
    outcome: &mut ActionOutcome,
) -> Plan<'d> {
    lookup(request, actor, actions).unwrap_or_else(|| {
        tracing::warn!(
            actor = %actor.name,
            category = %request.category,
            name = %request.name,
            "unknown or unlearned action, falling back to attack"
        );
        outcome.line(format!(
            "{} cannot use '{}'. Attacking instead!",
            actor.name, request.name
        ));
        Plan::Attack
    })
}

/// Resolves the player's action against the opponent.
///
/// Sleep-class effects are checked first (no cost, turn spent), then the MP
/// gate (no cost, turn not spent), then the action executes.
pub fn resolve_player_action(
    request: &ActionRequest,
    player: &mut Combatant,
    opponent: &mut Combatant,
    actions: &dyn ActionOracle,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
) -> ActionOutcome {
    let mut outcome = ActionOutcome::new();

    if let Some(kind) = status::consume_incapacitation(player, &mut outcome.lines) {
        outcome.fail(ActionFailure::Incapacitated(kind), true);
        return outcome;
    }

    let plan = plan(request, player, actions, &mut outcome);
    let cost = plan.mp_cost();
    if !player.mp.try_spend(cost) {
        outcome.line(format!("Not enough MP! (Need {cost} MP)"));
        outcome.fail(
            ActionFailure::InsufficientResource {
                action: plan.name().to_owned(),
                required: cost,
                available: player.mp.current,
            },
            false,
        );
        return outcome;
    }

    match plan {
        Plan::Attack => {
            basic::strike(player, opponent, Strike::Attack, rng, &mut outcome);
        }
        Plan::Defend => basic::defend(player, rules, &mut outcome),
        Plan::Ability(def) => ability::execute(def, player, opponent, rules, rng, &mut outcome),
        Plan::Skill(def) => skill::execute(def, player, opponent, rules, rng, &mut outcome),
        Plan::Spell(def) => spell::execute(def, player, opponent, rules, rng, &mut outcome),
    }

    tracing::debug!(
        actor = %player.name,
        action = %request.name,
        damage = outcome.damage,
        healing = outcome.healing,
        success = outcome.success,
        "player action resolved"
    );
    outcome
}

/// Lets the opponent AI pick and resolve one move against the player.
pub fn resolve_opponent_action(
    opponent: &mut Combatant,
    player: &mut Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
) -> ActionOutcome {
    let mut outcome = ActionOutcome::new();

    if let Some(kind) = status::consume_incapacitation(opponent, &mut outcome.lines) {
        outcome.fail(ActionFailure::Incapacitated(kind), true);
        return outcome;
    }

    match choose_move(opponent, rules, rng) {
        OpponentMove::Attack => {
            basic::strike(opponent, player, Strike::Attack, rng, &mut outcome);
        }
        OpponentMove::Signature(name) => {
            let kind = Strike::Signature {
                name: &name,
                multiplier: rules.signature_multiplier,
            };
            basic::strike(opponent, player, kind, rng, &mut outcome);
        }
    }

    tracing::debug!(
        actor = %opponent.name,
        damage = outcome.damage,
        missed = outcome.missed,
        "opponent action resolved"
    );
    outcome
}
