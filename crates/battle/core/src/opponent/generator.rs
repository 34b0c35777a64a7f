//! Procedural opponent generation.

use crate::config::BattleConfig;
use crate::env::{OpponentOracle, OpponentTemplate, RngSource};
use crate::state::{Combatant, OpponentPayload};
use crate::stats::{CoreStats, ResourceMeter};

/// Level scaling factor.
///
/// ```text
/// 1 + (level - 1) * step
/// ```
pub fn level_factor(level: u32, rules: &BattleConfig) -> f64 {
    1.0 + f64::from(level.saturating_sub(1)) * rules.level_scaling_step
}

/// Builds an opponent from `template` scaled to `level`.
///
/// # Formula
///
/// ```text
/// stat  = trunc(base * stat_multiplier * level_factor)
/// award = trunc(exp_value * level_factor)
/// ```
pub fn scale_template(template: &OpponentTemplate, level: u32, rules: &BattleConfig) -> Combatant {
    let factor = level_factor(level, rules);
    let scale = |value: u32| (f64::from(value) * template.stat_multiplier * factor) as u32;
    let stats = template.base_stats.map(scale);

    let mut opponent = Combatant::new(
        template.name.clone(),
        ResourceMeter::full(stats.hp),
        ResourceMeter::full(stats.mp),
        CoreStats::new(
            stats.strength,
            stats.defense,
            stats.magic,
            stats.magic_defense,
            stats.agility,
            stats.luck,
        ),
    );
    opponent.level = level.max(1);
    opponent.opponent = Some(OpponentPayload {
        template_id: template.id.clone(),
        signature_move: template.special_move.clone(),
        moves: template.abilities.clone(),
        exp_award: (f64::from(template.exp_value) * factor) as u32,
        loot: template.drops.clone(),
    });
    opponent
}

/// Picks a template uniformly at random, skipping `exclude`, and scales it.
///
/// Returns `None` when every template is excluded (or the catalog is empty).
pub fn generate(
    level: u32,
    opponents: &dyn OpponentOracle,
    rules: &BattleConfig,
    exclude: &[String],
    rng: &mut dyn RngSource,
) -> Option<Combatant> {
    let eligible: Vec<&OpponentTemplate> = opponents
        .templates()
        .iter()
        .filter(|template| !exclude.iter().any(|id| *id == template.id))
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let template = eligible[rng.index(eligible.len())];
    tracing::debug!(template = %template.id, level, "opponent selected");
    Some(scale_template(template, level, rules))
}
