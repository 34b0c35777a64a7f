//! Experience, levels and victory rewards.

use crate::config::{BattleConfig, LevelUpIncrements};
use crate::env::RngSource;
use crate::state::Combatant;

/// Adds experience and applies every level it pays for.
///
/// ```text
/// while experience >= threshold:
///     level += 1, experience -= threshold, apply increments, refill pools
/// ```
///
/// Returns the number of levels gained.
pub fn gain_experience(combatant: &mut Combatant, amount: u32, rules: &BattleConfig) -> u32 {
    combatant.experience = combatant.experience.saturating_add(amount);
    if rules.level_threshold == 0 {
        return 0;
    }

    let mut gained = 0;
    while combatant.experience >= rules.level_threshold {
        combatant.experience -= rules.level_threshold;
        level_up(combatant, &rules.level_up);
        gained += 1;
    }
    gained
}

/// Applies one level worth of growth and refills both pools.
pub fn level_up(combatant: &mut Combatant, increments: &LevelUpIncrements) {
    combatant.level += 1;
    combatant.hp.grow_and_refill(increments.hp);
    combatant.mp.grow_and_refill(increments.mp);
    combatant.stats.raise_all(increments.attribute);
}

/// Rolls each remaining loot entry independently against the drop chance.
pub fn roll_drops(loot: &[String], rules: &BattleConfig, rng: &mut dyn RngSource) -> Vec<String> {
    loot.iter()
        .filter(|_| rng.percent(f64::from(rules.drop_chance_percent)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::stats::{CoreStats, ResourceMeter};

    fn warrior() -> Combatant {
        Combatant::new(
            "Warrior",
            ResourceMeter::new(500, 840),
            ResourceMeter::new(10, 56),
            CoreStats::new(20, 15, 5, 10, 12, 15),
        )
    }

    #[test]
    fn multi_level_gain() {
        let mut w = warrior();
        let gained = gain_experience(&mut w, 250, &BattleConfig::default());
        assert_eq!(gained, 2);
        assert_eq!(w.level, 3);
        assert_eq!(w.experience, 50);
        assert_eq!(w.hp, ResourceMeter::full(920));
        assert_eq!(w.mp, ResourceMeter::full(66));
        assert_eq!(w.stats, CoreStats::new(22, 17, 7, 12, 14, 17));
    }

    #[test]
    fn below_threshold_only_accumulates() {
        let mut w = warrior();
        assert_eq!(gain_experience(&mut w, 99, &BattleConfig::default()), 0);
        assert_eq!(w.level, 1);
        assert_eq!(w.experience, 99);
        assert_eq!(w.hp.current, 500);
    }

    #[test]
    fn drops_roll_per_item() {
        let loot = vec!["Potion".to_string(), "Small Gem".to_string()];
        let rules = BattleConfig::default();
        let mut rng = ScriptedRng::new(vec![0, u32::MAX], 0);
        assert_eq!(roll_drops(&loot, &rules, &mut rng), vec!["Potion".to_string()]);
        assert!(roll_drops(&loot, &rules, &mut ScriptedRng::constant(u32::MAX)).is_empty());
    }
}
