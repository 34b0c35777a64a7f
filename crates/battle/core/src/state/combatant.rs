//! Combatant state shared by the player and opponents.

use crate::action::ActionCategory;
use crate::state::status::{StatusEffects, StatusKind};
use crate::stats::{CoreStatKind, CoreStats, ResourceMeter, StatModifiers, StatsSnapshot, effective};

/// Names of the two basic actions every combatant knows.
pub const BASIC_ACTIONS: [&str; 2] = ["attack", "defend"];

/// Known actions partitioned by category. Basic actions are implicit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionBook {
    pub abilities: Vec<String>,
    pub skills: Vec<String>,
    pub black_magic: Vec<String>,
    pub white_magic: Vec<String>,
}

impl ActionBook {
    /// Names known in a non-basic category.
    pub fn names(&self, category: ActionCategory) -> &[String] {
        match category {
            ActionCategory::Basic => &[],
            ActionCategory::Ability => &self.abilities,
            ActionCategory::Skill => &self.skills,
            ActionCategory::BlackMagic => &self.black_magic,
            ActionCategory::WhiteMagic => &self.white_magic,
        }
    }

    /// Returns the canonical spelling of a known action, ignoring ASCII case.
    pub fn find(&self, category: ActionCategory, name: &str) -> Option<&str> {
        if category == ActionCategory::Basic {
            return BASIC_ACTIONS
                .iter()
                .copied()
                .find(|basic| basic.eq_ignore_ascii_case(name));
        }
        self.names(category)
            .iter()
            .map(String::as_str)
            .find(|known| known.eq_ignore_ascii_case(name))
    }

    pub fn knows(&self, category: ActionCategory, name: &str) -> bool {
        self.find(category, name).is_some()
    }
}

/// Opponent-only data cloned from the template at generation time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentPayload {
    pub template_id: String,
    pub signature_move: Option<String>,
    pub moves: Vec<String>,
    /// Experience granted to the player on defeat, already level-scaled.
    pub exp_award: u32,
    /// Remaining loot. Steal and victory drops both take from here.
    pub loot: Vec<String>,
}

/// A participant in an encounter.
///
/// `level`, `experience`, `hp`, `mp`, `stats`, `actions` and `items` persist
/// across encounters. `modifiers`, `guard` and `status` are encounter-scoped
/// and dropped by [`Combatant::leave_encounter`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub stats: CoreStats,
    pub modifiers: StatModifiers,
    /// Temporary defense bonus from Defend, cleared after the next enemy phase.
    pub guard: Option<u32>,
    pub actions: ActionBook,
    pub status: StatusEffects,
    pub items: Vec<String>,
    pub opponent: Option<OpponentPayload>,
}

impl Combatant {
    /// Creates a level-1 combatant with no known actions.
    pub fn new(name: impl Into<String>, hp: ResourceMeter, mp: ResourceMeter, stats: CoreStats) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            hp,
            mp,
            stats,
            modifiers: StatModifiers::default(),
            guard: None,
            actions: ActionBook::default(),
            status: StatusEffects::empty(),
            items: Vec::new(),
            opponent: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    pub fn is_opponent(&self) -> bool {
        self.opponent.is_some()
    }

    /// Removes up to `amount` HP, returning how much was removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }

    /// Restores up to `amount` HP, returning how much was restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Effective value of a base attribute.
    ///
    /// ```text
    /// value   = max(0, base + modifier)
    /// defense += guard
    /// agility *= 1 + haste% - slow%
    /// ```
    pub fn effective(&self, stat: CoreStatKind) -> u32 {
        let value = effective(self.stats.get(stat), self.modifiers.get(stat));
        match stat {
            CoreStatKind::Defense => value.saturating_add(self.guard.unwrap_or(0)),
            CoreStatKind::Agility => self.scaled_agility(value),
            _ => value,
        }
    }

    fn scaled_agility(&self, agility: u32) -> u32 {
        let percent = |kind| {
            self.status
                .get(kind)
                .map_or(0, |effect| i64::from(effect.potency.value()))
        };
        let factor = 100 + percent(StatusKind::Haste) - percent(StatusKind::Slow);
        (i64::from(agility) * factor.max(0) / 100) as u32
    }

    /// Effective stats handed to the formula library.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            level: self.level,
            strength: self.effective(CoreStatKind::Strength),
            defense: self.effective(CoreStatKind::Defense),
            magic: self.effective(CoreStatKind::Magic),
            magic_defense: self.effective(CoreStatKind::MagicDefense),
            agility: self.effective(CoreStatKind::Agility),
            luck: self.effective(CoreStatKind::Luck),
        }
    }

    /// Drops every encounter-scoped field so the combatant can be carried over.
    pub fn leave_encounter(&mut self) {
        self.modifiers = StatModifiers::default();
        self.guard = None;
        self.status.clear();
    }

    /// Checks the structural invariants a persisted combatant must hold.
    pub fn validate(&self) -> Result<(), String> {
        if self.level == 0 {
            return Err(format!("{}: level must be at least 1", self.name));
        }
        if !self.hp.is_valid() {
            return Err(format!(
                "{}: hp {} exceeds maximum {}",
                self.name, self.hp.current, self.hp.maximum
            ));
        }
        if !self.mp.is_valid() {
            return Err(format!(
                "{}: mp {} exceeds maximum {}",
                self.name, self.mp.current, self.mp.maximum
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::status::{EffectDuration, Potency, StatusEffect};

    fn warrior() -> Combatant {
        Combatant::new(
            "Warrior",
            ResourceMeter::full(840),
            ResourceMeter::full(56),
            CoreStats::new(20, 15, 5, 10, 12, 15),
        )
    }

    #[test]
    fn damage_and_heal_stay_in_bounds() {
        let mut c = warrior();
        assert_eq!(c.take_damage(1000), 840);
        assert_eq!(c.hp.current, 0);
        assert!(!c.is_alive());
        assert_eq!(c.heal(2000), 840);
        assert_eq!(c.hp.current, 840);
    }

    #[test]
    fn guard_adds_to_effective_defense() {
        let mut c = warrior();
        c.guard = Some(5);
        assert_eq!(c.effective(CoreStatKind::Defense), 20);
        assert_eq!(c.stats.defense, 15);
    }

    #[test]
    fn haste_and_slow_scale_agility() {
        let mut c = warrior();
        c.status.attach(StatusEffect::new(
            StatusKind::Haste,
            EffectDuration::Turns(3),
            Potency::Flat(50),
        ));
        assert_eq!(c.effective(CoreStatKind::Agility), 18);
        c.status.attach(StatusEffect::new(
            StatusKind::Slow,
            EffectDuration::Turns(3),
            Potency::Flat(50),
        ));
        assert_eq!(c.effective(CoreStatKind::Agility), 12);
    }

    #[test]
    fn leave_encounter_keeps_persistent_fields() {
        let mut c = warrior();
        c.modifiers.adjust(CoreStatKind::Strength, 4, None);
        c.guard = Some(5);
        c.take_damage(40);
        c.status.attach(StatusEffect::new(
            StatusKind::Burn,
            EffectDuration::Turns(2),
            Potency::Flat(2),
        ));
        c.leave_encounter();
        assert!(c.modifiers.is_empty());
        assert_eq!(c.guard, None);
        assert!(c.status.is_empty());
        assert_eq!(c.hp.current, 800);
    }

    #[test]
    fn action_book_lookup_ignores_case() {
        let mut c = warrior();
        c.actions.skills.push("Power Break".into());
        assert_eq!(
            c.actions.find(ActionCategory::Skill, "power break"),
            Some("Power Break")
        );
        assert!(c.actions.knows(ActionCategory::Basic, "Attack"));
        assert!(!c.actions.knows(ActionCategory::Ability, "Steal"));
    }

    #[test]
    fn validate_rejects_broken_pools() {
        let mut c = warrior();
        assert!(c.validate().is_ok());
        c.mp.current = 99;
        assert!(c.validate().is_err());
        c.mp.current = 0;
        c.level = 0;
        assert!(c.validate().is_err());
    }
}
