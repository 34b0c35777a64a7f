//! Core attributes and encounter-scoped modifiers.
//!
//! `CoreStats` are the persisted base attributes and the only thing
//! progression touches. Buffs and debuffs applied during an encounter go to
//! `StatModifiers` and are discarded when the combatant leaves the encounter.
//!
//! Effective = max(0, Base + Modifier)

/// The six base attributes shared by players and opponents.
///
/// - **strength**: physical attack power
/// - **defense**: physical damage reduction
/// - **magic**: spell power and healing
/// - **magic_defense**: magical damage reduction
/// - **agility**: flee chance, affected by Haste/Slow
/// - **luck**: critical chance and steal chance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub strength: u32,
    pub defense: u32,
    pub magic: u32,
    pub magic_defense: u32,
    pub agility: u32,
    pub luck: u32,
}

impl CoreStats {
    pub const fn new(
        strength: u32,
        defense: u32,
        magic: u32,
        magic_defense: u32,
        agility: u32,
        luck: u32,
    ) -> Self {
        Self {
            strength,
            defense,
            magic,
            magic_defense,
            agility,
            luck,
        }
    }

    pub fn get(&self, stat: CoreStatKind) -> u32 {
        match stat {
            CoreStatKind::Strength => self.strength,
            CoreStatKind::Defense => self.defense,
            CoreStatKind::Magic => self.magic,
            CoreStatKind::MagicDefense => self.magic_defense,
            CoreStatKind::Agility => self.agility,
            CoreStatKind::Luck => self.luck,
        }
    }

    pub fn get_mut(&mut self, stat: CoreStatKind) -> &mut u32 {
        match stat {
            CoreStatKind::Strength => &mut self.strength,
            CoreStatKind::Defense => &mut self.defense,
            CoreStatKind::Magic => &mut self.magic,
            CoreStatKind::MagicDefense => &mut self.magic_defense,
            CoreStatKind::Agility => &mut self.agility,
            CoreStatKind::Luck => &mut self.luck,
        }
    }

    /// Adds `amount` to every attribute.
    pub fn raise_all(&mut self, amount: u32) {
        for stat in CoreStatKind::ALL {
            let value = self.get_mut(stat);
            *value = value.saturating_add(amount);
        }
    }
}

/// Enum representing individual base attributes.
///
/// Used by buffs, debuffs and catalog data to reference a specific stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CoreStatKind {
    Strength,
    Defense,
    Magic,
    MagicDefense,
    Agility,
    Luck,
}

impl CoreStatKind {
    pub const ALL: [CoreStatKind; 6] = [
        CoreStatKind::Strength,
        CoreStatKind::Defense,
        CoreStatKind::Magic,
        CoreStatKind::MagicDefense,
        CoreStatKind::Agility,
        CoreStatKind::Luck,
    ];

    /// Display label used in battle log lines.
    pub const fn label(self) -> &'static str {
        match self {
            CoreStatKind::Strength => "strength",
            CoreStatKind::Defense => "defense",
            CoreStatKind::Magic => "magic",
            CoreStatKind::MagicDefense => "magic defense",
            CoreStatKind::Agility => "agility",
            CoreStatKind::Luck => "luck",
        }
    }
}

/// Signed, encounter-scoped adjustments on top of `CoreStats`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifiers {
    pub strength: i32,
    pub defense: i32,
    pub magic: i32,
    pub magic_defense: i32,
    pub agility: i32,
    pub luck: i32,
}

impl StatModifiers {
    pub fn get(&self, stat: CoreStatKind) -> i32 {
        match stat {
            CoreStatKind::Strength => self.strength,
            CoreStatKind::Defense => self.defense,
            CoreStatKind::Magic => self.magic,
            CoreStatKind::MagicDefense => self.magic_defense,
            CoreStatKind::Agility => self.agility,
            CoreStatKind::Luck => self.luck,
        }
    }

    fn get_mut(&mut self, stat: CoreStatKind) -> &mut i32 {
        match stat {
            CoreStatKind::Strength => &mut self.strength,
            CoreStatKind::Defense => &mut self.defense,
            CoreStatKind::Magic => &mut self.magic,
            CoreStatKind::MagicDefense => &mut self.magic_defense,
            CoreStatKind::Agility => &mut self.agility,
            CoreStatKind::Luck => &mut self.luck,
        }
    }

    /// Adds `delta` to a modifier, keeping the result at or below `cap`.
    ///
    /// Returns the change that was actually applied.
    pub fn adjust(&mut self, stat: CoreStatKind, delta: i32, cap: Option<i32>) -> i32 {
        let value = self.get_mut(stat);
        let before = *value;
        let mut after = before.saturating_add(delta);
        if let Some(cap) = cap {
            after = after.min(cap.max(before));
        }
        *value = after;
        after - before
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies a signed modifier to a base value, flooring at zero.
pub fn effective(base: u32, modifier: i32) -> u32 {
    (i64::from(base) + i64::from(modifier)).clamp(0, i64::from(u32::MAX)) as u32
}
