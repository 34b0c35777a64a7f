//! Status effect data attached to combatants.
//!
//! Effects are either timed (`EffectDuration::Turns`) and tick down at the end
//! of every round, or one-shot (`EffectDuration::UntilConsumed`) and stay until
//! the matching event consumes them. Attaching an effect replaces any effect of
//! the same kind already present.
//!
//! The rules that act on this data live in [`crate::status`].

use core::fmt;

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Damage element. Spells carry one; physical attacks use `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    /// Non-elemental damage. Cannot be nullified.
    None,
    Fire,
    Ice,
    Thunder,
    Water,
}

impl Element {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    // ========================================================================
    // Damage / recovery over time
    // ========================================================================
    /// Flat damage every end of turn.
    Burn,

    /// Percent-of-max-HP damage every end of turn.
    Poison,

    /// Percent-of-max-HP healing every end of turn.
    Regen,

    // ========================================================================
    // Stat-like conditions
    // ========================================================================
    /// Physical attacks miss with probability equal to the potency percent.
    Blind,

    /// Agility raised by the potency percent.
    Haste,

    /// Agility lowered by the potency percent.
    Slow,

    /// Opponent cannot use its signature move.
    Provoke,

    // ========================================================================
    // Crowd control (suppresses the next action attempt)
    // ========================================================================
    Sleep,
    Paralyze,
    Freeze,

    // ========================================================================
    // One-shot
    // ========================================================================
    /// Cancels the next damage instance of the given element.
    Nullify(Element),
}

impl StatusKind {
    /// Returns true for sleep-class effects that suppress action attempts.
    pub const fn is_incapacitating(self) -> bool {
        matches!(self, Self::Sleep | Self::Paralyze | Self::Freeze)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Burn => f.write_str("burn"),
            Self::Poison => f.write_str("poison"),
            Self::Regen => f.write_str("regen"),
            Self::Blind => f.write_str("blind"),
            Self::Haste => f.write_str("haste"),
            Self::Slow => f.write_str("slow"),
            Self::Provoke => f.write_str("provoke"),
            Self::Sleep => f.write_str("sleep"),
            Self::Paralyze => f.write_str("paralysis"),
            Self::Freeze => f.write_str("freeze"),
            Self::Nullify(element) => write!(f, "nul{}", element.label()),
        }
    }
}

/// Remaining lifetime of an attached effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectDuration {
    /// Ticks down once per end of turn; removed at zero.
    Turns(u32),
    /// Never ticks; removed only when consumed.
    UntilConsumed,
}

/// Strength of an effect, interpreted per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Potency {
    /// Absolute amount (HP per tick, or percent for Blind/Haste/Slow).
    Flat(u32),
    /// Percent of the holder's current maximum HP, recomputed every tick.
    PercentOfMax(u32),
}

impl Potency {
    /// Resolves the potency against a maximum HP value.
    ///
    /// Non-zero percentages never round down to zero.
    pub fn resolve(self, max_hp: u32) -> u32 {
        match self {
            Self::Flat(amount) => amount,
            Self::PercentOfMax(0) => 0,
            Self::PercentOfMax(percent) => {
                ((u64::from(max_hp) * u64::from(percent)) / 100).max(1) as u32
            }
        }
    }

    /// Raw number, ignoring how it is interpreted.
    pub const fn value(self) -> u32 {
        match self {
            Self::Flat(amount) | Self::PercentOfMax(amount) => amount,
        }
    }
}

/// A single attached status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub duration: EffectDuration,
    pub potency: Potency,
}

impl StatusEffect {
    pub const fn new(kind: StatusKind, duration: EffectDuration, potency: Potency) -> Self {
        Self {
            kind,
            duration,
            potency,
        }
    }
}

/// An effect carried by an action together with its application chance.
///
/// Each application in a bundle is rolled independently when the action lands.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusApplication {
    pub kind: StatusKind,
    pub duration: EffectDuration,
    pub potency: Potency,
    /// Probability in `[0, 1]`.
    pub chance: f64,
}

impl StatusApplication {
    pub const fn effect(&self) -> StatusEffect {
        StatusEffect::new(self.kind, self.duration, self.potency)
    }
}

/// Status effects attached to one combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is attached.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Attaches an effect, replacing an existing effect of the same kind.
    ///
    /// Returns false if the set is full and the effect could not be attached.
    pub fn attach(&mut self, effect: StatusEffect) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            *existing = effect;
            return true;
        }
        self.effects.try_push(effect).is_ok()
    }

    /// Removes an effect, returning it if it was attached.
    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|e| e.kind == kind)?;
        Some(self.effects.remove(index))
    }

    /// First attached sleep-class effect, if any.
    pub fn incapacitation(&self) -> Option<StatusKind> {
        self.effects
            .iter()
            .map(|e| e.kind)
            .find(|kind| kind.is_incapacitating())
    }

    /// Returns an iterator over all attached effects.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&mut StatusEffect) -> bool) {
        self.effects.retain(keep);
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
