//! Effective stat view consumed by the formula library.

/// Effective attributes of a combatant at one instant.
///
/// Modifiers, guard and Haste/Slow are already folded in. Formulas only ever
/// read this, never the combatant itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub level: u32,
    pub strength: u32,
    pub defense: u32,
    pub magic: u32,
    pub magic_defense: u32,
    pub agility: u32,
    pub luck: u32,
}
