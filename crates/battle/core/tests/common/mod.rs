//! Shared fixtures for encounter integration tests.
#![allow(dead_code)]

use battle_core::{
    AbilityDefinition, AbilityEffect, ActionCatalog, BaseStats, BattleConfig, CatalogBundle,
    ClassTemplate, EffectDuration, Element, OpponentTemplate, Potency, SkillDefinition,
    SkillEffect, SpellDefinition, SpellSchool, SpellTarget, StatusApplication, StatusKind,
};

pub const SEED: u64 = 0x5EED_0001;

fn stats(hp: u32, mp: u32, str_def: (u32, u32), mag_mdef: (u32, u32), agi: u32, luck: u32) -> BaseStats {
    BaseStats {
        hp,
        mp,
        strength: str_def.0,
        defense: str_def.1,
        magic: mag_mdef.0,
        magic_defense: mag_mdef.1,
        agility: agi,
        luck,
    }
}

fn class(id: &str, name: &str, base_stats: BaseStats) -> ClassTemplate {
    ClassTemplate {
        id: id.into(),
        name: name.into(),
        base_stats,
        abilities: Vec::new(),
        skills: Vec::new(),
        black_magic: Vec::new(),
        white_magic: Vec::new(),
        description: String::new(),
    }
}

fn opponent(id: &str, name: &str, base_stats: BaseStats, exp_value: u32, drops: &[&str]) -> OpponentTemplate {
    OpponentTemplate {
        id: id.into(),
        name: name.into(),
        base_stats,
        stat_multiplier: 1.0,
        special_move: Some("Smash".into()),
        exp_value,
        abilities: vec!["Attack".into(), "Smash".into()],
        drops: drops.iter().map(|d| d.to_string()).collect(),
        description: String::new(),
    }
}

pub fn bundle() -> CatalogBundle {
    let mut warrior = class("warrior", "Warrior", stats(840, 56, (20, 15), (5, 10), 12, 15));
    warrior.abilities = vec!["Cheer".into()];

    let mut mage = class("mage", "Black Mage", stats(572, 84, (8, 8), (22, 18), 10, 17));
    mage.black_magic = vec!["Fire".into()];
    mage.white_magic = vec!["Cure".into()];

    let mut rogue = class("rogue", "Thief", stats(690, 70, (15, 10), (10, 12), 25, 20));
    rogue.abilities = vec!["Steal".into()];
    rogue.skills = vec!["Flee".into()];

    CatalogBundle::new(
        vec![warrior, mage, rogue],
        vec![
            opponent("slime", "Slime", stats(1, 0, (1, 0), (0, 0), 1, 0), 120, &["Jelly"]),
            opponent("troll", "Troll", stats(5000, 0, (400, 300), (0, 300), 1, 0), 500, &["Club"]),
        ],
        ActionCatalog {
            abilities: vec![
                AbilityDefinition {
                    name: "Cheer".into(),
                    effect: AbilityEffect::Cheer {
                        stat: battle_core::CoreStatKind::Strength,
                    },
                    description: String::new(),
                },
                AbilityDefinition {
                    name: "Steal".into(),
                    effect: AbilityEffect::Steal,
                    description: String::new(),
                },
            ],
            skills: vec![SkillDefinition {
                name: "Flee".into(),
                mp_cost: 4,
                effect: SkillEffect::Flee,
                description: String::new(),
            }],
            spells: vec![
                SpellDefinition {
                    name: "Fire".into(),
                    school: SpellSchool::Black,
                    element: Element::Fire,
                    mp_cost: 4,
                    power: 20,
                    target: SpellTarget::Opponent,
                    effects: vec![StatusApplication {
                        kind: StatusKind::Burn,
                        duration: EffectDuration::Turns(3),
                        potency: Potency::Flat(2),
                        chance: 0.2,
                    }],
                    description: String::new(),
                },
                SpellDefinition {
                    name: "Cure".into(),
                    school: SpellSchool::White,
                    element: Element::None,
                    mp_cost: 4,
                    power: 24,
                    target: SpellTarget::Caster,
                    effects: Vec::new(),
                    description: String::new(),
                },
            ],
        },
        BattleConfig::default(),
    )
}

/// Exclusion list that leaves only `keep`.
pub fn only(keep: &str) -> Vec<String> {
    ["slime", "troll"]
        .iter()
        .filter(|id| **id != keep)
        .map(|id| id.to_string())
        .collect()
}
