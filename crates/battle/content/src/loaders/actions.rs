//! Action catalog loader.

use std::path::Path;

use battle_core::{ActionCatalog, SpellTarget};

use crate::loaders::{LoadResult, read_file};

/// Loader for abilities, skills and spells from RON files.
pub struct ActionLoader;

impl ActionLoader {
    /// Load the action catalog from a RON file.
    ///
    /// Names are matched case-insensitively at runtime, so two definitions in
    /// one group that differ only in case are rejected here.
    pub fn load(path: &Path) -> LoadResult<ActionCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ActionCatalog> {
        let catalog: ActionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action catalog RON: {}", e))?;

        ensure_unique("ability", catalog.abilities.iter().map(|a| a.name.as_str()))?;
        ensure_unique("skill", catalog.skills.iter().map(|s| s.name.as_str()))?;
        ensure_unique("spell", catalog.spells.iter().map(|s| s.name.as_str()))?;

        for spell in &catalog.spells {
            if spell.power == 0 && spell.effects.is_empty() {
                anyhow::bail!("Spell '{}' has neither power nor effects", spell.name);
            }
            if spell.target == SpellTarget::Caster && spell.element != battle_core::Element::None {
                tracing::warn!(spell = %spell.name, "elemental spell targets its caster");
            }
        }

        tracing::debug!(
            abilities = catalog.abilities.len(),
            skills = catalog.skills.len(),
            spells = catalog.spells.len(),
            "action catalog loaded"
        );
        Ok(catalog)
    }
}

fn ensure_unique<'a>(group: &str, names: impl Iterator<Item = &'a str>) -> LoadResult<()> {
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        if seen.iter().any(|other| other.eq_ignore_ascii_case(name)) {
            anyhow::bail!("Duplicate {} name '{}'", group, name);
        }
        seen.push(name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{
        AbilityEffect, CoreStatKind, EffectDuration, Element, Potency, SkillEffect, SpellSchool,
        StatusKind,
    };

    const CATALOG: &str = r#"(
        abilities: [
            (name: "Cheer", effect: Cheer(stat: Strength)),
            (name: "Steal", effect: Steal),
        ],
        skills: [
            (name: "Armor Break", mp_cost: 10, effect: Break(stat: Defense)),
            (
                name: "Dark Attack",
                mp_cost: 8,
                effect: Strike(effects: [
                    (kind: Blind, duration: Turns(3), potency: Flat(25), chance: 0.5),
                ]),
            ),
        ],
        spells: [
            (
                name: "Fire",
                school: Black,
                element: Fire,
                mp_cost: 4,
                power: 20,
                target: Opponent,
                effects: [(kind: Burn, duration: Turns(3), potency: Flat(2), chance: 0.2)],
            ),
            (
                name: "NulFire",
                school: White,
                mp_cost: 6,
                power: 0,
                target: Caster,
                effects: [(kind: Nullify(Fire), duration: UntilConsumed, potency: Flat(0), chance: 1.0)],
            ),
        ],
    )"#;

    #[test]
    fn parses_every_effect_shape() {
        let catalog = ActionLoader::parse(CATALOG).unwrap();
        assert_eq!(
            catalog.abilities[0].effect,
            AbilityEffect::Cheer {
                stat: CoreStatKind::Strength
            }
        );
        assert!(matches!(
            &catalog.skills[1].effect,
            SkillEffect::Strike { effects } if effects[0].kind == StatusKind::Blind
        ));

        let fire = &catalog.spells[0];
        assert_eq!(fire.school, SpellSchool::Black);
        assert_eq!(fire.element, Element::Fire);
        assert_eq!(fire.effects[0].potency, Potency::Flat(2));

        let nul = &catalog.spells[1];
        assert_eq!(nul.element, Element::None);
        assert_eq!(nul.effects[0].kind, StatusKind::Nullify(Element::Fire));
        assert_eq!(nul.effects[0].duration, EffectDuration::UntilConsumed);
    }

    #[test]
    fn rejects_case_insensitive_duplicates() {
        let doubled = r#"(abilities: [
            (name: "Steal", effect: Steal),
            (name: "STEAL", effect: Steal),
        ])"#;
        let err = ActionLoader::parse(doubled).unwrap_err();
        assert!(err.to_string().contains("Duplicate ability"));
    }

    #[test]
    fn rejects_inert_spell() {
        let inert = r#"(spells: [
            (name: "Nothing", school: White, mp_cost: 1, power: 0, target: Caster),
        ])"#;
        assert!(ActionLoader::parse(inert).is_err());
    }
}
