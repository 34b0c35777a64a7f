//! Class catalog loader.

use std::path::Path;

use battle_core::ClassTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassTemplate>,
}

/// Loader for playable classes from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load the class catalog from a RON file.
    ///
    /// Class ids must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ClassTemplate>> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        for (i, class) in catalog.classes.iter().enumerate() {
            if catalog.classes[..i].iter().any(|other| other.id == class.id) {
                anyhow::bail!("Duplicate class id '{}'", class.id);
            }
        }
        Ok(catalog.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARRIOR: &str = r#"(
        classes: [
            (
                id: "warrior",
                name: "Warrior",
                base_stats: (hp: 840, mp: 56, strength: 20, defense: 15, magic: 5,
                             magic_defense: 10, agility: 12, luck: 15),
                abilities: ["Cheer", "Provoke"],
                skills: ["Power Break", "Armor Break"],
            ),
        ],
    )"#;

    #[test]
    fn parses_class_with_defaults() {
        let classes = ClassLoader::parse(WARRIOR).unwrap();
        assert_eq!(classes.len(), 1);
        let warrior = classes[0].to_combatant();
        assert_eq!(warrior.name, "Warrior");
        assert_eq!(warrior.hp.maximum, 840);
        assert!(warrior.actions.black_magic.is_empty());
        assert_eq!(warrior.actions.skills, vec!["Power Break", "Armor Break"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let twice = format!(
            "(classes: [{0}, {0}])",
            r#"(id: "warrior", name: "Warrior",
                base_stats: (hp: 1, mp: 1, strength: 1, defense: 1, magic: 1,
                             magic_defense: 1, agility: 1, luck: 1))"#
        );
        let err = ClassLoader::parse(&twice).unwrap_err();
        assert!(err.to_string().contains("Duplicate class id"));
    }
}
