//! Content factory for building the catalog bundle from data files.

use std::path::{Path, PathBuf};

use battle_core::{ActionCatalog, BattleConfig, CatalogBundle, ClassTemplate, OpponentTemplate};

use crate::loaders::{ActionLoader, ClassLoader, ConfigLoader, LoadResult, OpponentLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml      (optional, defaults when absent)
/// ├── classes.ron
/// ├── opponents.ron
/// └── actions.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the rules table from `rules.toml`, or the defaults if it is missing.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules table, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load playable classes from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<ClassTemplate>> {
        ClassLoader::load(&self.data_dir.join("classes.ron"))
    }

    /// Load opponent templates from `opponents.ron`.
    pub fn load_opponents(&self) -> LoadResult<Vec<OpponentTemplate>> {
        OpponentLoader::load(&self.data_dir.join("opponents.ron"))
    }

    /// Load abilities, skills and spells from `actions.ron`.
    pub fn load_actions(&self) -> LoadResult<ActionCatalog> {
        ActionLoader::load(&self.data_dir.join("actions.ron"))
    }

    /// Load everything and check that every class references known actions.
    pub fn load_bundle(&self) -> LoadResult<CatalogBundle> {
        let bundle = CatalogBundle::new(
            self.load_classes()?,
            self.load_opponents()?,
            self.load_actions()?,
            self.load_config()?,
        );
        check_references(&bundle)?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            classes = bundle.classes.len(),
            opponents = bundle.opponents.len(),
            "content loaded"
        );
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn check_references(bundle: &CatalogBundle) -> LoadResult<()> {
    use battle_core::{ActionOracle, SpellSchool};

    for class in &bundle.classes {
        let missing = class
            .abilities
            .iter()
            .find(|name| bundle.ability(name).is_none())
            .or_else(|| class.skills.iter().find(|name| bundle.skill(name).is_none()))
            .or_else(|| {
                class
                    .black_magic
                    .iter()
                    .find(|name| bundle.spell(SpellSchool::Black, name).is_none())
            })
            .or_else(|| {
                class
                    .white_magic
                    .iter()
                    .find(|name| bundle.spell(SpellSchool::White, name).is_none())
            });
        if let Some(name) = missing {
            anyhow::bail!("Class '{}' references unknown action '{}'", class.id, name);
        }
    }
    Ok(())
}
