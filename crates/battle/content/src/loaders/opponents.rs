//! Opponent catalog loader.

use std::path::Path;

use battle_core::OpponentTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Opponent catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentCatalog {
    pub opponents: Vec<OpponentTemplate>,
}

/// Loader for opponent templates from RON files.
pub struct OpponentLoader;

impl OpponentLoader {
    /// Load opponent templates from a RON file.
    ///
    /// Ids must be unique and multipliers positive; exclusion lists and the
    /// level scaling rely on both.
    pub fn load(path: &Path) -> LoadResult<Vec<OpponentTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<OpponentTemplate>> {
        let catalog: OpponentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse opponent catalog RON: {}", e))?;

        for (i, template) in catalog.opponents.iter().enumerate() {
            if catalog.opponents[..i].iter().any(|other| other.id == template.id) {
                anyhow::bail!("Duplicate opponent id '{}'", template.id);
            }
            if template.stat_multiplier.is_nan() || template.stat_multiplier <= 0.0 {
                anyhow::bail!(
                    "Opponent '{}' has non-positive stat multiplier {}",
                    template.id,
                    template.stat_multiplier
                );
            }
        }
        Ok(catalog.opponents)
    }
}
