//! In-memory catalog bundle.
//!
//! Owns every catalog the engine reads and implements all oracle traits, so a
//! single value can back a [`BattleEnv`](super::BattleEnv). Content loaders build
//! one from data files; tests build one by hand.

use super::{
    ActionCatalog, ActionOracle, ClassOracle, ClassTemplate, ConfigOracle, OpponentOracle,
    OpponentTemplate,
};
use crate::config::BattleConfig;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogBundle {
    pub classes: Vec<ClassTemplate>,
    pub opponents: Vec<OpponentTemplate>,
    pub actions: ActionCatalog,
    pub config: BattleConfig,
}

impl CatalogBundle {
    pub fn new(
        classes: Vec<ClassTemplate>,
        opponents: Vec<OpponentTemplate>,
        actions: ActionCatalog,
        config: BattleConfig,
    ) -> Self {
        Self {
            classes,
            opponents,
            actions,
            config,
        }
    }
}

impl OpponentOracle for CatalogBundle {
    fn templates(&self) -> &[OpponentTemplate] {
        &self.opponents
    }
}

impl ClassOracle for CatalogBundle {
    fn classes(&self) -> &[ClassTemplate] {
        &self.classes
    }
}

impl ActionOracle for CatalogBundle {
    fn catalog(&self) -> &ActionCatalog {
        &self.actions
    }
}

impl ConfigOracle for CatalogBundle {
    fn rules(&self) -> &BattleConfig {
        &self.config
    }
}
