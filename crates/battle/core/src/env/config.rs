//! Configuration oracle exposing the rules table to the engine.

use crate::config::BattleConfig;

/// Provides access to the encounter rules table.
pub trait ConfigOracle: Send + Sync {
    fn rules(&self) -> &BattleConfig;
}

impl ConfigOracle for BattleConfig {
    fn rules(&self) -> &BattleConfig {
        self
    }
}
