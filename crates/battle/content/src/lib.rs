//! Data-driven battle content and its loaders.
//!
//! Reads the shipped catalogs from a data directory:
//! - Playable classes (`classes.ron`)
//! - Opponent templates (`opponents.ron`)
//! - Abilities, skills and spells (`actions.ron`)
//! - Rules table overrides (`rules.toml`)
//!
//! [`ContentFactory`] assembles them into one [`battle_core::CatalogBundle`],
//! which backs every oracle of a [`battle_core::BattleEnv`]. Content never
//! appears in encounter snapshots.

pub mod loaders;

pub use loaders::{ActionLoader, ClassLoader, ConfigLoader, ContentFactory, OpponentLoader};
