//! Traits describing read-only catalog data.
//!
//! Oracles expose class templates, opponent templates, action definitions and
//! the rules table. The [`Env`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod actions;
mod catalog;
mod classes;
mod config;
mod error;
mod opponents;
mod rng;

pub use actions::{
    AbilityDefinition, AbilityEffect, ActionCatalog, ActionOracle, SkillDefinition, SkillEffect,
    SpellDefinition, SpellSchool, SpellTarget,
};
pub use catalog::CatalogBundle;
pub use classes::{ClassOracle, ClassTemplate};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use opponents::{BaseStats, OpponentOracle, OpponentTemplate};
pub use rng::{PcgRng, RngSource, ScriptedRng, compute_seed};

/// Aggregates read-only oracles required by the engine and action resolver.
#[derive(Debug)]
pub struct Env<'a, O, K, A, C>
where
    O: OpponentOracle + ?Sized,
    K: ClassOracle + ?Sized,
    A: ActionOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    opponents: Option<&'a O>,
    classes: Option<&'a K>,
    actions: Option<&'a A>,
    config: Option<&'a C>,
}

pub type BattleEnv<'a> = Env<
    'a,
    dyn OpponentOracle + 'a,
    dyn ClassOracle + 'a,
    dyn ActionOracle + 'a,
    dyn ConfigOracle + 'a,
>;

impl<'a, O, K, A, C> Env<'a, O, K, A, C>
where
    O: OpponentOracle + ?Sized,
    K: ClassOracle + ?Sized,
    A: ActionOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(
        opponents: Option<&'a O>,
        classes: Option<&'a K>,
        actions: Option<&'a A>,
        config: Option<&'a C>,
    ) -> Self {
        Self {
            opponents,
            classes,
            actions,
            config,
        }
    }

    pub fn with_all(opponents: &'a O, classes: &'a K, actions: &'a A, config: &'a C) -> Self {
        Self::new(Some(opponents), Some(classes), Some(actions), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            opponents: None,
            classes: None,
            actions: None,
            config: None,
        }
    }

    /// Returns the OpponentOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::OpponentsNotAvailable` if no opponent oracle was provided.
    pub fn opponents(&self) -> Result<&'a O, OracleError> {
        self.opponents.ok_or(OracleError::OpponentsNotAvailable)
    }

    /// Returns the ClassOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClassesNotAvailable` if no class oracle was provided.
    pub fn classes(&self) -> Result<&'a K, OracleError> {
        self.classes.ok_or(OracleError::ClassesNotAvailable)
    }

    /// Returns the ActionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ActionsNotAvailable` if no action oracle was provided.
    pub fn actions(&self) -> Result<&'a A, OracleError> {
        self.actions.ok_or(OracleError::ActionsNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

// Manual impls: derived ones would require the oracle types to be `Clone`.
impl<O, K, A, C> Clone for Env<'_, O, K, A, C>
where
    O: OpponentOracle + ?Sized,
    K: ClassOracle + ?Sized,
    A: ActionOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, K, A, C> Copy for Env<'_, O, K, A, C>
where
    O: OpponentOracle + ?Sized,
    K: ClassOracle + ?Sized,
    A: ActionOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

impl<'a> BattleEnv<'a> {
    /// Backs every oracle with the same catalog bundle.
    pub fn from_bundle(bundle: &'a CatalogBundle) -> Self {
        Self::with_all(bundle, bundle, bundle, bundle)
    }

    /// Instantiates a player from a class template.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClassNotFound` for an unknown class id.
    pub fn spawn_player(&self, class_id: &str) -> Result<crate::state::Combatant, OracleError> {
        self.classes()?
            .class(class_id)
            .map(ClassTemplate::to_combatant)
            .ok_or_else(|| OracleError::ClassNotFound(class_id.to_owned()))
    }
}
