//! One play session: a chain of encounters driven through JSON snapshots.
//!
//! The session keeps only the encoded snapshot between decisions. Every
//! decision decodes it, resolves one round, and encodes the result again, so
//! the engine never sees state that did not survive a round trip.

use anyhow::Result;
use battle_core::{
    ActionRequest, BattleEngine, BattleEnv, CatalogBundle, Combatant, EncounterState, Outcome,
    available_actions, compute_seed, start_encounter,
};

pub struct Session {
    bundle: CatalogBundle,
    base_seed: u64,
    encounters: u64,
    snapshot: String,
    /// Printed log entries of the current encounter.
    shown: usize,
}

impl Session {
    pub fn new(bundle: CatalogBundle, base_seed: u64) -> Self {
        Self {
            bundle,
            base_seed,
            encounters: 0,
            snapshot: String::new(),
            shown: 0,
        }
    }

    pub fn env(&self) -> BattleEnv<'_> {
        BattleEnv::from_bundle(&self.bundle)
    }

    /// Decodes the current snapshot.
    pub fn state(&self) -> Result<EncounterState> {
        Ok(EncounterState::from_json(&self.snapshot)?)
    }

    /// Starts the next encounter for `player`, avoiding the previous opponent
    /// when another template is available.
    pub fn begin(&mut self, player: Combatant) -> Result<Vec<String>> {
        let exclude = match self.state() {
            Ok(previous) => previous
                .opponent
                .and_then(|opponent| opponent.opponent)
                .map(|payload| vec![payload.template_id])
                .filter(|_| self.bundle.opponents.len() > 1)
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        };

        let seed = compute_seed(self.base_seed, self.encounters);
        let state = start_encounter(player, seed, self.env(), &exclude)?;
        self.encounters += 1;
        tracing::debug!(seed, encounter = self.encounters, "encounter seeded");

        self.shown = 0;
        self.store(&state)
    }

    /// Resolves one decision against the stored snapshot.
    pub fn decide(&mut self, request: &ActionRequest) -> Result<Vec<String>> {
        let mut state = self.state()?;
        BattleEngine::new(&mut state).submit(self.env(), request)?;
        self.store(&state)
    }

    /// The player to carry into the next encounter, if the last one allows it.
    pub fn survivor(&self) -> Result<Option<Combatant>> {
        let state = self.state()?;
        Ok(match state.outcome() {
            Some(Outcome::Victory | Outcome::Fled) => Some(state.persisted_player()),
            _ => None,
        })
    }

    /// Affordable actions of the player, one line per non-empty category.
    pub fn action_menu(&self) -> Result<Vec<String>> {
        let state = self.state()?;
        let book = available_actions(&state.player, &self.bundle);
        let mut menu = vec!["basic: attack, defend".to_string()];
        for (label, names) in [
            ("ability", &book.abilities),
            ("skill", &book.skills),
            ("blackMagic", &book.black_magic),
            ("whiteMagic", &book.white_magic),
        ] {
            if !names.is_empty() {
                menu.push(format!("{label}: {}", names.join(", ")));
            }
        }
        Ok(menu)
    }

    /// Encodes `state` and returns the log lines not printed yet.
    fn store(&mut self, state: &EncounterState) -> Result<Vec<String>> {
        self.snapshot = state.to_json()?;
        let fresh = state.log[self.shown.min(state.log.len())..].to_vec();
        self.shown = state.log.len();
        Ok(fresh)
    }
}
