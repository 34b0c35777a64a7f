//! Encounter state machine.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`EncounterState`].
//! One call resolves one full round:
//!
//! ```text
//! player action ──► opponent action ──► guard reset ──► status ticks ──► terminal check
//!       │                 (skipped if the opponent is down)
//!       ├─ not spent (MP gate, failed flee) ──► return, nothing else happens
//!       └─ fled ──► Terminated(Fled), no opponent action, no ticks
//! ```
//!
//! Every random draw comes from the state's own [`PcgRng`](crate::env::PcgRng)
//! unless the caller injects a source through [`BattleEngine::submit_with`].

mod errors;
#[cfg(feature = "serde")]
mod snapshot;

pub use errors::BattleError;

use crate::action::{self, ActionOutcome, ActionRequest};
use crate::config::BattleConfig;
use crate::env::{BattleEnv, RngSource};
use crate::opponent;
use crate::progression;
use crate::state::{Combatant, EncounterPhase, EncounterState, Outcome};
use crate::status;

/// Everything that happened during one submitted round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub player: ActionOutcome,
    /// `None` when the opponent did not get to act.
    pub opponent: Option<ActionOutcome>,
    pub phase: EncounterPhase,
    pub levels_gained: u32,
    pub drops: Vec<String>,
}

/// Drives one encounter in place.
pub struct BattleEngine<'a> {
    state: &'a mut EncounterState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut EncounterState) -> Self {
        Self { state }
    }

    /// Generates the opponent and enters `InProgress`.
    ///
    /// # Errors
    ///
    /// - `AlreadyStarted` unless the phase is `NotStarted`
    /// - `NoEligibleOpponent` if `exclude` removes every template
    /// - `Oracle` if the opponent or config oracle is missing
    pub fn start(&mut self, env: BattleEnv<'_>, exclude: &[String]) -> Result<(), BattleError> {
        let mut rng = self.state.rng;
        self.start_with(env, exclude, &mut rng)?;
        self.state.rng = rng;
        Ok(())
    }

    /// Same as [`start`](Self::start) with an injected random source.
    pub fn start_with(
        &mut self,
        env: BattleEnv<'_>,
        exclude: &[String],
        rng: &mut dyn RngSource,
    ) -> Result<(), BattleError> {
        if self.state.phase != EncounterPhase::NotStarted {
            return Err(BattleError::AlreadyStarted);
        }
        let opponents = env.opponents()?;
        let rules = env.config()?.rules();

        let opponent = opponent::generate(self.state.player.level, opponents, rules, exclude, rng)
            .ok_or(BattleError::NoEligibleOpponent)?;

        tracing::info!(
            player = %self.state.player.name,
            opponent = %opponent.name,
            level = opponent.level,
            "encounter started"
        );
        self.state.log.push(format!("{} appears!", opponent.name));
        self.state.opponent = Some(opponent);
        self.state.phase = EncounterPhase::InProgress;
        Ok(())
    }

    /// Resolves one player decision using the state's own random source.
    ///
    /// # Errors
    ///
    /// - `NoActiveEncounter` unless the phase is `InProgress`
    /// - `Oracle` if the action or config oracle is missing
    ///
    /// On error the state is left untouched.
    pub fn submit(
        &mut self,
        env: BattleEnv<'_>,
        request: &ActionRequest,
    ) -> Result<RoundReport, BattleError> {
        let mut rng = self.state.rng;
        let report = self.submit_with(env, request, &mut rng)?;
        self.state.rng = rng;
        Ok(report)
    }

    /// Same as [`submit`](Self::submit) with an injected random source.
    ///
    /// The state's persisted generator is not advanced.
    pub fn submit_with(
        &mut self,
        env: BattleEnv<'_>,
        request: &ActionRequest,
        rng: &mut dyn RngSource,
    ) -> Result<RoundReport, BattleError> {
        if !self.state.is_active() {
            return Err(BattleError::NoActiveEncounter);
        }
        let actions = env.actions()?;
        let rules = env.config()?.rules();

        let EncounterState {
            phase,
            player,
            opponent,
            turn,
            log,
            ..
        } = &mut *self.state;
        let Some(opponent) = opponent.as_mut() else {
            return Err(BattleError::MalformedSnapshot(
                "opponent missing from a started encounter".into(),
            ));
        };

        let player_outcome =
            action::resolve_player_action(request, player, opponent, actions, rules, rng);
        log.extend(player_outcome.lines.iter().cloned());

        let mut report = RoundReport {
            player: player_outcome,
            opponent: None,
            phase: *phase,
            levels_gained: 0,
            drops: Vec::new(),
        };

        if report.player.ended_encounter {
            *phase = EncounterPhase::Terminated(Outcome::Fled);
            report.phase = *phase;
            tracing::info!(player = %player.name, "encounter ended: fled");
            return Ok(report);
        }
        if !report.player.turn_spent {
            return Ok(report);
        }

        if opponent.is_alive() {
            let outcome = action::resolve_opponent_action(opponent, player, rules, rng);
            log.extend(outcome.lines.iter().cloned());
            report.opponent = Some(outcome);
        }
        player.guard = None;

        status::tick(player, log);
        status::tick(opponent, log);

        if !opponent.is_alive() {
            let (levels, drops) = award_victory(player, opponent, rules, rng, log);
            report.levels_gained = levels;
            report.drops = drops;
            *phase = EncounterPhase::Terminated(Outcome::Victory);
            tracing::info!(player = %player.name, opponent = %opponent.name, "encounter ended: victory");
        } else if !player.is_alive() {
            log.push(format!("{} has been defeated!", player.name));
            *phase = EncounterPhase::Terminated(Outcome::Defeat);
            tracing::info!(player = %player.name, opponent = %opponent.name, "encounter ended: defeat");
        } else {
            *turn += 1;
        }

        report.phase = *phase;
        Ok(report)
    }
}

/// Grants experience and rolls loot. Returns levels gained and dropped items.
fn award_victory(
    player: &mut Combatant,
    opponent: &mut Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
    log: &mut Vec<String>,
) -> (u32, Vec<String>) {
    let (award, loot) = match opponent.opponent.as_mut() {
        Some(payload) => (payload.exp_award, std::mem::take(&mut payload.loot)),
        None => (0, Vec::new()),
    };

    log.push(format!(
        "{} is defeated! {} gains {award} experience!",
        opponent.name, player.name
    ));

    let levels = progression::gain_experience(player, award, rules);
    if levels > 0 {
        log.push(format!("{} reached level {}!", player.name, player.level));
    }

    let drops = progression::roll_drops(&loot, rules, rng);
    for item in &drops {
        log.push(format!("{} dropped {item}!", opponent.name));
        player.items.push(item.clone());
    }
    if let Some(payload) = opponent.opponent.as_mut() {
        payload.loot = loot.into_iter().filter(|item| !drops.contains(item)).collect();
    }
    (levels, drops)
}

/// Creates a fresh encounter for `player` and starts it.
///
/// # Errors
///
/// `MalformedSnapshot` if `player` breaks an invariant, plus everything
/// [`BattleEngine::start`] returns.
pub fn start_encounter(
    player: Combatant,
    seed: u64,
    env: BattleEnv<'_>,
    exclude: &[String],
) -> Result<EncounterState, BattleError> {
    player.validate().map_err(BattleError::MalformedSnapshot)?;
    let mut state = EncounterState::new(player, seed);
    BattleEngine::new(&mut state).start(env, exclude)?;
    Ok(state)
}

/// Resolves one decision against a snapshot, returning the next snapshot.
///
/// The input is never modified.
pub fn submit_action(
    state: &EncounterState,
    request: &ActionRequest,
    env: BattleEnv<'_>,
) -> Result<EncounterState, BattleError> {
    let mut next = state.clone();
    BattleEngine::new(&mut next).submit(env, request)?;
    Ok(next)
}
