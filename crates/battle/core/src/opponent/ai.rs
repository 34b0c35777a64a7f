//! Opponent decision making.

use crate::config::BattleConfig;
use crate::env::RngSource;
use crate::state::{Combatant, StatusKind};

/// What the opponent does on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpponentMove {
    Attack,
    Signature(String),
}

/// Picks the opponent's move.
///
/// The signature move is only considered while HP is below the configured
/// ratio, a signature exists and the opponent is not provoked. Even then it
/// is used with the configured probability. No random value is drawn unless
/// all three conditions hold.
pub fn choose_move(
    opponent: &Combatant,
    rules: &BattleConfig,
    rng: &mut dyn RngSource,
) -> OpponentMove {
    let Some(signature) = opponent
        .opponent
        .as_ref()
        .and_then(|payload| payload.signature_move.as_deref())
    else {
        return OpponentMove::Attack;
    };

    let hurt = opponent.hp.ratio() < rules.signature_hp_ratio;
    let provoked = opponent.status.has(StatusKind::Provoke);
    if hurt && !provoked && rng.chance(rules.signature_chance) {
        return OpponentMove::Signature(signature.to_owned());
    }
    OpponentMove::Attack
}
