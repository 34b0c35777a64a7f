//! End-to-end encounter scenarios driven through the public engine API.

mod common;

use battle_core::{
    ActionCategory, ActionFailure, ActionRequest, BattleEngine, BattleEnv, BattleError,
    EffectDuration, EncounterPhase, EncounterState, OracleError, Outcome, Potency, ScriptedRng,
    StatusEffect, StatusKind, start_encounter, submit_action,
};
use common::{SEED, bundle, only};

fn started(class_id: &str, keep: &str) -> (battle_core::CatalogBundle, EncounterState) {
    let bundle = bundle();
    let env = BattleEnv::from_bundle(&bundle);
    let player = env.spawn_player(class_id).expect("class exists");
    let state = start_encounter(player, SEED, env, &only(keep)).expect("encounter starts");
    (bundle, state)
}

#[test]
fn start_announces_the_opponent() {
    let (_bundle, state) = started("warrior", "slime");

    assert_eq!(state.phase, EncounterPhase::InProgress);
    assert_eq!(state.turn, 0);
    assert_eq!(state.log, vec!["Slime appears!".to_string()]);

    let opponent = state.opponent.as_ref().expect("opponent generated");
    assert_eq!(opponent.level, 1);
    assert_eq!(opponent.opponent.as_ref().map(|p| p.exp_award), Some(120));
}

#[test]
fn starting_twice_is_rejected() {
    let (bundle, mut state) = started("warrior", "slime");
    let before = state.clone();

    let err = BattleEngine::new(&mut state)
        .start(BattleEnv::from_bundle(&bundle), &[])
        .unwrap_err();
    assert!(matches!(err, BattleError::AlreadyStarted));
    assert_eq!(state, before);
}

#[test]
fn victory_awards_experience_and_levels() {
    let (bundle, mut state) = started("warrior", "slime");
    let env = BattleEnv::from_bundle(&bundle);

    let report = BattleEngine::new(&mut state)
        .submit_with(env, &ActionRequest::attack(), &mut ScriptedRng::constant(u32::MAX))
        .expect("round resolves");

    assert_eq!(report.phase, EncounterPhase::Terminated(Outcome::Victory));
    assert!(report.opponent.is_none(), "a defeated opponent does not act");
    assert_eq!(report.levels_gained, 1);
    assert!(report.drops.is_empty());

    assert_eq!(state.outcome(), Some(Outcome::Victory));
    assert_eq!(state.turn, 0);
    assert_eq!(state.player.level, 2);
    assert_eq!(state.player.experience, 20);
    assert_eq!(state.player.hp.current, 880);
    assert!(
        state
            .log
            .contains(&"Slime is defeated! Warrior gains 120 experience!".to_string())
    );
}

#[test]
fn victory_rolls_drops_into_the_inventory() {
    let (bundle, mut state) = started("warrior", "slime");
    let env = BattleEnv::from_bundle(&bundle);

    let report = BattleEngine::new(&mut state)
        .submit_with(env, &ActionRequest::attack(), &mut ScriptedRng::constant(0))
        .expect("round resolves");

    assert_eq!(report.drops, vec!["Jelly".to_string()]);
    assert_eq!(state.player.items, vec!["Jelly".to_string()]);
}

#[test]
fn defeat_when_the_player_falls() {
    let bundle = bundle();
    let env = BattleEnv::from_bundle(&bundle);
    let mut player = env.spawn_player("warrior").expect("class exists");
    player.hp.current = 1;
    let mut state = start_encounter(player, SEED, env, &only("troll")).expect("encounter starts");

    let report = BattleEngine::new(&mut state)
        .submit_with(env, &ActionRequest::attack(), &mut ScriptedRng::constant(u32::MAX))
        .expect("round resolves");

    assert_eq!(report.phase, EncounterPhase::Terminated(Outcome::Defeat));
    assert!(report.opponent.is_some());
    assert_eq!(state.player.hp.current, 0);
    assert_eq!(state.log.last().map(String::as_str), Some("Warrior has been defeated!"));

    let err = submit_action(&state, &ActionRequest::attack(), env).unwrap_err();
    assert!(matches!(err, BattleError::NoActiveEncounter));
}

#[test]
fn successful_flee_ends_without_an_opponent_turn() {
    let (bundle, mut state) = started("rogue", "troll");
    let env = BattleEnv::from_bundle(&bundle);
    let hp_before = state.player.hp.current;

    let report = BattleEngine::new(&mut state)
        .submit_with(
            env,
            &ActionRequest::new(ActionCategory::Skill, "Flee"),
            &mut ScriptedRng::constant(0),
        )
        .expect("round resolves");

    assert_eq!(report.phase, EncounterPhase::Terminated(Outcome::Fled));
    assert!(report.opponent.is_none());
    assert_eq!(state.player.hp.current, hp_before);
    assert_eq!(state.player.mp.current, 66);
    assert_eq!(state.turn, 0);
    assert_eq!(state.log.last().map(String::as_str), Some("Thief fled from battle!"));

    let before = state.clone();
    let err = BattleEngine::new(&mut state)
        .submit(env, &ActionRequest::attack())
        .unwrap_err();
    assert!(matches!(err, BattleError::NoActiveEncounter));
    assert_eq!(state, before);
}

#[test]
fn failed_flee_spends_mp_without_an_opponent_turn() {
    let (bundle, mut state) = started("rogue", "troll");
    let env = BattleEnv::from_bundle(&bundle);

    let report = BattleEngine::new(&mut state)
        .submit_with(
            env,
            &ActionRequest::new(ActionCategory::Skill, "Flee"),
            &mut ScriptedRng::constant(u32::MAX),
        )
        .expect("round resolves");

    assert_eq!(report.player.failure, Some(ActionFailure::FleeFailed));
    assert!(!report.player.turn_spent);
    assert!(report.opponent.is_none());
    assert_eq!(state.phase, EncounterPhase::InProgress);
    assert_eq!(state.turn, 0);
    assert_eq!(state.player.hp.current, 690);
    assert_eq!(state.player.mp.current, 66);
    assert_eq!(state.log.last().map(String::as_str), Some("Thief couldn't escape!"));
}

#[test]
fn sleeping_player_loses_the_round_but_the_opponent_acts() {
    let (bundle, mut state) = started("warrior", "troll");
    let env = BattleEnv::from_bundle(&bundle);
    state.player.status.attach(StatusEffect::new(
        StatusKind::Sleep,
        EffectDuration::Turns(3),
        Potency::Flat(0),
    ));

    let report = BattleEngine::new(&mut state)
        .submit_with(env, &ActionRequest::attack(), &mut ScriptedRng::constant(u32::MAX))
        .expect("round resolves");

    assert!(!report.player.success);
    assert_eq!(
        report.player.failure,
        Some(ActionFailure::Incapacitated(StatusKind::Sleep))
    );
    assert!(report.opponent.is_some_and(|outcome| outcome.damage > 0));
    assert_eq!(state.turn, 1);
    assert_eq!(state.player.mp.current, 56);
    assert!(!state.player.status.has(StatusKind::Sleep));
    assert_eq!(state.opponent.as_ref().map(|o| o.hp.current), Some(5000));
}

#[test]
fn defend_softens_the_next_enemy_hit_then_reverts() {
    let (bundle, state) = started("warrior", "troll");
    let env = BattleEnv::from_bundle(&bundle);

    let mut open = state.clone();
    let cheered = BattleEngine::new(&mut open)
        .submit_with(
            env,
            &ActionRequest::new(ActionCategory::Ability, "Cheer"),
            &mut ScriptedRng::constant(u32::MAX),
        )
        .expect("round resolves");

    let mut guarded = state.clone();
    let defended = BattleEngine::new(&mut guarded)
        .submit_with(env, &ActionRequest::defend(), &mut ScriptedRng::constant(u32::MAX))
        .expect("round resolves");

    let open_damage = cheered.opponent.map(|o| o.damage).unwrap_or_default();
    let guarded_damage = defended.opponent.map(|o| o.damage).unwrap_or_default();
    // 5 extra defense removes 5 * 0.875 from the same roll
    assert_eq!(open_damage - guarded_damage, 4);
    assert_eq!(guarded.player.guard, None);
    assert_eq!(open.player.guard, None);
}

#[test]
fn guard_reverts_even_when_the_enemy_misses() {
    let (bundle, mut state) = started("warrior", "troll");
    let env = BattleEnv::from_bundle(&bundle);
    if let Some(troll) = state.opponent.as_mut() {
        troll.status.attach(StatusEffect::new(
            StatusKind::Blind,
            EffectDuration::Turns(3),
            Potency::Flat(50),
        ));
    }

    // the only draw this round is the blind roll
    let mut rng = ScriptedRng::new(vec![ScriptedRng::raw_for(0.1)], u32::MAX);
    let report = BattleEngine::new(&mut state)
        .submit_with(env, &ActionRequest::defend(), &mut rng)
        .expect("round resolves");

    assert!(report.opponent.is_some_and(|outcome| outcome.missed));
    assert_eq!(rng.draws(), 1);
    assert_eq!(state.player.hp.current, 840);
    assert_eq!(state.player.guard, None);
    assert_eq!(state.turn, 1);
}

#[test]
fn mp_gate_leaves_the_turn_open() {
    let bundle = bundle();
    let env = BattleEnv::from_bundle(&bundle);
    let mut player = env.spawn_player("mage").expect("class exists");
    player.mp.current = 0;
    let mut state = start_encounter(player, SEED, env, &only("troll")).expect("encounter starts");
    let rng_before = state.rng;

    let report = BattleEngine::new(&mut state)
        .submit(env, &ActionRequest::parse("blackMagic", "fire"))
        .expect("round resolves");

    assert!(!report.player.turn_spent);
    assert!(report.opponent.is_none());
    assert_eq!(state.phase, EncounterPhase::InProgress);
    assert_eq!(state.turn, 0);
    assert_eq!(state.rng, rng_before);
    assert_eq!(state.player.hp.current, 572);
    assert_eq!(state.log.last().map(String::as_str), Some("Not enough MP! (Need 4 MP)"));
}

#[test]
fn same_seed_same_decisions_same_state() {
    let (bundle, first) = started("warrior", "troll");
    let (_, second) = started("warrior", "troll");
    let env = BattleEnv::from_bundle(&bundle);

    let a = submit_action(&first, &ActionRequest::attack(), env).expect("round resolves");
    let b = submit_action(&second, &ActionRequest::attack(), env).expect("round resolves");
    assert_eq!(a, b);
    assert_ne!(a, first, "the input snapshot is not modified in place");
}

#[test]
fn resuming_from_json_matches_uninterrupted_play() {
    let (bundle, state) = started("warrior", "troll");
    let env = BattleEnv::from_bundle(&bundle);

    let direct = submit_action(&state, &ActionRequest::attack(), env).expect("round resolves");

    let json = state.to_json().expect("encodes");
    let resumed = EncounterState::from_json(&json).expect("decodes");
    let replayed = submit_action(&resumed, &ActionRequest::attack(), env).expect("round resolves");

    assert_eq!(direct, replayed);
}

#[test]
fn json_round_trip_is_byte_identical() {
    let (bundle, state) = started("mage", "troll");
    let env = BattleEnv::from_bundle(&bundle);
    let state = submit_action(&state, &ActionRequest::defend(), env).expect("round resolves");

    let json = state.to_json().expect("encodes");
    let decoded = EncounterState::from_json(&json).expect("decodes");
    assert_eq!(decoded, state);
    assert_eq!(decoded.to_json().expect("encodes"), json);
}

#[test]
fn malformed_snapshots_are_refused() {
    let (_bundle, state) = started("warrior", "slime");
    let json = state.to_json().expect("encodes");

    let stale = json.replacen("\"version\":1", "\"version\":7", 1);
    assert!(matches!(
        EncounterState::from_json(&stale),
        Err(BattleError::MalformedSnapshot(_))
    ));
    assert!(matches!(
        EncounterState::from_json("{\"version\":1}"),
        Err(BattleError::MalformedSnapshot(_))
    ));
    assert!(matches!(
        EncounterState::from_json("not json"),
        Err(BattleError::MalformedSnapshot(_))
    ));
}

#[test]
fn digest_tracks_state_changes() {
    let (bundle, state) = started("warrior", "troll");
    let env = BattleEnv::from_bundle(&bundle);

    let digest = state.digest().expect("digest");
    assert_eq!(digest, state.clone().digest().expect("digest"));
    assert_eq!(hex::encode(digest).len(), 64);

    let next = submit_action(&state, &ActionRequest::attack(), env).expect("round resolves");
    assert_ne!(next.digest().expect("digest"), digest);
}

#[test]
fn exhausted_catalog_has_no_eligible_opponent() {
    let bundle = bundle();
    let env = BattleEnv::from_bundle(&bundle);
    let player = env.spawn_player("warrior").expect("class exists");
    let exclude = vec!["slime".to_string(), "troll".to_string()];

    let err = start_encounter(player, SEED, env, &exclude).unwrap_err();
    assert!(matches!(err, BattleError::NoEligibleOpponent));
}

#[test]
fn missing_oracles_are_reported() {
    let bundle = bundle();
    let player = BattleEnv::from_bundle(&bundle)
        .spawn_player("warrior")
        .expect("class exists");

    let err = start_encounter(player, SEED, BattleEnv::empty(), &[]).unwrap_err();
    assert!(matches!(
        err,
        BattleError::Oracle(OracleError::OpponentsNotAvailable)
    ));

    let err = BattleEnv::from_bundle(&bundle)
        .spawn_player("paladin")
        .unwrap_err();
    assert_eq!(err, OracleError::ClassNotFound("paladin".into()));
}
