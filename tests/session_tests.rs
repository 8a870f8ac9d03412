//! Session controller tests.
//!
//! These tests drive full games through `Session`:
//! - Encounters cleared in order with the same player
//! - Win and loss detection
//! - Monster ids unique across the whole game
//! - Text commands routed through `execute`

use spire_engine::{
    Card, Character, CombatConfig, Command, EngineError, GameDefinition, GameRng, MonsterBrain,
    MonsterId, Pile, Player, Response, Session, SessionStatus,
};

fn session(player: Player, json: &str, seed: u64) -> Session {
    let game = GameDefinition::from_json_str(json).unwrap();
    Session::new(player, game, CombatConfig::new(), seed).unwrap()
}

/// A single Louse with 1 hp dies to one Strike and the game is won.
#[test]
fn test_one_strike_wins() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [[{"kind": "Louse", "max_hp": 1}]]}"#,
        42,
    );

    let outcome = game.play("Strike", Some(MonsterId(0))).unwrap();

    assert_eq!(outcome.report.damage, Some(6));
    assert!(outcome.report.defeated);
    assert_eq!(outcome.status, SessionStatus::GameWon);
    assert!(game.is_over());
    assert_eq!(game.encounters_cleared(), 1);
    assert_eq!(game.remaining_encounters(), 0);
}

/// The player's piles carry over from one encounter to the next.
#[test]
fn test_deck_persists_between_encounters() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [[{"kind": "Louse", "max_hp": 6}], [{"kind": "Louse", "max_hp": 6}]]}"#,
        42,
    );
    assert_eq!(game.player().hand(), &[Card::Strike; 5]);

    let outcome = game.play("Strike", Some(MonsterId(0))).unwrap();
    assert_eq!(outcome.status, SessionStatus::EncounterCleared);
    assert_eq!(game.status(), SessionStatus::EncounterCleared);

    // The rest of the deck is drawn first; the Strikes went to the back
    assert_eq!(
        game.player().hand(),
        &[Card::Defend, Card::Defend, Card::Defend, Card::Defend, Card::Bash]
    );
    assert_eq!(game.player().deck(), &[Card::Strike; 5]);
    assert_eq!(game.player().energy(), 3);
    assert_eq!(game.encounter().monster_ids(), vec![MonsterId(1)]);

    let outcome = game.play("Bash", Some(MonsterId(1))).unwrap();
    assert_eq!(outcome.report.damage, Some(7));
    assert_eq!(outcome.status, SessionStatus::GameWon);
    assert_eq!(game.player().piles().total_cards(), 10);
}

/// Damage taken in one encounter is not healed for the next.
#[test]
fn test_hp_persists_between_encounters() {
    let mut game = session(
        Player::from_character(Character::Silent),
        r#"{"encounters": [
            [{"kind": "JawWorm", "max_hp": 12}],
            [{"kind": "Cultist", "max_hp": 30}]
        ]}"#,
        1,
    );

    game.play("Strike", Some(MonsterId(0))).unwrap();
    let turn = game.end_turn().unwrap();

    // Worm took 6, hits back for 3 and blocks 3
    assert_eq!(turn.actions[0].damage, 3);
    assert_eq!(turn.status, SessionStatus::InProgress);
    assert_eq!(game.player().stats().hp(), 67);
    assert_eq!(game.encounter().monsters()[0].stats().block(), 3);

    while game.status() == SessionStatus::InProgress {
        let card = game
            .player()
            .hand()
            .iter()
            .copied()
            .find(|card| card.damage() > 0 && card.energy_cost() <= game.player().energy());
        match card {
            Some(card) => {
                game.play(card.name(), Some(MonsterId(0))).unwrap();
            }
            None => {
                game.end_turn().unwrap();
            }
        }
    }

    assert_eq!(game.status(), SessionStatus::EncounterCleared);
    assert!(game.player().stats().hp() < 70);
    assert_eq!(game.player().stats().max_hp(), 70);
}

/// A player reduced to 0 hp loses the game.
#[test]
fn test_player_defeat_loses_game() {
    let mut game = session(
        Player::new(5, Character::Silent.starting_deck()),
        r#"{"encounters": [[{"kind": "Louse", "max_hp": 50}, {"kind": "Louse", "max_hp": 50}]]}"#,
        9,
    );

    let outcome = game.end_turn().unwrap();

    assert_eq!(outcome.status, SessionStatus::GameLost);
    // The second louse never acts
    assert_eq!(outcome.actions.len(), 1);
    assert_eq!(game.player().stats().hp(), 0);
    assert!(game.is_over());
}

/// Nothing but inspection works after the game has ended.
#[test]
fn test_actions_rejected_after_game_over() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [[{"kind": "Louse", "max_hp": 1}]]}"#,
        42,
    );
    game.play("Strike", Some(MonsterId(0))).unwrap();

    assert!(matches!(game.play("Strike", Some(MonsterId(0))), Err(EngineError::SessionOver)));
    assert!(matches!(game.end_turn(), Err(EngineError::SessionOver)));
    assert!(matches!(game.execute(Command::EndTurn), Err(EngineError::SessionOver)));
    assert!(game.execute(Command::Inspect(Pile::Discard)).is_ok());
}

/// Monster ids keep counting across encounters.
#[test]
fn test_monster_ids_unique_across_encounters() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [
            [{"kind": "Louse", "max_hp": 1}, {"kind": "Louse", "max_hp": 1}],
            [{"kind": "Cultist", "max_hp": 1}]
        ]}"#,
        3,
    );
    assert_eq!(game.encounter().monster_ids(), vec![MonsterId(0), MonsterId(1)]);

    let first = game.play("Strike", Some(MonsterId(0))).unwrap();
    assert_eq!(first.status, SessionStatus::InProgress);
    let second = game.play("Strike", Some(MonsterId(1))).unwrap();
    assert_eq!(second.status, SessionStatus::EncounterCleared);

    assert_eq!(game.encounter().monster_ids(), vec![MonsterId(2)]);
}

/// A failed play leaves the session exactly where it was.
#[test]
fn test_failed_play_keeps_status() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [[{"kind": "Cultist", "max_hp": 40}]]}"#,
        42,
    );
    let before = game.player().clone();

    assert!(matches!(game.play("Bash", Some(MonsterId(0))), Err(EngineError::CardNotInHand(_))));
    assert!(matches!(game.play("Strike", None), Err(EngineError::MissingRequiredTarget(_))));
    assert!(matches!(
        game.play("Strike", Some(MonsterId(5))),
        Err(EngineError::InvalidTargetId(MonsterId(5)))
    ));

    assert_eq!(game.player(), &before);
    assert_eq!(game.status(), SessionStatus::InProgress);
}

/// The same seed spawns the same monsters.
#[test]
fn test_seed_is_deterministic() {
    let json = r#"{"encounters": [
        [{"kind": "Louse", "max_hp": 10}, {"kind": "Louse", "max_hp": 10}]
    ]}"#;
    let a = session(Player::from_character(Character::Ironclad), json, 1234);
    let b = session(Player::from_character(Character::Ironclad), json, 1234);

    let brains = |s: &Session| -> Vec<MonsterBrain> {
        s.encounter().monsters().iter().map(|m| m.brain().clone()).collect()
    };
    assert_eq!(brains(&a), brains(&b));
}

/// A restored RNG snapshot spawns the same monsters as the original.
#[test]
fn test_rng_snapshot_replays_spawns() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [
            [{"kind": "Louse", "max_hp": 1}],
            [{"kind": "Louse", "max_hp": 10}, {"kind": "Louse", "max_hp": 10}]
        ]}"#,
        77,
    );
    let snapshot = game.rng_state();

    game.play("Strike", Some(MonsterId(0))).unwrap();
    assert_eq!(game.status(), SessionStatus::EncounterCleared);

    let replay = Session::with_rng(
        Player::from_character(Character::Ironclad),
        GameDefinition::from_json_str(
            r#"{"encounters": [
                [{"kind": "Louse", "max_hp": 10}, {"kind": "Louse", "max_hp": 10}]
            ]}"#,
        )
        .unwrap(),
        CombatConfig::new(),
        GameRng::from_state(&snapshot),
    )
    .unwrap();

    let brains = |s: &Session| -> Vec<MonsterBrain> {
        s.encounter().monsters().iter().map(|m| m.brain().clone()).collect()
    };
    assert_eq!(brains(&game), brains(&replay));
    assert_eq!(replay.rng_state().seed, 77);
}

/// Louse damage is drawn from the configured range.
#[test]
fn test_louse_damage_in_range() {
    for seed in 0..64 {
        let game = session(
            Player::from_character(Character::Ironclad),
            r#"{"encounters": [[{"kind": "Louse", "max_hp": 10}]]}"#,
            seed,
        );
        let intent = game.encounter().monsters()[0].peek_intent();
        assert!((5..=7).contains(&intent.damage), "seed {} gave {}", seed, intent.damage);
    }

    let game = Session::new(
        Player::from_character(Character::Ironclad),
        GameDefinition::from_json_str(r#"{"encounters": [[{"kind": "Louse", "max_hp": 10}]]}"#)
            .unwrap(),
        CombatConfig::new().with_louse_damage(2, 2),
        5,
    )
    .unwrap();
    assert_eq!(game.encounter().monsters()[0].peek_intent().damage, 2);
}

/// Text commands drive the same operations as the direct API.
#[test]
fn test_text_commands() {
    let mut game = session(
        Player::from_character(Character::Ironclad),
        r#"{"encounters": [[{"kind": "Louse", "max_hp": 20}]]}"#,
        42,
    );

    let response = game.execute("play Strike 0".parse().unwrap()).unwrap();
    let Response::Played(outcome) = response else {
        panic!("expected a play, got {:?}", response);
    };
    assert_eq!(outcome.report.damage, Some(6));

    let response = game.execute("inspect discard".parse().unwrap()).unwrap();
    assert_eq!(
        response,
        Response::Pile {
            pile: Pile::Discard,
            cards: vec![Card::Strike],
        }
    );

    let response = game.execute("end turn".parse().unwrap()).unwrap();
    let Response::TurnEnded(turn) = response else {
        panic!("expected end of turn, got {:?}", response);
    };
    assert_eq!(turn.actions.len(), 1);
    assert_eq!(game.encounter().turn(), 2);
}
