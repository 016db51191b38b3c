use salvo_sim::autopilot;
use salvo_sim::core::enums::{BombKind, Capability, TechId};
use salvo_sim::core::error::GameError;
use salvo_sim::persistence::{from_snapshot, load_from_file, save_to_file, to_snapshot};
use salvo_sim::{Game, GameConfig};

/// Play a game long enough to have missiles, interceptors, research and
/// builds in flight.
fn played_game(turns: u32) -> Game {
    let mut game = Game::new(GameConfig::default().with_seed(2024)).unwrap();
    for _ in 0..turns {
        autopilot::act(&mut game);
        game.pass_turn();
    }
    game
}

/// Game view without the feedback log, which is not persisted.
fn view_json(game: &Game) -> String {
    let mut view = game.snapshot();
    view.feedback.clear();
    serde_json::to_string(&view).unwrap()
}

#[test]
fn test_round_trip_reproduces_state() {
    let game = played_game(42);
    assert!(!game.missiles().is_empty(), "expected the turn-40 wave in flight");

    let text = to_snapshot(&game);
    let restored = from_snapshot(&text, game.board().clone()).unwrap();

    assert_eq!(view_json(&restored), view_json(&game));
    assert_eq!(to_snapshot(&restored), text);
    assert_eq!(restored.capabilities(), game.capabilities());
    assert_eq!(restored.missiles().next_id(), game.missiles().next_id());
    assert_eq!(restored.tech().researched(), game.tech().researched());
    assert_eq!(restored.tech().available(), game.tech().available());
    assert_eq!(restored.tech().prev_researching(), game.tech().prev_researching());
    assert_eq!(restored.seed(), game.seed());
}

#[test]
fn test_round_trip_keeps_missile_linkage() {
    let game = played_game(43);
    let restored = from_snapshot(&to_snapshot(&game), game.board().clone()).unwrap();

    for cruise in restored.missiles().cruise_missiles() {
        let pursued = cruise.pursued().unwrap();
        let target = restored.missiles().get(pursued).unwrap();
        assert!(target.is_attack());
        assert!(target.is_aimed());
    }
    for (a, b) in game.missiles().iter().zip(restored.missiles().iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_restored_game_keeps_playing() {
    let game = played_game(30);
    let mut restored = from_snapshot(&to_snapshot(&game), game.board().clone()).unwrap();
    let turn = restored.turn();
    for _ in 0..60 {
        autopilot::act(&mut restored);
        restored.pass_turn();
    }
    assert!(restored.turn() > turn);
    // next_id keeps growing past every restored id
    let max_id = restored.missiles().iter().map(|m| m.id().0).max().unwrap_or(0);
    assert!(restored.missiles().next_id() > max_id);
}

#[test]
fn test_weapons_and_research_survive_reload() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    game.build_bomb(BombKind::Standard).unwrap();
    game.pass_turn();
    game.pass_turn();
    game.start_research(TechId::Radar).unwrap();
    for _ in 0..8 {
        game.pass_turn();
    }
    assert!(game.capabilities().has(Capability::MissileTargets));

    let restored = from_snapshot(&to_snapshot(&game), game.board().clone()).unwrap();
    assert_eq!(
        restored.weapons().counter(BombKind::Standard),
        game.weapons().counter(BombKind::Standard)
    );
    assert!(restored.capabilities().has(Capability::MissileTargets));
    assert_eq!(restored.tech().researched(), &[TechId::Radar]);
}

#[test]
fn test_file_round_trip() {
    let dir = std::env::temp_dir().join("salvo_test_file_round_trip");
    let _ = std::fs::remove_dir_all(&dir);

    let game = played_game(12);
    save_to_file(&dir, "slot1", &game).unwrap();
    let loaded = load_from_file(&dir, "slot1", game.board().clone()).unwrap();
    assert_eq!(view_json(&loaded), view_json(&game));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_truncated_snapshot_is_rejected() {
    let game = played_game(5);
    let text = to_snapshot(&game);
    let cut = text.split("[tech]").next().unwrap();
    let err = from_snapshot(cut, game.board().clone()).unwrap_err();
    assert!(matches!(err, GameError::MalformedSnapshot { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_city_names_round_trip_verbatim() {
    let mut config = GameConfig::default();
    config.cities[0].name = " Avalon".into();
    assert!(matches!(Game::new(config), Err(GameError::Config(_))));

    let mut config = GameConfig::default();
    config.cities[0].name = "Port Avalon".into();
    let game = Game::new(config).unwrap();
    let restored = from_snapshot(&to_snapshot(&game), game.board().clone()).unwrap();
    assert_eq!(restored.cities()[0].name(), "Port Avalon");

    let padded = to_snapshot(&game).replace("\nPort Avalon,", "\n Port Avalon,");
    let err = from_snapshot(&padded, game.board().clone()).unwrap_err();
    assert!(matches!(err, GameError::MalformedSnapshot { .. }));
}
