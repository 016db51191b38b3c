use salvo_sim::autopilot;
use salvo_sim::core::enums::{Difficulty, GameOutcome};
use salvo_sim::{Game, GameConfig};

fn run(config: GameConfig, turns: u32) -> Game {
    let mut game = Game::new(config).unwrap();
    for _ in 0..turns {
        if game.is_over() {
            break;
        }
        autopilot::act(&mut game);
        game.pass_turn();
        check_invariants(&game);
    }
    game
}

fn check_invariants(game: &Game) {
    assert!(game.deposit() >= 0, "deposit went negative at turn {}", game.turn());
    assert!(game.feedback().len() <= 15);
    for city in game.cities() {
        assert!(city.hitpoint() >= 0);
    }
    for cruise in game.missiles().cruise_missiles() {
        let pursued = cruise.pursued().unwrap();
        assert!(
            game.missiles().get(pursued).is_some(),
            "interceptor {} chases a removed missile",
            cruise.id()
        );
    }
    let ids: Vec<u32> = game.missiles().iter().map(|m| m.id().0).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "missile ids out of order");
    for m in game.missiles().iter() {
        assert!(m.is_exploded() || game.board().contains(m.position()));
    }
}

#[test]
fn test_autopilot_soak_all_difficulties() {
    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        let game = run(GameConfig::default().with_difficulty(difficulty), 400);
        assert!(game.turn() > 0);
    }
}

#[test]
fn test_whole_game_is_deterministic() {
    let a = run(GameConfig::default().with_seed(99), 300);
    let b = run(GameConfig::default().with_seed(99), 300);
    assert_eq!(
        serde_json::to_string(&a.snapshot()).unwrap(),
        serde_json::to_string(&b.snapshot()).unwrap()
    );
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_undefended_game_is_lost() {
    let mut game = Game::new(GameConfig::default().with_difficulty(Difficulty::Hard)).unwrap();
    let mut outcome = GameOutcome::Continue;
    for _ in 0..5000 {
        outcome = game.pass_turn();
        if outcome.is_over() {
            break;
        }
    }
    assert_eq!(outcome, GameOutcome::Lost);
    assert_eq!(game.alive_cities(), 0);
    assert!(game.score() <= -1000);

    let turn = game.turn();
    game.pass_turn();
    assert_eq!(game.turn(), turn);
}

#[test]
fn test_waves_every_forty_turns() {
    let mut config = GameConfig::default();
    for city in &mut config.cities {
        city.hitpoint = 50_000;
    }
    let mut game = Game::new(config).unwrap();
    let mut wave_turns = Vec::new();
    for _ in 0..121 {
        let before = game.missiles().next_id();
        let turn = game.turn();
        game.pass_turn();
        if game.missiles().next_id() > before {
            wave_turns.push(turn);
        }
    }
    assert_eq!(wave_turns, vec![0, 40, 80, 120]);
}
