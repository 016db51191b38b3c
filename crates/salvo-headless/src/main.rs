//! Headless SALVO runner.
//!
//! Plays a game with the built-in defensive autopilot, without a frontend.
//! Used for balance checks, soak runs and producing snapshots.
//!
//! # Usage
//!
//! ```bash
//! # Default scenario, 500 turns
//! cargo run -p salvo-headless -- --turns 500
//!
//! # Custom map on hard, save the result into ./saves/slot1.sav
//! cargo run -p salvo-headless -- --config map.json --difficulty hard --save-dir saves --slot slot1
//!
//! # Resume that save and dump the final view
//! cargo run -p salvo-headless -- --save-dir saves --slot slot1 --load --json
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`). The final view goes to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use salvo_core::enums::Difficulty;
use salvo_core::error::Result;
use salvo_sim::{autopilot, persistence, Game, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "salvo-headless")]
#[command(about = "Headless SALVO runner driven by the defensive autopilot")]
#[command(version)]
struct Cli {
    /// Scenario JSON (cities, terrain, seed, difficulty)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the difficulty: 1-3 or easy/normal/hard
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Maximum turns to play
    #[arg(short, long, default_value = "1000")]
    turns: u32,

    /// Directory holding save slots
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Save slot name
    #[arg(long, default_value = "autosave")]
    slot: String,

    /// Resume from the slot instead of starting a new game
    #[arg(long, requires = "save_dir")]
    load: bool,

    /// Print the final game view as JSON
    #[arg(long)]
    json: bool,
}

fn parse_difficulty(s: &str) -> std::result::Result<Difficulty, String> {
    if let Ok(level) = s.parse::<u8>() {
        return Difficulty::from_level(level).ok_or_else(|| format!("no difficulty level {level}"));
    }
    match s.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "normal" => Ok(Difficulty::Normal),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!("unknown difficulty '{other}'")),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    Ok(config)
}

fn start(cli: &Cli, config: GameConfig) -> Result<Game> {
    match (&cli.save_dir, cli.load) {
        (Some(dir), true) => {
            let game = persistence::load_from_file(dir, &cli.slot, config.board())?;
            info!(slot = %cli.slot, turn = game.turn(), "resumed");
            Ok(game)
        }
        _ => Game::new(config),
    }
}

/// Autopilot plus pass_turn until the limit or the game ends.
fn play(game: &mut Game, turns: u32) {
    for _ in 0..turns {
        if game.is_over() {
            break;
        }
        autopilot::act(game);
        game.pass_turn();
        if game.turn() % 100 == 0 {
            info!(
                turn = game.turn(),
                deposit = game.deposit(),
                score = game.score(),
                cities = game.alive_cities(),
                enemy = game.enemy_hitpoint(),
                "progress"
            );
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let mut game = start(&cli, config)?;
    let from = game.turn();

    play(&mut game, cli.turns);
    info!(
        turns = game.turn() - from,
        outcome = game.outcome().as_str(),
        score = game.score(),
        "finished"
    );

    if let Some(dir) = &cli.save_dir {
        persistence::save_to_file(dir, &cli.slot, &game)?;
    }

    if cli.json {
        match serde_json::to_string_pretty(&game.snapshot()) {
            Ok(text) => println!("{text}"),
            Err(e) => error!("failed to serialize view: {e}"),
        }
    } else {
        println!(
            "turn {} | {} | score {} | casualties {} | cities {}/{} | enemy hp {}",
            game.turn(),
            game.outcome().as_str(),
            game.score(),
            game.casualties(),
            game.alive_cities(),
            game.cities().len(),
            game.enemy_hitpoint()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_accepts_levels_and_names() {
        assert_eq!(parse_difficulty("1"), Ok(Difficulty::Easy));
        assert_eq!(parse_difficulty("Hard"), Ok(Difficulty::Hard));
        assert!(parse_difficulty("4").is_err());
        assert!(parse_difficulty("brutal").is_err());
    }

    #[test]
    fn overrides_apply_to_default_scenario() {
        let cli = Cli::try_parse_from(["salvo-headless", "--seed", "9", "-d", "3"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(cli.turns, 1000);
    }

    #[test]
    fn load_needs_a_save_dir() {
        assert!(Cli::try_parse_from(["salvo-headless", "--load"]).is_err());
    }

    #[test]
    fn short_run_plays_turns() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        play(&mut game, 25);
        assert_eq!(game.turn(), 25);
    }
}
