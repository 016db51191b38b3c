//! Game configuration: seed, difficulty, cities and terrain.
//!
//! Missing fields in a JSON config fall back to the built-in scenario.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use salvo_core::enums::Difficulty;
use salvo_core::error::{GameError, Result};
use salvo_core::types::Position;

use crate::board::Board;
use crate::city::CityDef;
use crate::scenario;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same commands give the same game.
    pub seed: u64,
    pub difficulty: Difficulty,
    pub cities: Vec<CityDef>,
    /// Terrain rows: ' ' land, '~' sea, '#' city.
    pub terrain: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: scenario::DEFAULT_SEED,
            difficulty: Difficulty::default(),
            cities: scenario::default_cities(),
            terrain: scenario::default_terrain(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn board(&self) -> Board {
        Board::from_lines(&self.terrain)
    }

    /// Reject configs the simulation cannot run or persist: no cities, bad or
    /// duplicate names, non-positive hitpoints, cities off the board.
    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(GameError::Config("at least one city is required".into()));
        }
        let board = self.board();
        let mut names = HashSet::new();
        for city in &self.cities {
            if city.name.trim().is_empty()
                || city.name.trim() != city.name
                || city.name.contains([',', '\n'])
            {
                return Err(GameError::Config(format!("invalid city name {:?}", city.name)));
            }
            if !names.insert(city.name.as_str()) {
                return Err(GameError::Config(format!("duplicate city name {}", city.name)));
            }
            if city.hitpoint <= 0 {
                return Err(GameError::Config(format!(
                    "{} must start with positive hitpoint",
                    city.name
                )));
            }
            if !board.contains(Position::new(city.y, city.x)) {
                return Err(GameError::Config(format!(
                    "{} at ({}, {}) lies outside the {}x{} board",
                    city.name,
                    city.y,
                    city.x,
                    board.height(),
                    board.width()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = GameConfig::from_json_str(r#"{ "seed": 7, "difficulty": "Hard" }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.cities, GameConfig::default().cities);
    }

    #[test]
    fn custom_cities_and_terrain() {
        let json = r#"{
            "cities": [{ "name": "Port", "y": 1, "x": 2, "hitpoint": 500 }],
            "terrain": ["~~~~", "~ # ", "    "]
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();
        assert_eq!(config.board().size(), Position::new(3, 4));
        assert_eq!(config.cities[0].name, "Port");
    }

    #[test]
    fn rejects_bad_configs() {
        let off_board = r#"{ "cities": [{ "name": "Far", "y": 99, "x": 0, "hitpoint": 500 }] }"#;
        assert!(matches!(GameConfig::from_json_str(off_board), Err(GameError::Config(_))));

        let duplicate = r#"{ "cities": [
            { "name": "A", "y": 1, "x": 5, "hitpoint": 500 },
            { "name": "A", "y": 2, "x": 5, "hitpoint": 500 }
        ] }"#;
        assert!(matches!(GameConfig::from_json_str(duplicate), Err(GameError::Config(_))));

        let padded = r#"{ "cities": [{ "name": "Avalon ", "y": 5, "x": 12, "hitpoint": 500 }] }"#;
        assert!(matches!(GameConfig::from_json_str(padded), Err(GameError::Config(_))));

        let empty = r#"{ "cities": [] }"#;
        assert!(matches!(GameConfig::from_json_str(empty), Err(GameError::Config(_))));

        assert!(matches!(GameConfig::from_json_str("not json"), Err(GameError::Config(_))));
    }
}
