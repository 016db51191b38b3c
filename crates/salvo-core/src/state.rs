//! Read-only game views consumed by rendering and reporting layers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::Alert;
use crate::types::Position;

/// Everything a renderer needs to draw one turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameView {
    pub turn: u32,
    pub difficulty: Difficulty,
    pub deposit: i64,
    /// Sum of city productivity for the last turn.
    pub productivity: i64,
    pub enemy_hitpoint: i32,
    pub score: i64,
    pub casualties: i64,
    pub cursor: Position,
    pub outcome: GameOutcome,
    pub cities: Vec<CityView>,
    pub missiles: Vec<MissileView>,
    pub tech: Vec<TechView>,
    pub research: Option<ResearchView>,
    pub weapons: WeaponsView,
    pub feedback: Vec<Alert>,
}

/// Per-city detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityView {
    pub name: String,
    pub position: Position,
    pub hitpoint: i32,
    pub productivity: i32,
    pub countdown: u32,
    pub cruise_storage: u32,
}

/// Per-missile detail. Target and stats are only revealed by radar research.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: u32,
    pub role: MissileRole,
    pub position: Position,
    pub exploded: bool,
    pub target: Option<Position>,
    pub speed: Option<i32>,
    pub damage: Option<i32>,
}

/// Technology node as listed in the research menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechView {
    pub id: TechId,
    pub name: String,
    pub description: String,
    pub cost: i64,
    pub time: u32,
    pub status: TechStatus,
}

/// Research currently in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchView {
    pub tech: TechId,
    pub remaining_time: u32,
}

/// Special weapon counters (-1 not built, 0 ready, N turns left).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponsView {
    pub standard_bomb: i32,
    pub dirty_bomb: i32,
    pub hydrogen_bomb: i32,
    /// Iron Curtain shield counter (-1 inactive, otherwise turns left).
    pub iron_curtain: i32,
}
