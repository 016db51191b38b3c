//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Compass heading of a unit step on the grid, or `Arrived` when there is
/// nowhere left to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Arrived,
}

impl Direction {
    /// All moving directions, clockwise from North.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Heading from `from` toward `to`.
    ///
    /// Same row moves purely East/West, same column purely North/South,
    /// anything else takes the matching diagonal.
    pub fn between(from: Position, to: Position) -> Direction {
        let dy = to.y - from.y;
        let dx = to.x - from.x;
        match (dy.signum(), dx.signum()) {
            (0, 0) => Direction::Arrived,
            (0, 1) => Direction::East,
            (0, _) => Direction::West,
            (1, 0) => Direction::South,
            (_, 0) => Direction::North,
            (-1, 1) => Direction::NorthEast,
            (-1, _) => Direction::NorthWest,
            (_, 1) => Direction::SouthEast,
            _ => Direction::SouthWest,
        }
    }

    /// Unit offset of one step in this direction.
    pub fn offset(self) -> Position {
        match self {
            Direction::North => Position::new(-1, 0),
            Direction::NorthEast => Position::new(-1, 1),
            Direction::East => Position::new(0, 1),
            Direction::SouthEast => Position::new(1, 1),
            Direction::South => Position::new(1, 0),
            Direction::SouthWest => Position::new(1, -1),
            Direction::West => Position::new(0, -1),
            Direction::NorthWest => Position::new(-1, -1),
            Direction::Arrived => Position::ZERO,
        }
    }

    /// Antipodal heading. `Arrived` is its own opposite.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::Arrived => Direction::Arrived,
        }
    }
}

/// Difficulty preset. Scales wave growth and missile stat tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// 1-based level as shown to the player.
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Normal),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.level() as usize - 1
    }
}

/// Which side of the missile war a projectile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissileRole {
    /// Enemy ballistic missile with a fixed city target.
    Attack,
    /// Player interceptor homing on an attack missile.
    Cruise,
}

/// Single-use strike weapons built from the deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BombKind {
    Standard,
    Dirty,
    Hydrogen,
}

impl BombKind {
    pub const ALL: [BombKind; 3] = [BombKind::Standard, BombKind::Dirty, BombKind::Hydrogen];

    pub fn label(self) -> &'static str {
        match self {
            BombKind::Standard => "Standard bomb",
            BombKind::Dirty => "Dirty bomb",
            BombKind::Hydrogen => "Hydrogen bomb",
        }
    }
}

/// Research lifecycle of a technology node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechStatus {
    #[default]
    Locked,
    Available,
    Researching,
    Researched,
}

/// Stable identifier of every technology node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechId {
    // Radar branch
    Radar,
    PhasedArray,
    // Cruise missile branch
    CruiseAssembly,
    CruiseDiscount,
    SelfDefense,
    // City defense branch
    UrgentProduction,
    EvacuatedIndustry,
    SelfDefenseSystem,
    FortressCity,
    IronCurtain,
    // Offensive branch
    DirtyBomb,
    HydrogenBomb,
    RapidAssembly,
    // Convergence
    Deterrence,
}

impl TechId {
    pub const ALL: [TechId; 14] = [
        TechId::Radar,
        TechId::PhasedArray,
        TechId::CruiseAssembly,
        TechId::CruiseDiscount,
        TechId::SelfDefense,
        TechId::UrgentProduction,
        TechId::EvacuatedIndustry,
        TechId::SelfDefenseSystem,
        TechId::FortressCity,
        TechId::IronCurtain,
        TechId::DirtyBomb,
        TechId::HydrogenBomb,
        TechId::RapidAssembly,
        TechId::Deterrence,
    ];

    /// Display name, also the persistence key.
    pub fn name(self) -> &'static str {
        match self {
            TechId::Radar => "Radar",
            TechId::PhasedArray => "Phased Array Radar",
            TechId::CruiseAssembly => "Cruise Assembly Line",
            TechId::CruiseDiscount => "Standardized Parts",
            TechId::SelfDefense => "Self Defense",
            TechId::UrgentProduction => "Urgent Production",
            TechId::EvacuatedIndustry => "Evacuated Industry",
            TechId::SelfDefenseSystem => "Self Defense System",
            TechId::FortressCity => "Fortress City",
            TechId::IronCurtain => "Iron Curtain",
            TechId::DirtyBomb => "Dirty Bomb",
            TechId::HydrogenBomb => "Hydrogen Bomb",
            TechId::RapidAssembly => "Rapid Assembly",
            TechId::Deterrence => "Mutual Deterrence",
        }
    }

    pub fn from_name(name: &str) -> Option<TechId> {
        TechId::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl std::fmt::Display for TechId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Gameplay mechanic unlocked by a finished research.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Missile detail views include the target cell.
    MissileTargets,
    /// Missile detail views include speed and damage.
    MissileStats,
    /// Each interceptor build yields two interceptors.
    DoubleCruise,
    /// Interceptor builds cost half.
    CheapCruise,
    /// Cities launch interceptors on their own every turn.
    AutoIntercept,
    /// Base productivity is tripled.
    UrgentProduction,
    /// Destroyed cities keep producing at their base rate.
    EvacuatedIndustry,
    /// Incoming damage is halved.
    DamageReduction,
    /// Damage reports are halved.
    FortressCity,
    /// The Iron Curtain shield can be activated.
    IronCurtain,
    /// Dirty bombs can be built.
    DirtyBomb,
    /// Hydrogen bombs can be built.
    HydrogenBomb,
    /// Bomb build durations are halved.
    RapidAssembly,
    /// Enemy hitpoint drains every turn.
    Deterrence,
}

impl Capability {
    pub const ALL: [Capability; 14] = [
        Capability::MissileTargets,
        Capability::MissileStats,
        Capability::DoubleCruise,
        Capability::CheapCruise,
        Capability::AutoIntercept,
        Capability::UrgentProduction,
        Capability::EvacuatedIndustry,
        Capability::DamageReduction,
        Capability::FortressCity,
        Capability::IronCurtain,
        Capability::DirtyBomb,
        Capability::HydrogenBomb,
        Capability::RapidAssembly,
        Capability::Deterrence,
    ];

    /// Snake-case key used in snapshots.
    pub fn key(self) -> &'static str {
        match self {
            Capability::MissileTargets => "missile_targets",
            Capability::MissileStats => "missile_stats",
            Capability::DoubleCruise => "double_cruise",
            Capability::CheapCruise => "cheap_cruise",
            Capability::AutoIntercept => "auto_intercept",
            Capability::UrgentProduction => "urgent_production",
            Capability::EvacuatedIndustry => "evacuated_industry",
            Capability::DamageReduction => "damage_reduction",
            Capability::FortressCity => "fortress_city",
            Capability::IronCurtain => "iron_curtain_tech",
            Capability::DirtyBomb => "dirty_bomb_tech",
            Capability::HydrogenBomb => "hydrogen_bomb_tech",
            Capability::RapidAssembly => "rapid_assembly",
            Capability::Deterrence => "deterrence",
        }
    }
}

/// Result of the once-per-turn game-over check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Continue,
    Won,
    Lost,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::Continue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameOutcome::Continue => "continue",
            GameOutcome::Won => "won",
            GameOutcome::Lost => "lost",
        }
    }

    pub fn parse(s: &str) -> Option<GameOutcome> {
        match s {
            "continue" => Some(GameOutcome::Continue),
            "won" => Some(GameOutcome::Won),
            "lost" => Some(GameOutcome::Lost),
            _ => None,
        }
    }
}

/// Feedback severity, used by the view layer to pick a display attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Info,
    Good,
    Warning,
    Critical,
}
