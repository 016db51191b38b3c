//! Simulation constants and tuning parameters.

// --- Economy ---

/// Deposit at the start of a game.
pub const STARTING_DEPOSIT: i64 = 1000;

/// Flat part of a city's base productivity.
pub const BASE_PRODUCTIVITY: i32 = 50;

/// Hitpoint divisor used for both base and live productivity.
pub const PRODUCTIVITY_HITPOINT_DIVISOR: i32 = 10;

/// Base productivity multiplier once Urgent Production is researched.
pub const URGENT_PRODUCTION_FACTOR: i32 = 3;

// --- Interceptors ---

/// Deposit cost of one interceptor build.
pub const CRUISE_BUILD_COST: i64 = 500;

/// Turns to finish an interceptor build.
pub const CRUISE_BUILD_TURNS: u32 = 5;

/// Manhattan radius within which a city can lock onto an attack missile.
pub const CRUISE_RADIUS: i32 = 10;

/// Interceptor speed (cells per turn).
pub const CRUISE_SPEED: i32 = 3;

/// Interceptor warhead. Interceptors never damage cities; kept for display.
pub const CRUISE_DAMAGE: i32 = 0;

// --- Enemy ---

/// Enemy aggregate hitpoint at the start of a game.
pub const ENEMY_STARTING_HITPOINT: i32 = 1000;

/// Turns between attack waves.
pub const WAVE_INTERVAL: u32 = 40;

/// Missiles in every wave regardless of turn.
pub const WAVE_BASE_MISSILES: u32 = 5;

/// Turns per extra wave missile, indexed by difficulty (Easy, Normal, Hard).
pub const WAVE_INC_TURN: [u32; 3] = [50, 30, 20];

/// (speed, damage) tiers per difficulty, weakest first.
pub const MISSILE_TIERS: [[(i32, i32); 5]; 3] = [
    [(1, 50), (1, 100), (2, 100), (2, 150), (3, 200)],
    [(1, 100), (2, 100), (2, 150), (3, 200), (3, 300)],
    [(2, 100), (2, 150), (3, 200), (3, 300), (4, 400)],
];

/// Highest process level (five weight buckets).
pub const MAX_PROCESS_LEVEL: usize = 4;

/// Enemy hitpoint drained each turn once Mutual Deterrence is researched.
pub const DETERRENCE_DRAIN: i32 = 5;

// --- Damage & scoring ---

pub const SCORE_CITY_DESTROYED: i64 = -50;
pub const SCORE_CITY_DAMAGED: i64 = -20;
pub const CASUALTIES_CITY_DESTROYED: i64 = 100;
pub const CASUALTIES_CITY_DAMAGED: i64 = 30;

/// Win bonus per surviving city.
pub const SCORE_WIN_PER_CITY: i64 = 500;
/// Speed bonus is this minus turn / 10.
pub const SCORE_WIN_SPEED_BASE: i64 = 100;
pub const SCORE_LOSE: i64 = -1000;

// --- Special weapons ---

pub const STANDARD_BOMB_COST: i64 = 1000;
pub const STANDARD_BOMB_TURNS: i32 = 10;
pub const STANDARD_BOMB_DAMAGE: i32 = 50;
pub const STANDARD_BOMB_SCORE: i64 = 20;

pub const DIRTY_BOMB_COST: i64 = 2000;
pub const DIRTY_BOMB_TURNS: i32 = 15;
pub const DIRTY_BOMB_DAMAGE: i32 = 50;
pub const DIRTY_BOMB_SCORE: i64 = 20;
/// Miss chance as (numerator, denominator).
pub const DIRTY_BOMB_MISS: (u32, u32) = (1, 4);

pub const HYDROGEN_BOMB_COST: i64 = 5000;
pub const HYDROGEN_BOMB_TURNS: i32 = 30;
pub const HYDROGEN_BOMB_DAMAGE: i32 = 500;
pub const HYDROGEN_BOMB_SCORE: i64 = 50;
pub const HYDROGEN_BOMB_MISS: (u32, u32) = (1, 2);

pub const IRON_CURTAIN_COST: i64 = 10_000;
/// Shield counter value on activation. The shield holds while the counter is >= 0.
pub const IRON_CURTAIN_TURNS: i32 = 30;

/// Weapon counter value meaning "not built".
pub const NOT_BUILT: i32 = -1;

// --- Tech scoring (by tier) ---

pub const TECH_SCORE_BY_TIER: [i64; 4] = [10, 20, 30, 50];

// --- Feedback log ---

/// Entries kept before the log overflows.
pub const FEEDBACK_CAPACITY: usize = 15;

/// Oldest entries dropped on overflow.
pub const FEEDBACK_DROP: usize = 5;

// --- Snapshot ---

pub const SNAPSHOT_VERSION: u32 = 1;

// --- Terrain glyphs ---

pub const TERRAIN_LAND: char = ' ';
pub const TERRAIN_SEA: char = '~';
pub const TERRAIN_CITY: char = '#';
