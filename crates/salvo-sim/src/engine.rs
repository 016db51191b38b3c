//! Game engine: the orchestrator that owns every piece of simulation state.
//!
//! `Game` runs the fixed per-turn transition, resolves damage, validates and
//! applies player actions, and produces `GameView`s. It is headless and
//! deterministic: one `ChaCha8Rng` seeded from the config drives every roll.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use salvo_core::commands::PlayerCommand;
use salvo_core::constants::*;
use salvo_core::enums::{
    AlertLevel, BombKind, Capability, Difficulty, Direction, GameOutcome, TechId, TechStatus,
};
use salvo_core::error::{GameError, Result};
use salvo_core::events::FeedbackLog;
use salvo_core::state::{GameView, MissileView, ResearchView};
use salvo_core::types::Position;

use crate::board::Board;
use crate::city::{City, CityId, DamageOutcome};
use crate::config::GameConfig;
use crate::missile::{Missile, MissileId};
use crate::missile_manager::MissileManager;
use crate::tech_tree::{Capabilities, TechTree};
use crate::weapons::{SpecialWeapons, Strike};

/// The simulation. Owns the board, cities, missiles, research and weapons.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) cursor: Position,
    pub(crate) turn: u32,
    pub(crate) deposit: i64,
    /// Total productivity collected on the last turn.
    pub(crate) productivity: i64,
    pub(crate) difficulty: Difficulty,
    pub(crate) enemy_hitpoint: i32,
    pub(crate) score: i64,
    pub(crate) casualties: i64,
    pub(crate) cities: Vec<City>,
    pub(crate) feedback: FeedbackLog,
    pub(crate) missiles: MissileManager,
    pub(crate) tech: TechTree,
    pub(crate) weapons: SpecialWeapons,
    pub(crate) capabilities: Capabilities,
    pub(crate) outcome: GameOutcome,
    pub(crate) seed: u64,
    pub(crate) rng: ChaCha8Rng,
}

impl Game {
    /// Start a new game from a validated config.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut game = Self::empty(config.board(), config.seed, config.difficulty);
        game.cities = config.cities.iter().map(City::new).collect();
        game.cursor = game.cities.first().map_or(Position::ZERO, City::position);
        game.productivity = game.cities.iter().map(|c| c.productivity() as i64).sum();
        game.tech.update_available(game.deposit);

        info!(
            seed = config.seed,
            difficulty = ?config.difficulty,
            cities = game.cities.len(),
            "new game"
        );
        Ok(game)
    }

    /// Starting state without cities. Persistence fills in the rest.
    pub(crate) fn empty(board: Board, seed: u64, difficulty: Difficulty) -> Self {
        Self {
            board,
            cursor: Position::ZERO,
            turn: 0,
            deposit: STARTING_DEPOSIT,
            productivity: 0,
            difficulty,
            enemy_hitpoint: ENEMY_STARTING_HITPOINT,
            score: 0,
            casualties: 0,
            cities: Vec::new(),
            feedback: FeedbackLog::new(),
            missiles: MissileManager::new(difficulty),
            tech: TechTree::new(),
            weapons: SpecialWeapons::default(),
            capabilities: Capabilities::default(),
            outcome: GameOutcome::Continue,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // --- Read accessors ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn deposit(&self) -> i64 {
        self.deposit
    }

    pub fn productivity(&self) -> i64 {
        self.productivity
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn enemy_hitpoint(&self) -> i32 {
        self.enemy_hitpoint
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn casualties(&self) -> i64 {
        self.casualties
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.0)
    }

    pub fn alive_cities(&self) -> usize {
        self.cities.iter().filter(|c| c.is_alive()).count()
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn missiles(&self) -> &MissileManager {
        &self.missiles
    }

    pub fn tech(&self) -> &TechTree {
        &self.tech
    }

    pub fn tech_status(&self, id: TechId) -> TechStatus {
        self.tech.status(id)
    }

    pub fn weapons(&self) -> &SpecialWeapons {
        &self.weapons
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // --- Turn transition ---

    /// Advance the game by one turn and return the outcome.
    ///
    /// Does nothing once the game is over.
    pub fn pass_turn(&mut self) -> GameOutcome {
        if self.is_over() {
            return self.outcome;
        }

        let pruned = self.missiles.remove_missiles();
        self.missiles.update_missiles();
        self.resolve_arrivals();
        self.collect_productivity();
        self.tick_city_builds();
        self.tick_bomb_builds();
        self.advance_research();
        self.tick_iron_curtain();
        if self.capabilities.has(Capability::Deterrence) {
            self.enemy_hitpoint -= DETERRENCE_DRAIN;
        }
        let auto_launched = self.auto_intercept();
        self.spawn_wave();
        self.turn += 1;
        let outcome = self.check_game_over();

        debug!(
            turn = self.turn,
            deposit = self.deposit,
            enemy_hitpoint = self.enemy_hitpoint,
            missiles = self.missiles.len(),
            pruned,
            auto_launched,
            "turn passed"
        );
        outcome
    }

    /// Damage every city whose attacker arrived this turn. Missiles exploded
    /// on an earlier turn were pruned at the start of this one.
    fn resolve_arrivals(&mut self) {
        let hits: Vec<(CityId, i32)> = self
            .missiles
            .attack_missiles()
            .filter(|m| m.has_hit_target())
            .filter_map(|m| m.target_city().map(|city| (city, m.damage())))
            .collect();
        for (city, damage) in hits {
            self.resolve_damage(city, damage);
        }
    }

    /// Apply one missile hit to a city.
    ///
    /// The Iron Curtain absorbs everything. Self Defense System halves the
    /// damage; Fortress City halves only the amount reported.
    pub fn resolve_damage(&mut self, city: CityId, damage: i32) -> DamageOutcome {
        let turn = self.turn;
        let Some(target) = self.cities.get_mut(city.0) else {
            return DamageOutcome::Ignored;
        };
        if !target.is_alive() {
            return DamageOutcome::Ignored;
        }
        if self.weapons.is_shield_active() {
            self.feedback.push(
                turn,
                AlertLevel::Good,
                format!("Iron Curtain absorbed a hit on {}", target.name()),
            );
            return DamageOutcome::Ignored;
        }

        let damage = if self.capabilities.has(Capability::DamageReduction) {
            damage / 2
        } else {
            damage
        };
        let outcome = target.take_damage(damage);
        match outcome {
            DamageOutcome::Destroyed => {
                self.score += SCORE_CITY_DESTROYED;
                self.casualties += CASUALTIES_CITY_DESTROYED;
                info!(city = target.name(), turn, "city destroyed");
                self.feedback.push(
                    turn,
                    AlertLevel::Critical,
                    format!("{} has been destroyed", target.name()),
                );
            }
            DamageOutcome::Damaged { remaining } => {
                self.score += SCORE_CITY_DAMAGED;
                self.casualties += CASUALTIES_CITY_DAMAGED;
                let reported = if self.capabilities.has(Capability::FortressCity) {
                    damage / 2
                } else {
                    damage
                };
                self.feedback.push(
                    turn,
                    AlertLevel::Warning,
                    format!("{} took {reported} damage ({remaining} left)", target.name()),
                );
            }
            DamageOutcome::Ignored => {}
        }
        outcome
    }

    fn collect_productivity(&mut self) {
        let urgent = self.capabilities.has(Capability::UrgentProduction);
        let evacuated = self.capabilities.has(Capability::EvacuatedIndustry);
        let total: i64 = self
            .cities
            .iter_mut()
            .map(|c| c.update_productivity(urgent, evacuated) as i64)
            .sum();
        self.productivity = total;
        self.deposit += total;
    }

    fn tick_city_builds(&mut self) {
        let batch = if self.capabilities.has(Capability::DoubleCruise) { 2 } else { 1 };
        for city in &mut self.cities {
            if city.tick_build(batch) {
                self.feedback.push(
                    self.turn,
                    AlertLevel::Good,
                    format!("{} finished {batch} interceptor(s)", city.name()),
                );
            }
        }
    }

    fn tick_bomb_builds(&mut self) {
        for kind in self.weapons.tick_builds() {
            self.feedback
                .push(self.turn, AlertLevel::Good, format!("{} is ready", kind.label()));
        }
    }

    fn advance_research(&mut self) {
        self.tech.proceed_research();
        if let Some(id) = self.tech.check_research() {
            let effect = self.tech.node(id).effect;
            self.capabilities.set(effect.capability);
            self.score += effect.score;
            info!(tech = id.name(), turn = self.turn, "research complete");
            self.feedback.push(
                self.turn,
                AlertLevel::Good,
                format!("Research complete: {}", id.name()),
            );
        }
        self.tech.update_available(self.deposit);
    }

    fn tick_iron_curtain(&mut self) {
        if self.weapons.tick_iron_curtain() {
            self.feedback
                .push(self.turn, AlertLevel::Warning, "Iron Curtain has collapsed");
        }
    }

    /// Self Defense: every living city tries one interceptor per live attack
    /// missile. Auto-launches are free and never touch storage.
    fn auto_intercept(&mut self) -> usize {
        if !self.capabilities.has(Capability::AutoIntercept) {
            return 0;
        }
        let sites: Vec<Position> = self
            .cities
            .iter()
            .filter(|c| c.is_alive())
            .map(City::position)
            .collect();
        let mut launched = 0;
        for site in sites {
            for _ in 0..self.missiles.live_attack_ids().len() {
                // the candidate set only shrinks, so one miss ends this city
                if self
                    .missiles
                    .create_cruise_missile(site, CRUISE_DAMAGE, CRUISE_SPEED)
                    .is_none()
                {
                    break;
                }
                launched += 1;
            }
        }
        launched
    }

    fn spawn_wave(&mut self) {
        if self.turn % WAVE_INTERVAL != 0 {
            return;
        }
        let count = self.missiles.create_attack_wave(
            &mut self.rng,
            self.turn,
            self.enemy_hitpoint,
            &self.cities,
            self.board.size(),
        );
        if count > 0 {
            info!(turn = self.turn, count, "attack wave");
            self.feedback.push(
                self.turn,
                AlertLevel::Critical,
                format!("Incoming attack wave: {count} missiles"),
            );
        }
    }

    /// Latch and score the first non-continue outcome. Victory is checked
    /// before defeat.
    pub fn check_game_over(&mut self) -> GameOutcome {
        if self.is_over() {
            return self.outcome;
        }
        if self.enemy_hitpoint <= 0 {
            let alive = self.alive_cities() as i64;
            self.score += SCORE_WIN_PER_CITY * alive + (SCORE_WIN_SPEED_BASE - (self.turn / 10) as i64);
            self.outcome = GameOutcome::Won;
            info!(turn = self.turn, score = self.score, alive, "victory");
            self.feedback
                .push(self.turn, AlertLevel::Good, "The enemy has been defeated");
        } else if self.cities.iter().all(|c| c.hitpoint() <= 0) {
            self.score += SCORE_LOSE;
            self.outcome = GameOutcome::Lost;
            info!(turn = self.turn, score = self.score, "defeat");
            self.feedback
                .push(self.turn, AlertLevel::Critical, "Every city has fallen");
        }
        self.outcome
    }

    // --- Actions ---

    /// Mirror a rejection into the feedback log and pass it on.
    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            debug!(turn = self.turn, error = %err, "action rejected");
            self.feedback
                .push(self.turn, AlertLevel::Warning, err.to_string());
        }
        result
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn living_city(&self, id: CityId) -> Result<&City> {
        let city = self.city(id).ok_or(GameError::NothingSelected("city"))?;
        if !city.is_alive() {
            return Err(GameError::CityDestroyed(city.name().to_string()));
        }
        Ok(city)
    }

    pub fn cruise_build_cost(&self) -> i64 {
        if self.capabilities.has(Capability::CheapCruise) {
            CRUISE_BUILD_COST / 2
        } else {
            CRUISE_BUILD_COST
        }
    }

    /// Start an interceptor build in a city.
    pub fn build_cruise(&mut self, id: CityId) -> Result<()> {
        let checked = self.ensure_running().and_then(|_| {
            let city = self.living_city(id)?;
            if city.is_building() {
                return Err(GameError::BuildInProgress(city.name().to_string()));
            }
            let cost = self.cruise_build_cost();
            if self.deposit < cost {
                return Err(GameError::InsufficientDeposit {
                    required: cost,
                    available: self.deposit,
                });
            }
            Ok(cost)
        });
        let cost = self.report(checked)?;

        self.deposit -= cost;
        let city = &mut self.cities[id.0];
        city.start_build();
        self.feedback.push(
            self.turn,
            AlertLevel::Info,
            format!("{} started building interceptors", city.name()),
        );
        Ok(())
    }

    /// Fire a stored interceptor from a city at the nearest free threat.
    pub fn launch_cruise(&mut self, id: CityId) -> Result<MissileId> {
        let checked = self.ensure_running().and_then(|_| {
            let city = self.living_city(id)?;
            if city.cruise_storage() == 0 {
                return Err(GameError::NoInterceptors(city.name().to_string()));
            }
            Ok((city.position(), city.name().to_string()))
        });
        let (site, name) = self.report(checked)?;

        let launched = self
            .missiles
            .create_cruise_missile(site, CRUISE_DAMAGE, CRUISE_SPEED)
            .ok_or(GameError::NoTargetInRange(name));
        let missile = self.report(launched)?;

        let city = &mut self.cities[id.0];
        city.take_interceptor();
        self.feedback.push(
            self.turn,
            AlertLevel::Info,
            format!("{} launched interceptor {missile}", city.name()),
        );
        Ok(missile)
    }

    pub fn build_bomb(&mut self, kind: BombKind) -> Result<()> {
        let checked = self
            .ensure_running()
            .and_then(|_| self.weapons.check_build(kind, &self.capabilities, self.deposit));
        let (cost, turns) = self.report(checked)?;

        self.deposit -= cost;
        self.weapons.start_build(kind, turns);
        self.feedback.push(
            self.turn,
            AlertLevel::Info,
            format!("{} construction started ({turns} turns)", kind.label()),
        );
        Ok(())
    }

    /// Launch a ready bomb at the enemy.
    pub fn launch_bomb(&mut self, kind: BombKind) -> Result<Strike> {
        let running = self.ensure_running();
        self.report(running)?;
        let launched = self.weapons.launch(kind, &mut self.rng);
        let strike = self.report(launched)?;

        match strike {
            Strike::Hit { damage, score } => {
                self.enemy_hitpoint -= damage;
                self.score += score;
                info!(bomb = kind.label(), damage, enemy_hitpoint = self.enemy_hitpoint, "bomb hit");
                self.feedback.push(
                    self.turn,
                    AlertLevel::Good,
                    format!("{} hit the enemy for {damage}", kind.label()),
                );
            }
            Strike::Miss => {
                info!(bomb = kind.label(), "bomb missed");
                self.feedback.push(
                    self.turn,
                    AlertLevel::Warning,
                    format!("{} missed its target", kind.label()),
                );
            }
        }
        Ok(strike)
    }

    pub fn activate_iron_curtain(&mut self) -> Result<()> {
        let checked = self
            .ensure_running()
            .and_then(|_| self.weapons.check_iron_curtain(&self.capabilities, self.deposit));
        let cost = self.report(checked)?;

        self.deposit -= cost;
        self.weapons.activate_iron_curtain();
        info!(turn = self.turn, "iron curtain raised");
        self.feedback.push(
            self.turn,
            AlertLevel::Good,
            format!("Iron Curtain raised for {IRON_CURTAIN_TURNS} turns"),
        );
        Ok(())
    }

    /// Pay for and start researching an available node.
    pub fn start_research(&mut self, id: TechId) -> Result<()> {
        let checked = self.ensure_running().and_then(|_| {
            if let Some(current) = self.tech.researching() {
                return Err(GameError::ResearchBusy(current));
            }
            if !self.tech.is_available(id) {
                return Err(GameError::ResearchUnavailable(id));
            }
            let cost = self.tech.node(id).cost;
            if self.deposit < cost {
                return Err(GameError::InsufficientDeposit {
                    required: cost,
                    available: self.deposit,
                });
            }
            Ok(cost)
        });
        let cost = self.report(checked)?;

        self.deposit -= cost;
        self.tech.start_research(id);
        self.feedback.push(
            self.turn,
            AlertLevel::Info,
            format!("Started research: {} ({} turns)", id.name(), self.tech.remaining_time()),
        );
        Ok(())
    }

    /// Dispatch a player command. City actions use the city under the cursor.
    pub fn apply(&mut self, command: PlayerCommand) -> Result<()> {
        match command {
            PlayerCommand::PassTurn => {
                self.pass_turn();
            }
            PlayerCommand::MoveCursor { direction } => self.move_cursor(direction),
            PlayerCommand::SetCursor { position } => self.set_cursor(position),
            PlayerCommand::BuildCruise => {
                let selected = self.selected_city();
                let city = self.report(selected)?;
                self.build_cruise(city)?;
            }
            PlayerCommand::LaunchCruise => {
                let selected = self.selected_city();
                let city = self.report(selected)?;
                self.launch_cruise(city)?;
            }
            PlayerCommand::BuildBomb { kind } => self.build_bomb(kind)?,
            PlayerCommand::LaunchBomb { kind } => {
                self.launch_bomb(kind)?;
            }
            PlayerCommand::ActivateIronCurtain => self.activate_iron_curtain()?,
            PlayerCommand::StartResearch { tech } => self.start_research(tech)?,
        }
        Ok(())
    }

    // --- Cursor and selection ---

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = (self.cursor + direction.offset()).clamp_to(&self.board.size());
    }

    pub fn set_cursor(&mut self, position: Position) {
        self.cursor = position.clamp_to(&self.board.size());
    }

    /// Exact match wins; otherwise the first position adjacent to the cursor.
    fn pick_near(&self, positions: impl Iterator<Item = (usize, Position)> + Clone) -> Option<usize> {
        positions
            .clone()
            .find(|(_, p)| *p == self.cursor)
            .or_else(|| positions.clone().find(|(_, p)| p.is_adjacent(&self.cursor)))
            .map(|(i, _)| i)
    }

    pub fn is_selected_city(&self) -> bool {
        self.selected_city().is_ok()
    }

    pub fn selected_city(&self) -> Result<CityId> {
        self.pick_near(self.cities.iter().map(City::position).enumerate())
            .map(CityId)
            .ok_or(GameError::NothingSelected("city"))
    }

    pub fn is_selected_missile(&self) -> bool {
        self.selected_missile().is_ok()
    }

    pub fn selected_missile(&self) -> Result<MissileId> {
        let missiles: Vec<&Missile> = self.missiles.iter().collect();
        self.pick_near(missiles.iter().map(|m| m.position()).enumerate())
            .map(|i| missiles[i].id())
            .ok_or(GameError::NothingSelected("missile"))
    }

    // --- Views ---

    /// Missile detail as the player may see it. Interceptors are fully
    /// known; attack targets need Radar and stats need Phased Array.
    pub fn missile_view(&self, missile: &Missile) -> MissileView {
        let own = missile.is_cruise();
        let targets = own || self.capabilities.has(Capability::MissileTargets);
        let stats = own || self.capabilities.has(Capability::MissileStats);
        MissileView {
            id: missile.id().0,
            role: missile.role(),
            position: missile.position(),
            exploded: missile.is_exploded(),
            target: targets.then(|| missile.target()),
            speed: stats.then(|| missile.speed()),
            damage: stats.then(|| missile.damage()),
        }
    }

    pub fn snapshot(&self) -> GameView {
        GameView {
            turn: self.turn,
            difficulty: self.difficulty,
            deposit: self.deposit,
            productivity: self.productivity,
            enemy_hitpoint: self.enemy_hitpoint,
            score: self.score,
            casualties: self.casualties,
            cursor: self.cursor,
            outcome: self.outcome,
            cities: self.cities.iter().map(City::view).collect(),
            missiles: self.missiles.iter().map(|m| self.missile_view(m)).collect(),
            tech: self.tech.views(),
            research: self.tech.researching().map(|tech| ResearchView {
                tech,
                remaining_time: self.tech.remaining_time(),
            }),
            weapons: self.weapons.view(),
            feedback: self.feedback.entries().to_vec(),
        }
    }
}
