//! Missile manager: the sole owner and mutator of every live missile.
//!
//! Missiles are kept in one `Vec` ordered by id. Ids only grow, so appending
//! keeps the order and lookups can binary-search.

use rand::Rng;
use tracing::debug;

use salvo_core::constants::*;
use salvo_core::enums::Difficulty;
use salvo_core::types::Position;

use crate::city::{City, CityId};
use crate::missile::{Missile, MissileId, MissileKind};
use crate::wave;

#[derive(Debug, Clone)]
pub struct MissileManager {
    missiles: Vec<Missile>,
    next_id: u32,
    difficulty: Difficulty,
    tiers: [(i32, i32); 5],
}

impl Default for MissileManager {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl MissileManager {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            missiles: Vec::new(),
            next_id: 0,
            difficulty,
            tiers: MISSILE_TIERS[difficulty.index()],
        }
    }

    /// Switch the (speed, damage) tier table used by future waves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.tiers = MISSILE_TIERS[difficulty.index()];
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tiers(&self) -> &[(i32, i32); 5] {
        &self.tiers
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    // --- Queries ---

    pub fn iter(&self) -> impl Iterator<Item = &Missile> {
        self.missiles.iter()
    }

    pub fn attack_missiles(&self) -> impl Iterator<Item = &Missile> {
        self.missiles.iter().filter(|m| m.is_attack())
    }

    pub fn cruise_missiles(&self) -> impl Iterator<Item = &Missile> {
        self.missiles.iter().filter(|m| m.is_cruise())
    }

    pub fn get(&self, id: MissileId) -> Option<&Missile> {
        self.index_of(id).map(|i| &self.missiles[i])
    }

    pub fn len(&self) -> usize {
        self.missiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missiles.is_empty()
    }

    /// Ids of attack missiles still in flight.
    pub fn live_attack_ids(&self) -> Vec<MissileId> {
        self.attack_missiles()
            .filter(|m| !m.is_exploded())
            .map(Missile::id)
            .collect()
    }

    fn index_of(&self, id: MissileId) -> Option<usize> {
        self.missiles.binary_search_by_key(&id, Missile::id).ok()
    }

    fn allocate_id(&mut self) -> MissileId {
        let id = MissileId(self.next_id);
        self.next_id += 1;
        id
    }

    // --- Spawning ---

    /// Spawn an attack missile aimed at a city. Always succeeds.
    pub fn create_attack_missile(
        &mut self,
        origin: Position,
        city: CityId,
        city_position: Position,
        damage: i32,
        speed: i32,
    ) -> MissileId {
        let id = self.allocate_id();
        self.missiles
            .push(Missile::attack(id, origin, city, city_position, damage, speed));
        id
    }

    /// Launch an interceptor from `city_position` at the nearest unclaimed
    /// attack missile within [`CRUISE_RADIUS`]. Ties go to the older missile.
    ///
    /// Returns `None` (and spawns nothing) when no candidate qualifies.
    pub fn create_cruise_missile(
        &mut self,
        city_position: Position,
        damage: i32,
        speed: i32,
    ) -> Option<MissileId> {
        let (index, distance) = self
            .missiles
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_attack() && !m.is_exploded() && !m.is_aimed())
            .map(|(i, m)| (i, m.position().manhattan(&city_position)))
            .min_by_key(|&(i, distance)| (distance, i))?;

        if distance > CRUISE_RADIUS {
            return None;
        }

        self.missiles[index].mark_aimed();
        let pursued = self.missiles[index].id();
        let pursued_position = self.missiles[index].position();

        let id = self.allocate_id();
        self.missiles.push(Missile::cruise(
            id,
            city_position,
            pursued,
            pursued_position,
            damage,
            speed,
        ));
        debug!(interceptor = id.0, target = pursued.0, distance, "interceptor launched");
        Some(id)
    }

    /// Spawn one attack wave: `turn / inc_turn + 5` missiles with tiered
    /// stats, each aimed at a city picked by weighted rejection sampling.
    ///
    /// Returns the number of missiles spawned (zero when no city is alive).
    pub fn create_attack_wave<R: Rng>(
        &mut self,
        rng: &mut R,
        turn: u32,
        enemy_hitpoint: i32,
        cities: &[City],
        board_size: Position,
    ) -> usize {
        if !cities.iter().any(City::is_alive) {
            return 0;
        }

        let count = turn / WAVE_INC_TURN[self.difficulty.index()] + WAVE_BASE_MISSILES;
        let level = wave::process_level(turn, enemy_hitpoint);

        for _ in 0..count {
            let (speed, damage) = self.tiers[wave::pick_tier(rng, level)];
            let target = loop {
                let candidate = rng.gen_range(0..cities.len());
                if wave::accept_target(rng, cities[candidate].hitpoint()) {
                    break candidate;
                }
            };
            let origin = wave::edge_position(rng, board_size);
            self.create_attack_missile(
                origin,
                CityId(target),
                cities[target].position(),
                damage,
                speed,
            );
        }
        count as usize
    }

    // --- Turn processing ---

    /// Advance every attack missile, then every interceptor.
    ///
    /// Interceptors re-home on their pursued missile before each unit step.
    /// Reaching it explodes both. An interceptor whose target already
    /// exploded holds position and is pruned with it.
    pub fn update_missiles(&mut self) {
        for missile in self.missiles.iter_mut().filter(|m| m.is_attack()) {
            missile.advance();
        }

        for i in 0..self.missiles.len() {
            let MissileKind::Cruise { target } = self.missiles[i].kind() else {
                continue;
            };
            if self.missiles[i].is_exploded() {
                continue;
            }
            let Some(t) = self.index_of(target) else {
                continue;
            };

            for _ in 0..self.missiles[i].speed() {
                if self.missiles[t].is_exploded() {
                    break;
                }
                let pursued_position = self.missiles[t].position();
                let interceptor = &mut self.missiles[i];
                interceptor.retarget(pursued_position);
                if interceptor.step() {
                    self.missiles[t].mark_intercepted();
                    break;
                }
            }
        }
    }

    /// Drop every exploded attack missile together with the interceptors
    /// chasing it. Interceptors are always removed first.
    pub fn remove_missiles(&mut self) -> usize {
        let exploded: Vec<MissileId> = self
            .attack_missiles()
            .filter(|m| m.is_exploded())
            .map(Missile::id)
            .collect();
        if exploded.is_empty() {
            return 0;
        }

        let before = self.missiles.len();
        self.missiles
            .retain(|m| !matches!(m.kind(), MissileKind::Cruise { target } if exploded.contains(&target)));
        self.missiles.retain(|m| !exploded.contains(&m.id()));
        before - self.missiles.len()
    }

    /// Replace the live set from persisted state.
    pub(crate) fn restore(&mut self, mut missiles: Vec<Missile>, next_id: u32) {
        missiles.sort_by_key(Missile::id);
        let floor = missiles.last().map_or(0, |m| m.id().0 + 1);
        self.missiles = missiles;
        self.next_id = next_id.max(floor);
    }
}
