//! City model: hitpoints, productivity and interceptor production.

use serde::{Deserialize, Serialize};

use salvo_core::constants::*;
use salvo_core::state::CityView;
use salvo_core::types::Position;

/// Index of a city in the game's city list. Cities are never removed, so the
/// index stays valid for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub usize);

/// External city definition supplied by a scenario or config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDef {
    pub name: String,
    pub y: i32,
    pub x: i32,
    pub hitpoint: i32,
}

impl CityDef {
    pub fn new(name: impl Into<String>, y: i32, x: i32, hitpoint: i32) -> Self {
        Self {
            name: name.into(),
            y,
            x,
            hitpoint,
        }
    }
}

/// Outcome of a hit on a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// City was already destroyed; nothing changed.
    Ignored,
    Damaged { remaining: i32 },
    Destroyed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) hitpoint: i32,
    pub(crate) productivity: i32,
    pub(crate) base_productivity: i32,
    pub(crate) countdown: u32,
    pub(crate) cruise_storage: u32,
}

impl City {
    pub fn new(def: &CityDef) -> Self {
        let hitpoint = def.hitpoint.max(0);
        let base_productivity = BASE_PRODUCTIVITY + hitpoint / PRODUCTIVITY_HITPOINT_DIVISOR;
        Self {
            name: def.name.clone(),
            position: Position::new(def.y, def.x),
            hitpoint,
            productivity: base_productivity + hitpoint / PRODUCTIVITY_HITPOINT_DIVISOR,
            base_productivity,
            countdown: 0,
            cruise_storage: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn hitpoint(&self) -> i32 {
        self.hitpoint
    }

    pub fn productivity(&self) -> i32 {
        self.productivity
    }

    pub fn base_productivity(&self) -> i32 {
        self.base_productivity
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn cruise_storage(&self) -> u32 {
        self.cruise_storage
    }

    pub fn is_alive(&self) -> bool {
        self.hitpoint > 0
    }

    pub fn is_building(&self) -> bool {
        self.countdown > 0
    }

    /// Recompute this turn's productivity and return it for the deposit.
    ///
    /// Destroyed cities keep their base rate only with evacuated industry;
    /// otherwise every counter is zeroed.
    pub(crate) fn update_productivity(&mut self, urgent: bool, evacuated: bool) -> i32 {
        if self.is_alive() {
            let factor = if urgent { URGENT_PRODUCTION_FACTOR } else { 1 };
            self.productivity =
                self.base_productivity * factor + self.hitpoint / PRODUCTIVITY_HITPOINT_DIVISOR;
        } else if evacuated {
            self.productivity = self.base_productivity;
        } else {
            self.hitpoint = 0;
            self.productivity = 0;
            self.countdown = 0;
            self.cruise_storage = 0;
        }
        self.productivity
    }

    /// Count the build down by one turn. Returns true on the turn it finishes,
    /// after `batch` interceptors were added to storage.
    pub(crate) fn tick_build(&mut self, batch: u32) -> bool {
        if self.countdown == 0 {
            return false;
        }
        self.countdown -= 1;
        if self.countdown == 0 {
            self.cruise_storage += batch;
            return true;
        }
        false
    }

    pub(crate) fn start_build(&mut self) {
        self.countdown = CRUISE_BUILD_TURNS;
    }

    pub(crate) fn take_interceptor(&mut self) {
        self.cruise_storage = self.cruise_storage.saturating_sub(1);
    }

    pub(crate) fn take_damage(&mut self, damage: i32) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::Ignored;
        }
        if damage >= self.hitpoint {
            self.hitpoint = 0;
            DamageOutcome::Destroyed
        } else {
            self.hitpoint -= damage;
            DamageOutcome::Damaged {
                remaining: self.hitpoint,
            }
        }
    }

    pub fn view(&self) -> CityView {
        CityView {
            name: self.name.clone(),
            position: self.position,
            hitpoint: self.hitpoint,
            productivity: self.productivity,
            countdown: self.countdown,
            cruise_storage: self.cruise_storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(hp: i32) -> City {
        City::new(&CityDef::new("Testville", 5, 5, hp))
    }

    #[test]
    fn base_productivity_from_hitpoint() {
        let c = city(800);
        assert_eq!(c.base_productivity(), 130);
        assert_eq!(c.productivity(), 210);
    }

    #[test]
    fn productivity_with_urgent_production() {
        let mut c = city(800);
        assert_eq!(c.update_productivity(true, false), 130 * 3 + 80);
    }

    #[test]
    fn destroyed_city_is_zeroed() {
        let mut c = city(300);
        c.cruise_storage = 2;
        c.countdown = 3;
        assert_eq!(c.take_damage(400), DamageOutcome::Destroyed);
        assert_eq!(c.update_productivity(false, false), 0);
        assert_eq!(c.cruise_storage(), 0);
        assert_eq!(c.countdown(), 0);
    }

    #[test]
    fn evacuated_city_keeps_base_rate() {
        let mut c = city(300);
        c.take_damage(300);
        assert!(!c.is_alive());
        assert_eq!(c.update_productivity(false, true), 80);
    }

    #[test]
    fn damage_on_dead_city_is_ignored() {
        let mut c = city(100);
        c.take_damage(100);
        assert_eq!(c.take_damage(10), DamageOutcome::Ignored);
    }

    #[test]
    fn build_finishes_after_countdown() {
        let mut c = city(500);
        c.start_build();
        for _ in 0..CRUISE_BUILD_TURNS - 1 {
            assert!(!c.tick_build(1));
        }
        assert!(c.tick_build(2));
        assert_eq!(c.cruise_storage(), 2);
        assert!(!c.tick_build(2));
    }
}
