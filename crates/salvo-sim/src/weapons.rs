//! Special weapons: single-use bombs and the Iron Curtain shield.
//!
//! Bomb counters follow one convention: -1 not built, 0 ready, N > 0 turns
//! of construction left. The Iron Curtain counter is -1 while inactive and
//! counts the shield down while >= 0.

use rand::Rng;

use salvo_core::constants::*;
use salvo_core::enums::{BombKind, Capability, TechId};
use salvo_core::error::{GameError, Result};
use salvo_core::state::WeaponsView;

use crate::tech_tree::Capabilities;

/// Static properties of one bomb type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BombSpec {
    pub cost: i64,
    pub build_turns: i32,
    pub damage: i32,
    pub score: i64,
    /// Miss chance as (numerator, denominator).
    pub miss: Option<(u32, u32)>,
    /// Research needed before the bomb can be built.
    pub requires: Option<(Capability, TechId)>,
}

pub fn bomb_spec(kind: BombKind) -> BombSpec {
    match kind {
        BombKind::Standard => BombSpec {
            cost: STANDARD_BOMB_COST,
            build_turns: STANDARD_BOMB_TURNS,
            damage: STANDARD_BOMB_DAMAGE,
            score: STANDARD_BOMB_SCORE,
            miss: None,
            requires: None,
        },
        BombKind::Dirty => BombSpec {
            cost: DIRTY_BOMB_COST,
            build_turns: DIRTY_BOMB_TURNS,
            damage: DIRTY_BOMB_DAMAGE,
            score: DIRTY_BOMB_SCORE,
            miss: Some(DIRTY_BOMB_MISS),
            requires: Some((Capability::DirtyBomb, TechId::DirtyBomb)),
        },
        BombKind::Hydrogen => BombSpec {
            cost: HYDROGEN_BOMB_COST,
            build_turns: HYDROGEN_BOMB_TURNS,
            damage: HYDROGEN_BOMB_DAMAGE,
            score: HYDROGEN_BOMB_SCORE,
            miss: Some(HYDROGEN_BOMB_MISS),
            requires: Some((Capability::HydrogenBomb, TechId::HydrogenBomb)),
        },
    }
}

/// Result of a bomb launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Hit { damage: i32, score: i64 },
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialWeapons {
    pub(crate) standard_bomb: i32,
    pub(crate) dirty_bomb: i32,
    pub(crate) hydrogen_bomb: i32,
    pub(crate) iron_curtain: i32,
}

impl Default for SpecialWeapons {
    fn default() -> Self {
        Self {
            standard_bomb: NOT_BUILT,
            dirty_bomb: NOT_BUILT,
            hydrogen_bomb: NOT_BUILT,
            iron_curtain: NOT_BUILT,
        }
    }
}

impl SpecialWeapons {
    pub fn counter(&self, kind: BombKind) -> i32 {
        match kind {
            BombKind::Standard => self.standard_bomb,
            BombKind::Dirty => self.dirty_bomb,
            BombKind::Hydrogen => self.hydrogen_bomb,
        }
    }

    fn counter_mut(&mut self, kind: BombKind) -> &mut i32 {
        match kind {
            BombKind::Standard => &mut self.standard_bomb,
            BombKind::Dirty => &mut self.dirty_bomb,
            BombKind::Hydrogen => &mut self.hydrogen_bomb,
        }
    }

    pub fn is_ready(&self, kind: BombKind) -> bool {
        self.counter(kind) == 0
    }

    pub fn iron_curtain(&self) -> i32 {
        self.iron_curtain
    }

    pub fn is_shield_active(&self) -> bool {
        self.iron_curtain >= 0
    }

    /// Validate a bomb build without changing anything. Returns the deposit
    /// cost and the build duration.
    pub fn check_build(
        &self,
        kind: BombKind,
        capabilities: &Capabilities,
        deposit: i64,
    ) -> Result<(i64, i32)> {
        let spec = bomb_spec(kind);
        if let Some((capability, tech)) = spec.requires {
            if !capabilities.has(capability) {
                return Err(GameError::MissingTechnology(tech));
            }
        }
        if self.counter(kind) != NOT_BUILT {
            return Err(GameError::AlreadyBuilt(kind));
        }
        if deposit < spec.cost {
            return Err(GameError::InsufficientDeposit {
                required: spec.cost,
                available: deposit,
            });
        }
        let turns = if capabilities.has(Capability::RapidAssembly) {
            (spec.build_turns / 2).max(1)
        } else {
            spec.build_turns
        };
        Ok((spec.cost, turns))
    }

    pub(crate) fn start_build(&mut self, kind: BombKind, turns: i32) {
        *self.counter_mut(kind) = turns;
    }

    /// Fire a ready bomb. The counter goes back to "not built" whether or
    /// not the strike lands.
    pub(crate) fn launch<R: Rng>(&mut self, kind: BombKind, rng: &mut R) -> Result<Strike> {
        if !self.is_ready(kind) {
            return Err(GameError::NotReady(kind));
        }
        *self.counter_mut(kind) = NOT_BUILT;

        let spec = bomb_spec(kind);
        if let Some((num, den)) = spec.miss {
            if rng.gen_ratio(num, den) {
                return Ok(Strike::Miss);
            }
        }
        Ok(Strike::Hit {
            damage: spec.damage,
            score: spec.score,
        })
    }

    /// One turn of construction. Returns the bombs that became ready.
    pub(crate) fn tick_builds(&mut self) -> Vec<BombKind> {
        let mut ready = Vec::new();
        for kind in BombKind::ALL {
            let counter = self.counter_mut(kind);
            if *counter > 0 {
                *counter -= 1;
                if *counter == 0 {
                    ready.push(kind);
                }
            }
        }
        ready
    }

    pub fn check_iron_curtain(&self, capabilities: &Capabilities, deposit: i64) -> Result<i64> {
        if !capabilities.has(Capability::IronCurtain) {
            return Err(GameError::MissingTechnology(TechId::IronCurtain));
        }
        if self.is_shield_active() {
            return Err(GameError::ShieldActive);
        }
        if deposit < IRON_CURTAIN_COST {
            return Err(GameError::InsufficientDeposit {
                required: IRON_CURTAIN_COST,
                available: deposit,
            });
        }
        Ok(IRON_CURTAIN_COST)
    }

    pub(crate) fn activate_iron_curtain(&mut self) {
        self.iron_curtain = IRON_CURTAIN_TURNS;
    }

    /// Count the shield down. Returns true on the turn it expires.
    pub(crate) fn tick_iron_curtain(&mut self) -> bool {
        if !self.is_shield_active() {
            return false;
        }
        self.iron_curtain -= 1;
        !self.is_shield_active()
    }

    pub fn view(&self) -> WeaponsView {
        WeaponsView {
            standard_bomb: self.standard_bomb,
            dirty_bomb: self.dirty_bomb,
            hydrogen_bomb: self.hydrogen_bomb,
            iron_curtain: self.iron_curtain,
        }
    }
}
