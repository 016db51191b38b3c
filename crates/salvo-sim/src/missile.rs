//! Missile data model and grid kinematics.
//!
//! Both roles share the kinematic payload (position, target, speed, damage,
//! exploded). The role-specific payload lives in [`MissileKind`]. Homing for
//! interceptors needs the live position of another missile, so it is driven
//! by the missile manager through [`Missile::retarget`] and [`Missile::step`].

use serde::{Deserialize, Serialize};

use salvo_core::enums::{Direction, MissileRole};
use salvo_core::types::Position;

use crate::city::CityId;

/// Stable missile identifier, assigned in increasing order by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MissileId(pub u32);

impl std::fmt::Display for MissileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissileKind {
    /// Enemy missile flying to a fixed city.
    Attack {
        city: CityId,
        /// An interceptor has been committed against this missile.
        is_aimed: bool,
        /// Exploded by an interceptor rather than by reaching its city.
        intercepted: bool,
    },
    /// Player interceptor pursuing an attack missile.
    Cruise { target: MissileId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Missile {
    pub(crate) id: MissileId,
    pub(crate) position: Position,
    pub(crate) target: Position,
    pub(crate) exploded: bool,
    pub(crate) damage: i32,
    pub(crate) speed: i32,
    pub(crate) kind: MissileKind,
}

impl Missile {
    pub(crate) fn attack(
        id: MissileId,
        origin: Position,
        city: CityId,
        city_position: Position,
        damage: i32,
        speed: i32,
    ) -> Self {
        Self {
            id,
            position: origin,
            target: city_position,
            exploded: false,
            damage,
            speed,
            kind: MissileKind::Attack {
                city,
                is_aimed: false,
                intercepted: false,
            },
        }
    }

    pub(crate) fn cruise(
        id: MissileId,
        origin: Position,
        pursued: MissileId,
        pursued_position: Position,
        damage: i32,
        speed: i32,
    ) -> Self {
        Self {
            id,
            position: origin,
            target: pursued_position,
            exploded: false,
            damage,
            speed,
            kind: MissileKind::Cruise { target: pursued },
        }
    }

    pub fn id(&self) -> MissileId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn kind(&self) -> MissileKind {
        self.kind
    }

    pub fn role(&self) -> MissileRole {
        match self.kind {
            MissileKind::Attack { .. } => MissileRole::Attack,
            MissileKind::Cruise { .. } => MissileRole::Cruise,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self.kind, MissileKind::Attack { .. })
    }

    pub fn is_cruise(&self) -> bool {
        matches!(self.kind, MissileKind::Cruise { .. })
    }

    /// Target city of an attack missile.
    pub fn target_city(&self) -> Option<CityId> {
        match self.kind {
            MissileKind::Attack { city, .. } => Some(city),
            MissileKind::Cruise { .. } => None,
        }
    }

    /// Pursued missile of an interceptor.
    pub fn pursued(&self) -> Option<MissileId> {
        match self.kind {
            MissileKind::Cruise { target } => Some(target),
            MissileKind::Attack { .. } => None,
        }
    }

    pub fn is_aimed(&self) -> bool {
        matches!(self.kind, MissileKind::Attack { is_aimed: true, .. })
    }

    pub fn is_intercepted(&self) -> bool {
        matches!(self.kind, MissileKind::Attack { intercepted: true, .. })
    }

    /// Attack missile that exploded on its own target cell.
    pub fn has_hit_target(&self) -> bool {
        self.exploded && self.is_attack() && !self.is_intercepted() && self.position == self.target
    }

    /// Current heading toward the target.
    pub fn direction(&self) -> Direction {
        Direction::between(self.position, self.target)
    }

    pub(crate) fn mark_aimed(&mut self) {
        if let MissileKind::Attack { is_aimed, .. } = &mut self.kind {
            *is_aimed = true;
        }
    }

    pub(crate) fn mark_intercepted(&mut self) {
        if let MissileKind::Attack { intercepted, .. } = &mut self.kind {
            *intercepted = true;
        }
        self.exploded = true;
    }

    pub(crate) fn retarget(&mut self, target: Position) {
        self.target = target;
    }

    /// Take one unit step toward the target.
    ///
    /// Returns true when the missile has arrived; arrival flags it exploded
    /// and it never moves past the target.
    pub(crate) fn step(&mut self) -> bool {
        if self.exploded {
            return true;
        }
        match self.direction() {
            Direction::Arrived => {
                self.exploded = true;
                true
            }
            heading => {
                self.position += heading.offset();
                if self.position == self.target {
                    self.exploded = true;
                    return true;
                }
                false
            }
        }
    }

    /// Advance a full turn toward a fixed target: up to `speed` unit steps,
    /// stopping on arrival. Returns the number of cells moved.
    pub(crate) fn advance(&mut self) -> i32 {
        let mut moved = 0;
        for _ in 0..self.speed {
            let start = self.position;
            let arrived = self.step();
            if self.position != start {
                moved += 1;
            }
            if arrived {
                break;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn attack_at(origin: Position, target: Position, speed: i32) -> Missile {
        Missile::attack(MissileId(0), origin, CityId(0), target, 100, speed)
    }

    #[test]
    fn attack_missile_moves_speed_cells() {
        let mut m = attack_at(Position::new(0, 0), Position::new(0, 10), 3);
        assert_eq!(m.advance(), 3);
        assert_eq!(m.position(), Position::new(0, 3));
        assert!(!m.is_exploded());
    }

    #[test]
    fn attack_missile_stops_on_target() {
        let mut m = attack_at(Position::new(0, 0), Position::new(0, 2), 4);
        assert_eq!(m.advance(), 2);
        assert_eq!(m.position(), Position::new(0, 2));
        assert!(m.is_exploded());
        assert!(m.has_hit_target());
    }

    #[test]
    fn missile_on_target_explodes_without_moving() {
        let mut m = attack_at(Position::new(4, 4), Position::new(4, 4), 2);
        assert_eq!(m.advance(), 0);
        assert!(m.is_exploded());
    }

    #[test]
    fn exploded_missile_does_not_move() {
        let mut m = attack_at(Position::new(0, 0), Position::new(0, 1), 1);
        m.advance();
        assert!(m.is_exploded());
        assert_eq!(m.advance(), 0);
        assert_eq!(m.position(), Position::new(0, 1));
    }

    #[test]
    fn diagonal_then_cardinal() {
        let mut m = attack_at(Position::new(0, 0), Position::new(2, 5), 3);
        m.advance();
        // two diagonal steps close the row gap, the third runs east
        assert_eq!(m.position(), Position::new(2, 3));
        assert_eq!(m.direction(), Direction::East);
    }

    #[test]
    fn aim_and_intercept_flags() {
        let mut m = attack_at(Position::new(0, 0), Position::new(0, 9), 1);
        assert!(!m.is_aimed());
        m.mark_aimed();
        assert!(m.is_aimed());
        m.mark_intercepted();
        assert!(m.is_exploded());
        assert!(m.is_intercepted());
        assert!(!m.has_hit_target());
    }

    #[test]
    fn cruise_accessors() {
        let m = Missile::cruise(
            MissileId(7),
            Position::new(1, 1),
            MissileId(3),
            Position::new(5, 5),
            0,
            3,
        );
        assert!(m.is_cruise());
        assert_eq!(m.pursued(), Some(MissileId(3)));
        assert_eq!(m.target_city(), None);
        assert_eq!(m.role(), MissileRole::Cruise);
    }

    proptest! {
        #[test]
        fn prop_never_overshoots(
            oy in -30i32..30, ox in -30i32..30,
            ty in -30i32..30, tx in -30i32..30,
            speed in 1i32..6,
        ) {
            let origin = Position::new(oy, ox);
            let target = Position::new(ty, tx);
            let mut m = attack_at(origin, target, speed);
            let before = origin.manhattan(&target);
            let moved = m.advance();

            prop_assert!(moved <= speed);
            prop_assert!(m.position().manhattan(&target) <= before);
            if m.is_exploded() {
                prop_assert_eq!(m.position(), target);
            } else {
                prop_assert_eq!(moved, speed);
            }
        }
    }
}
