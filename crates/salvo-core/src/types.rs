//! Fundamental grid types.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Integer grid coordinate, row first. Doubles as a size (height, width).
/// y = row (grows southward), x = column (grows eastward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub y: i32,
    pub x: i32,
}

impl Position {
    pub const ZERO: Position = Position { y: 0, x: 0 };

    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.y - other.y).abs() + (self.x - other.x).abs()
    }

    /// True when `other` is this cell or one of its eight neighbours.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        (self.y - other.y).abs() <= 1 && (self.x - other.x).abs() <= 1
    }

    /// True when this position lies inside a board of the given size.
    pub fn within(&self, size: &Position) -> bool {
        self.y >= 0 && self.x >= 0 && self.y < size.y && self.x < size.x
    }

    /// Clamp into a board of the given size.
    pub fn clamp_to(&self, size: &Position) -> Position {
        Position {
            y: self.y.clamp(0, (size.y - 1).max(0)),
            x: self.x.clamp(0, (size.x - 1).max(0)),
        }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.y += rhs.y;
        self.x += rhs.x;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.y - rhs.y, self.x - rhs.x)
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    fn mul(self, rhs: i32) -> Position {
        Position::new(self.y * rhs, self.x * rhs)
    }
}

/// Integer division. Dividing by zero yields [`Position::ZERO`].
impl Div<i32> for Position {
    type Output = Position;

    fn div(self, rhs: i32) -> Position {
        if rhs == 0 {
            return Position::ZERO;
        }
        Position::new(self.y / rhs, self.x / rhs)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}
