//! Board geometry and ASCII terrain queries.
//!
//! The simulation only needs the board size (for spawning and cursor
//! clamping). Terrain is kept for renderers and map validation.

use salvo_core::constants::{TERRAIN_CITY, TERRAIN_LAND, TERRAIN_SEA};
use salvo_core::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: Position,
    cells: Vec<Vec<char>>,
}

impl Board {
    /// Build a board from terrain lines. Height is the line count, width the
    /// longest line; shorter lines are padded with land.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let width = lines
            .iter()
            .map(|l| l.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let cells = lines
            .iter()
            .map(|l| {
                let mut row: Vec<char> = l.as_ref().chars().collect();
                row.resize(width, TERRAIN_LAND);
                row
            })
            .collect::<Vec<_>>();
        Self {
            size: Position::new(cells.len() as i32, width as i32),
            cells,
        }
    }

    pub fn size(&self) -> Position {
        self.size
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.within(&self.size)
    }

    /// Terrain glyph at `pos`, `None` off the board.
    pub fn glyph(&self, pos: Position) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    pub fn is_on_land(&self, pos: Position) -> bool {
        self.glyph(pos) == Some(TERRAIN_LAND)
    }

    pub fn is_on_sea(&self, pos: Position) -> bool {
        self.glyph(pos) == Some(TERRAIN_SEA)
    }

    pub fn is_on_city(&self, pos: Position) -> bool {
        self.glyph(pos) == Some(TERRAIN_CITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_lines_with_land() {
        let board = Board::from_lines(&["~~~~", "~#", ""]);
        assert_eq!(board.size(), Position::new(3, 4));
        assert!(board.is_on_sea(Position::new(0, 3)));
        assert!(board.is_on_city(Position::new(1, 1)));
        assert!(board.is_on_land(Position::new(1, 3)));
        assert!(board.is_on_land(Position::new(2, 0)));
    }

    #[test]
    fn out_of_bounds_is_nothing() {
        let board = Board::from_lines(&["  ", "~#"]);
        for pos in [Position::new(-1, 0), Position::new(0, 2), Position::new(2, 1)] {
            assert!(!board.is_on_land(pos));
            assert!(!board.is_on_sea(pos));
            assert!(!board.is_on_city(pos));
        }
    }
}
