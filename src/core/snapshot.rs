//! Read-only session state capture
//!
//! A snapshot is a detached copy: hosts render from it, diff it between
//! moves, or feed it to the adapter protocol, all without holding a borrow
//! of the live session.

use crate::core::cascade::Scoreboard;
use crate::core::grid::HexGrid;
use crate::types::{CellContent, Coord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub height: u8,
    pub width: u8,
    /// Row-major cell contents, `row * width + col`
    pub cells: Vec<CellContent>,
    pub score: u32,
    pub bomb_point: u32,
    pub moves: u32,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        grid: &HexGrid,
        scoreboard: &Scoreboard,
        moves: u32,
        game_over: bool,
    ) -> Self {
        let mut cells = Vec::with_capacity(grid.cell_count());
        for row in 0..grid.height() as i8 {
            for col in 0..grid.width() as i8 {
                cells.push(grid.content(Coord::new(row, col)));
            }
        }
        Self {
            height: grid.height(),
            width: grid.width(),
            cells,
            score: scoreboard.score(),
            bomb_point: scoreboard.bomb_point(),
            moves,
            game_over,
        }
    }

    pub fn content_at(&self, coord: Coord) -> Option<CellContent> {
        if coord.row < 0
            || coord.row >= self.height as i8
            || coord.col < 0
            || coord.col >= self.width as i8
        {
            return None;
        }
        Some(self.cells[coord.row as usize * self.width as usize + coord.col as usize])
    }
}
