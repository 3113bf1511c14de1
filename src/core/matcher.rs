//! Match detection - exhaustive scan for uniform triangles
//!
//! A cluster is any triangle (one of the six anchored patterns) whose three
//! members hold the same non-empty color. Countdown cells participate by
//! their color like plain tiles. The scan visits every cell in the fixed
//! (col, row) order and returns the union of all matched triangles as an
//! ordered set; the order cannot affect the result.

use std::collections::BTreeSet;

use crate::core::grid::HexGrid;
use crate::core::triad::Triad;
use crate::types::{Coord, Direction};

/// All cells that belong to at least one uniform triangle
pub fn scan(grid: &HexGrid) -> BTreeSet<Coord> {
    let mut matched = BTreeSet::new();
    for coord in grid.coords() {
        let Some(color) = grid.content(coord).color() else {
            continue;
        };
        for direction in Direction::ALL {
            let Some(triad) = Triad::compute(grid, coord, direction) else {
                continue;
            };
            if triad
                .cells
                .iter()
                .all(|&c| grid.content(c).color() == Some(color))
            {
                matched.extend(triad.cells);
            }
        }
    }
    matched
}
