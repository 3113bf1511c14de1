//! Cascade resolution - score, clear, gravity, refill, repeat
//!
//! One wave: award points for the matched set, clear it, compact every
//! column bottom-up, spawn new content into the remaining top-prefix
//! empties, then rescan. Waves repeat until a scan comes back empty.
//! Refills draw plain tiles until the running score crosses `bomb_point`;
//! that refill becomes a countdown cell and the threshold advances.

use std::collections::BTreeSet;

use crate::core::grid::HexGrid;
use crate::core::matcher;
use crate::core::rng::SimpleRng;
use crate::types::{
    CellContent, Color, Coord, Event, BOMB_POINT_START, BOMB_POINT_STEP,
};

/// Score state for one session. `score` only ever grows; `bomb_point` is the
/// next score threshold at which a refill spawns a countdown cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub(crate) score: u32,
    pub(crate) bomb_point: u32,
    pub(crate) points_per_cell: u32,
}

impl Scoreboard {
    pub fn new(points_per_cell: u32) -> Self {
        Self {
            score: 0,
            bomb_point: BOMB_POINT_START,
            points_per_cell,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bomb_point(&self) -> u32 {
        self.bomb_point
    }

    /// Award a cleared set, returning the new total
    fn award(&mut self, cleared: usize) -> u32 {
        self.score += self.points_per_cell * cleared as u32;
        self.score
    }

    /// True once per threshold crossing; advances the threshold as a side
    /// effect so consecutive refills go back to plain tiles.
    fn crosses_bomb_point(&mut self) -> bool {
        if self.score >= self.bomb_point {
            self.bomb_point += BOMB_POINT_STEP;
            true
        } else {
            false
        }
    }

    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.bomb_point = BOMB_POINT_START;
    }
}

/// Runs matched sets to quiescence. Stateless; all session state is passed
/// in so the resolver can be shared by setup (silent clear) and play.
#[derive(Debug, Clone, Default)]
pub struct CascadeResolver;

impl CascadeResolver {
    /// Resolve `matched` and every follow-up wave. With `scoring_enabled`
    /// false (the session-creation silent clear) no points are awarded and
    /// no `ScoreChanged` events are emitted, but gravity and refill behave
    /// identically.
    pub fn resolve(
        &self,
        grid: &mut HexGrid,
        matched: BTreeSet<Coord>,
        scoreboard: &mut Scoreboard,
        rng: &mut SimpleRng,
        palette: &[Color],
        scoring_enabled: bool,
        events: &mut Vec<Event>,
    ) {
        let mut wave = matched;
        while !wave.is_empty() {
            if scoring_enabled {
                let score = scoreboard.award(wave.len());
                events.push(Event::ScoreChanged { score });
            }

            events.push(Event::Exploded {
                cells: wave.iter().copied().collect(),
            });
            for &cell in &wave {
                grid.set(cell, CellContent::Empty);
            }

            Self::compact(grid, events);
            Self::spawn(grid, scoreboard, rng, palette, events);

            wave = matcher::scan(grid);
        }
    }

    /// Per-column gravity: every surviving cell slides straight down past
    /// the empties below it, preserving relative order within the column.
    fn compact(grid: &mut HexGrid, events: &mut Vec<Event>) {
        let height = grid.height() as i8;
        for col in 0..grid.width() as i8 {
            let mut write = height - 1;
            for row in (0..height).rev() {
                let coord = Coord::new(row, col);
                let content = grid.content(coord);
                if content.is_empty() {
                    continue;
                }
                if write != row {
                    let target = Coord::new(write, col);
                    grid.set(target, content);
                    grid.set(coord, CellContent::Empty);
                    events.push(Event::Moved {
                        from: coord,
                        to: target,
                    });
                }
                write -= 1;
            }
        }
    }

    /// Fill the post-compaction empties (a top prefix of each column),
    /// lowest first.
    fn spawn(
        grid: &mut HexGrid,
        scoreboard: &mut Scoreboard,
        rng: &mut SimpleRng,
        palette: &[Color],
        events: &mut Vec<Event>,
    ) {
        let height = grid.height() as i8;
        for col in 0..grid.width() as i8 {
            for row in (0..height).rev() {
                let coord = Coord::new(row, col);
                if !grid.content(coord).is_empty() {
                    continue;
                }
                let content = if scoreboard.crosses_bomb_point() {
                    rng.draw_countdown(palette)
                } else {
                    rng.draw_tile(palette)
                };
                grid.set(coord, content);
                events.push(Event::Spawned {
                    cell: coord,
                    content,
                });
            }
        }
    }
}
