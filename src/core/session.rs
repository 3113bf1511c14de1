//! Session - owns the board, the engines, and the scoreboard
//!
//! One `Session` is one game. All state is explicit and owned here (no
//! globals), so hosts can run several games side by side and tests can
//! construct exact scenarios with `with_grid`.

use crate::core::cascade::{CascadeResolver, Scoreboard};
use crate::core::grid::HexGrid;
use crate::core::matcher;
use crate::core::rng::SimpleRng;
use crate::core::rotation::RotationEngine;
use crate::core::snapshot::SessionSnapshot;
use crate::core::triad::Triad;
use crate::error::CoreError;
use crate::types::{
    CellContent, Color, Coord, Direction, Event, Spin, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH, POINTS_PER_CELL,
};

/// Tuning knobs for a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub height: u8,
    pub width: u8,
    /// Colors drawn for the initial deal and refills. Board restores via
    /// `with_grid` may still contain colors outside this palette.
    pub palette: Vec<Color>,
    pub points_per_cell: u32,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            palette: Color::ALL.to_vec(),
            points_per_cell: POINTS_PER_CELL,
            seed: 0,
        }
    }
}

impl SessionConfig {
    fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height) {
            return Err(CoreError::InvalidConfig(format!(
                "height {} outside [{}, {}]",
                self.height, MIN_HEIGHT, MAX_HEIGHT
            )));
        }
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(CoreError::InvalidConfig(format!(
                "width {} outside [{}, {}]",
                self.width, MIN_WIDTH, MAX_WIDTH
            )));
        }
        let mut distinct = self.palette.clone();
        distinct.sort();
        distinct.dedup();
        if distinct.len() < 2 {
            // with one color every refill would re-match forever
            return Err(CoreError::InvalidConfig(format!(
                "palette needs at least 2 distinct colors, got {}",
                distinct.len()
            )));
        }
        Ok(())
    }
}

/// One running game
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: HexGrid,
    engine: RotationEngine,
    resolver: CascadeResolver,
    scoreboard: Scoreboard,
    rng: SimpleRng,
    moves: u32,
    game_over: bool,
    /// False only during the deal's silent clear
    scoring_enabled: bool,
}

impl Session {
    /// Start a fresh game: fill the board from the palette, then silently
    /// resolve any clusters the deal produced — lucky starting boards award
    /// no points.
    pub fn new(config: SessionConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let mut session = Self {
            grid: HexGrid::new(config.height, config.width),
            engine: RotationEngine::new(),
            resolver: CascadeResolver,
            scoreboard: Scoreboard::new(config.points_per_cell),
            rng: SimpleRng::new(config.seed),
            moves: 0,
            game_over: false,
            scoring_enabled: false,
            config,
        };
        session.deal();
        Ok(session)
    }

    /// Restore a prepared board as-is: no silent clear, scoring enabled.
    /// The board's dimensions must match the config.
    pub fn with_grid(config: SessionConfig, grid: HexGrid) -> Result<Self, CoreError> {
        config.validate()?;
        if grid.height() != config.height || grid.width() != config.width {
            return Err(CoreError::InvalidConfig(format!(
                "board is {}x{}, config says {}x{}",
                grid.height(),
                grid.width(),
                config.height,
                config.width
            )));
        }
        Ok(Self {
            grid,
            engine: RotationEngine::new(),
            resolver: CascadeResolver,
            scoreboard: Scoreboard::new(config.points_per_cell),
            rng: SimpleRng::new(config.seed),
            moves: 0,
            game_over: false,
            scoring_enabled: true,
            config,
        })
    }

    /// Re-roll the board and reset score, moves, and game-over state. The
    /// RNG continues from where it was, so repeated games differ.
    pub fn play_again(&mut self) {
        self.scoreboard.reset();
        self.moves = 0;
        self.game_over = false;
        self.scoring_enabled = false;
        self.deal();
    }

    fn deal(&mut self) {
        for coord in self.grid.coords().collect::<Vec<_>>() {
            let tile = self.rng.draw_tile(&self.config.palette);
            self.grid.set(coord, tile);
        }
        let matched = matcher::scan(&self.grid);
        let mut discard = Vec::new();
        self.resolver.resolve(
            &mut self.grid,
            matched,
            &mut self.scoreboard,
            &mut self.rng,
            &self.config.palette,
            false,
            &mut discard,
        );
        self.scoring_enabled = true;
    }

    /// First valid triangle at `pivot` walking `order`. Pair with
    /// `Direction::ranked_by_distance` to select the triangle nearest a
    /// pointer position.
    pub fn candidate_triad(&self, pivot: Coord, order: [Direction; 6]) -> Option<Triad> {
        Triad::candidate(&self.grid, pivot, order)
    }

    /// Rotate a triad and resolve everything that follows. Returns the
    /// complete ordered event log for the move; the board is already in its
    /// final state when this returns.
    pub fn commit_rotation(&mut self, triad: &Triad, spin: Spin) -> Result<Vec<Event>, CoreError> {
        if self.game_over {
            return Err(CoreError::GameOver);
        }
        if !self.engine.is_idle() {
            return Err(CoreError::RotationInProgress);
        }
        // recompute from pivot + direction: a stale triad from before an
        // earlier cascade may no longer describe a valid triangle
        let current = Triad::compute(&self.grid, triad.pivot, triad.direction)
            .filter(|t| t.cells == triad.cells)
            .ok_or(CoreError::InvalidTriad)?;

        let outcome = self.engine.run(&mut self.grid, &current, spin)?;
        let mut events = outcome.events;

        if let Some(matched) = outcome.matched {
            self.moves += 1;
            // countdowns tick on the successful move, except the ones the
            // move itself is about to explode
            for (cell, _) in self.grid.countdown_cells() {
                if matched.contains(&cell) {
                    continue;
                }
                if let CellContent::Countdown { color, remaining } = self.grid.content(cell) {
                    let remaining = remaining - 1;
                    self.grid
                        .set(cell, CellContent::Countdown { color, remaining });
                    events.push(Event::CountdownTicked { cell, remaining });
                }
            }

            self.resolver.resolve(
                &mut self.grid,
                matched,
                &mut self.scoreboard,
                &mut self.rng,
                &self.config.palette,
                self.scoring_enabled,
                &mut events,
            );

            // terminal check at quiescence
            if self
                .grid
                .countdown_cells()
                .iter()
                .any(|&(_, remaining)| remaining <= 0)
            {
                self.game_over = true;
                events.push(Event::GameOver);
            }
        }
        Ok(events)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.grid, &self.scoreboard, self.moves, self.game_over)
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
