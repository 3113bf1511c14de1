//! Rotation engine - the three-step cyclic permutation state machine
//!
//! A committed rotation applies up to three single steps to the triad.
//! After steps 1 and 2 the board is scanned; a match stops the cycle there.
//! Step 3 runs unchecked because it restores the original arrangement, so a
//! full cycle is a content no-op that still reports every intermediate move.

use std::collections::BTreeSet;

use crate::core::grid::HexGrid;
use crate::core::matcher;
use crate::core::triad::Triad;
use crate::error::CoreError;
use crate::types::{Coord, Event, Spin, ROTATION_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Rotating { step: u8, spin: Spin },
}

/// What a committed rotation did to the board
#[derive(Debug, Clone)]
pub struct RotationOutcome {
    /// Moved events for every step taken, in order
    pub events: Vec<Event>,
    /// The matched set that stopped the cycle, if any
    pub matched: Option<BTreeSet<Coord>>,
}

#[derive(Debug, Clone)]
pub struct RotationEngine {
    state: EngineState,
}

impl RotationEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == EngineState::Idle
    }

    /// Run a full rotation cycle on `triad`. Returns the move log and, when
    /// a scan after step 1 or 2 found a match, the matched set; the caller
    /// owns the cascade that follows.
    pub fn run(
        &mut self,
        grid: &mut HexGrid,
        triad: &Triad,
        spin: Spin,
    ) -> Result<RotationOutcome, CoreError> {
        if !self.is_idle() {
            return Err(CoreError::RotationInProgress);
        }

        let mut outcome = RotationOutcome {
            events: Vec::with_capacity(9),
            matched: None,
        };
        for step in 0..ROTATION_STEPS {
            self.state = EngineState::Rotating { step, spin };
            Self::apply_step(grid, triad, spin, &mut outcome.events);

            // the final step restores the original arrangement, no scan
            if step < ROTATION_STEPS - 1 {
                let matched = matcher::scan(grid);
                if !matched.is_empty() {
                    outcome.matched = Some(matched);
                    break;
                }
            }
        }
        self.state = EngineState::Idle;
        Ok(outcome)
    }

    /// One cyclic shift of the triad contents plus its three Moved events
    fn apply_step(grid: &mut HexGrid, triad: &Triad, spin: Spin, events: &mut Vec<Event>) {
        let [first, second, third] = triad.cells;
        let a = grid.content(first);
        let b = grid.content(second);
        let c = grid.content(third);
        match spin {
            Spin::Clockwise => {
                grid.set(first, b);
                grid.set(second, c);
                grid.set(third, a);
                events.push(Event::Moved {
                    from: first,
                    to: third,
                });
                events.push(Event::Moved {
                    from: second,
                    to: first,
                });
                events.push(Event::Moved {
                    from: third,
                    to: second,
                });
            }
            Spin::CounterClockwise => {
                grid.set(first, c);
                grid.set(second, a);
                grid.set(third, b);
                events.push(Event::Moved {
                    from: first,
                    to: second,
                });
                events.push(Event::Moved {
                    from: second,
                    to: third,
                });
                events.push(Event::Moved {
                    from: third,
                    to: first,
                });
            }
        }
    }
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new()
    }
}
