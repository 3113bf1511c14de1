//! Deterministic random number generation for reproducible sessions
//!
//! Linear congruential generator. Not cryptographically secure, which is
//! fine for drawing tile colors and bomb fuses. A session seeded with the
//! same value produces the same board and the same cascades.

use crate::types::{CellContent, Color, FUSE_MAX, FUSE_MIN};

/// Simple LCG-based RNG
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(1664525)
            .wrapping_add(1013904223);
        (self.state >> 16) as u32
    }

    /// Generate random number in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Draw a uniform color from the session palette
    pub fn draw_color(&mut self, palette: &[Color]) -> Color {
        palette[self.next_range(palette.len() as u32) as usize]
    }

    /// Draw a plain tile for a refill
    pub fn draw_tile(&mut self, palette: &[Color]) -> CellContent {
        CellContent::Tile(self.draw_color(palette))
    }

    /// Draw a countdown cell: palette color plus a fuse in [FUSE_MIN, FUSE_MAX)
    pub fn draw_countdown(&mut self, palette: &[Color]) -> CellContent {
        let color = self.draw_color(palette);
        let remaining = FUSE_MIN + self.next_range((FUSE_MAX - FUSE_MIN) as u32) as i8;
        CellContent::Countdown { color, remaining }
    }
}
