//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Board dimensions (rows x columns)
pub const DEFAULT_HEIGHT: u8 = 9;
pub const DEFAULT_WIDTH: u8 = 8;

/// Allowed dimension ranges for a session
pub const MIN_HEIGHT: u8 = 5;
pub const MAX_HEIGHT: u8 = 9;
pub const MIN_WIDTH: u8 = 4;
pub const MAX_WIDTH: u8 = 8;

/// Scoring constants
pub const POINTS_PER_CELL: u32 = 5;
pub const BOMB_POINT_START: u32 = 1000;
pub const BOMB_POINT_STEP: u32 = 1000;

/// Countdown fuse range: `remaining` is drawn uniformly from [FUSE_MIN, FUSE_MAX)
pub const FUSE_MIN: i8 = 6;
pub const FUSE_MAX: i8 = 10;

/// A rotation commits at most this many single steps before the triad
/// returns to its original arrangement
pub const ROTATION_STEPS: u8 = 3;

/// Tile colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Orange,
    ];

    /// Single-character tag, used by debug dumps and the JSON protocol
    pub fn as_char(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::Yellow => 'y',
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Purple => 'p',
            Color::Orange => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'y' => Some(Color::Yellow),
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            'p' => Some(Color::Purple),
            'o' => Some(Color::Orange),
            _ => None,
        }
    }
}

/// A board position. `col % 2` selects the parity geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// 0 for even columns, 1 for odd. Defined for off-board coordinates
    /// too, since triad lookups probe before bounds-checking.
    pub fn parity(&self) -> usize {
        self.col.rem_euclid(2) as usize
    }

    /// This coordinate shifted by a (row, col) delta. May be out of bounds;
    /// callers validate against the grid.
    pub fn offset(&self, delta: (i8, i8)) -> Coord {
        Coord {
            row: self.row + delta.0,
            col: self.col + delta.1,
        }
    }
}

/// Content of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellContent {
    Empty,
    Tile(Color),
    /// A bomb tile: matches by color like a plain tile, but `remaining`
    /// ticks down on every successful move and ends the game at zero.
    Countdown { color: Color, remaining: i8 },
}

impl CellContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Empty)
    }

    /// Color of the content, `None` for empty cells
    pub fn color(&self) -> Option<Color> {
        match self {
            CellContent::Empty => None,
            CellContent::Tile(color) => Some(*color),
            CellContent::Countdown { color, .. } => Some(*color),
        }
    }
}

/// The six fan directions around a pivot cell. Each names both a corner of
/// the hexagon (for proximity ranking) and the triangle of cells on that
/// side of the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    RightTop,
    RightSide,
    RightBottom,
    LeftTop,
    LeftSide,
    LeftBottom,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::RightTop,
        Direction::RightSide,
        Direction::RightBottom,
        Direction::LeftTop,
        Direction::LeftSide,
        Direction::LeftBottom,
    ];

    /// Stable index into the per-parity lookup tables
    pub fn index(&self) -> usize {
        match self {
            Direction::RightTop => 0,
            Direction::RightSide => 1,
            Direction::RightBottom => 2,
            Direction::LeftTop => 3,
            Direction::LeftSide => 4,
            Direction::LeftBottom => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::RightTop => "rightTop",
            Direction::RightSide => "rightSide",
            Direction::RightBottom => "rightBottom",
            Direction::LeftTop => "leftTop",
            Direction::LeftSide => "leftSide",
            Direction::LeftBottom => "leftBottom",
        }
    }
}

/// Rotation direction for a committed triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// One discrete state change produced by a committed rotation.
///
/// `commit_rotation` returns the complete ordered log synchronously; the host
/// replays it at whatever pace its animation layer wants. A failed rotation
/// (no match within two steps) still emits all nine `Moved` events even
/// though the final content is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Content moved from one cell to another (rotation step or gravity)
    Moved { from: Coord, to: Coord },
    /// A uniform cluster exploded; cells are in sorted order
    Exploded { cells: Vec<Coord> },
    /// A refill placed new content at the top of a column
    Spawned { cell: Coord, content: CellContent },
    ScoreChanged { score: u32 },
    /// A countdown cell ticked down after a successful move
    CountdownTicked { cell: Coord, remaining: i8 },
    GameOver,
}
