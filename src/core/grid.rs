//! Grid module - manages the hexagonal game board
//!
//! The board is a `height x width` rectangular array of cells laid out as an
//! offset hexagonal grid: `col % 2` (the column parity) decides which
//! neighbor-offset table applies. Storage is a flat row-major vector.
//! Coordinates: (row, col) with row 0 at the top.

use crate::types::{CellContent, Coord, Direction};

/// Neighbor deltas `(d_row, d_col)` indexed by `[parity][Direction::index()]`.
///
/// The even-column row is the contract table for [`HexGrid::neighbor`]; the
/// odd-column row is its vertical mirror. Triangle membership does not go
/// through this table — see `core::triad`, whose patterns also use the
/// `(row±1, col)` intermediate cells.
pub const NEIGHBOR_OFFSETS: [[(i8, i8); 6]; 2] = [
    // even columns: RightTop, RightSide, RightBottom, LeftTop, LeftSide, LeftBottom
    [(-1, 1), (0, 1), (1, 0), (-1, -1), (0, -1), (1, -1)],
    // odd columns: vertical mirror of the even table
    [(1, 1), (0, 1), (-1, 0), (1, -1), (0, -1), (-1, -1)],
];

/// The game board - flat row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexGrid {
    height: u8,
    width: u8,
    cells: Vec<CellContent>,
}

impl HexGrid {
    /// Create a new all-empty grid. Dimension validation happens at the
    /// session boundary; the grid itself accepts any non-zero size.
    pub fn new(height: u8, width: u8) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be non-zero");
        Self {
            height,
            width,
            cells: vec![CellContent::Empty; height as usize * width as usize],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0
            || coord.row >= self.height as i8
            || coord.col < 0
            || coord.col >= self.width as i8
        {
            return None;
        }
        Some(coord.row as usize * self.width as usize + coord.col as usize)
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Get cell content at a coordinate. Returns `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<CellContent> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell content at a coordinate. Returns false if out of bounds.
    pub fn set(&mut self, coord: Coord, content: CellContent) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = content;
                true
            }
            None => false,
        }
    }

    /// Content at a coordinate that callers have already validated.
    /// Panics on out-of-bounds: that is a geometry bug, not caller input.
    pub(crate) fn content(&self, coord: Coord) -> CellContent {
        match self.get(coord) {
            Some(content) => content,
            None => panic!(
                "coordinate ({}, {}) outside {}x{} board",
                coord.row, coord.col, self.height, self.width
            ),
        }
    }

    /// Neighbor of a cell in one of the six directions, or `None` when the
    /// target falls outside the board.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let delta = NEIGHBOR_OFFSETS[coord.parity()][direction.index()];
        let target = coord.offset(delta);
        self.in_bounds(target).then_some(target)
    }

    /// All coordinates in the fixed (col, row) scan order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let (height, width) = (self.height as i8, self.width as i8);
        (0..width).flat_map(move |col| (0..height).map(move |row| Coord::new(row, col)))
    }

    /// Coordinates of all countdown cells with their remaining counters.
    /// The grid is the registry; contents move between cells too often for a
    /// parallel list to stay trustworthy.
    pub fn countdown_cells(&self) -> Vec<(Coord, i8)> {
        self.coords()
            .filter_map(|coord| match self.content(coord) {
                CellContent::Countdown { remaining, .. } => Some((coord, remaining)),
                _ => None,
            })
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Comma-separated board dump, one line per row, for test diagnostics.
    /// Tiles print their color char, countdown cells uppercase, empty `.`
    pub fn ascii(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                if col > 0 {
                    out.push(',');
                }
                match self.content(Coord::new(row, col)) {
                    CellContent::Empty => out.push('.'),
                    CellContent::Tile(color) => out.push(color.as_char()),
                    CellContent::Countdown { color, .. } => {
                        out.push(color.as_char().to_ascii_uppercase())
                    }
                }
            }
            out.push('\n');
        }
        out
    }

    /// Build a grid from rows of content for testing
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<CellContent>>) -> Self {
        let height = rows.len() as u8;
        let width = rows[0].len() as u8;
        assert!(rows.iter().all(|r| r.len() == width as usize));
        Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}
