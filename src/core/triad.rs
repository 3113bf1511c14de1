//! Triad catalog - the six triangle patterns around a pivot cell
//!
//! Every pivot anchors up to six triangles ("fans"), one per direction, and
//! the pattern geometry depends on the pivot's column parity. The member
//! order (first, second, third) is fixed per pattern and is what the
//! rotation permutation cycles over.

use arrayvec::ArrayVec;

use crate::core::grid::HexGrid;
use crate::types::{Coord, Direction};

/// Triangle member deltas `[(d_row, d_col); 3]` in (first, second, third)
/// order, indexed by `[parity][Direction::index()]`. The pivot itself is
/// always one of the three members.
pub const TRIAD_MEMBER_OFFSETS: [[[(i8, i8); 3]; 6]; 2] = [
    // even columns
    [
        [(-1, 0), (0, 0), (-1, 1)], // RightTop
        [(0, 0), (0, 1), (-1, 1)],  // RightSide
        [(0, 0), (1, 0), (0, 1)],   // RightBottom
        [(-1, -1), (0, 0), (-1, 0)], // LeftTop
        [(-1, -1), (0, -1), (0, 0)], // LeftSide
        [(0, -1), (1, 0), (0, 0)],  // LeftBottom
    ],
    // odd columns
    [
        [(-1, 0), (0, 0), (0, 1)], // RightTop
        [(0, 0), (1, 1), (0, 1)],  // RightSide
        [(0, 0), (1, 0), (1, 1)],  // RightBottom
        [(0, -1), (0, 0), (-1, 0)], // LeftTop
        [(0, -1), (1, -1), (0, 0)], // LeftSide
        [(1, -1), (1, 0), (0, 0)], // LeftBottom
    ],
];

/// Corner midpoints `(d_x, d_y)` of a unit hexagon centered at the origin,
/// indexed by `Direction::index()`. Used only for ranking directions by
/// distance to a pointer position; the values match the rendered cell
/// geometry the proximity flow was designed around.
pub const CORNER_OFFSETS: [(f32, f32); 6] = [
    (0.23, 0.37),   // RightTop
    (0.46, 0.0),    // RightSide
    (0.23, -0.38),  // RightBottom
    (-0.23, 0.37),  // LeftTop
    (-0.46, 0.0),   // LeftSide
    (-0.23, -0.38), // LeftBottom
];

/// A concrete triangle of three mutually adjacent cells.
///
/// Transient: computed from a pivot and direction, consumed by
/// `commit_rotation`, never stored across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triad {
    pub pivot: Coord,
    pub direction: Direction,
    /// Members in (first, second, third) pattern order
    pub cells: [Coord; 3],
}

impl Triad {
    /// The triangle anchored at `pivot` in `direction`, or `None` when any
    /// member falls outside the board.
    pub fn compute(grid: &HexGrid, pivot: Coord, direction: Direction) -> Option<Triad> {
        let deltas = TRIAD_MEMBER_OFFSETS[pivot.parity()][direction.index()];
        let cells = [
            pivot.offset(deltas[0]),
            pivot.offset(deltas[1]),
            pivot.offset(deltas[2]),
        ];
        cells
            .iter()
            .all(|&c| grid.in_bounds(c))
            .then_some(Triad {
                pivot,
                direction,
                cells,
            })
    }

    /// First valid triangle walking `order`, or `None` when the pivot is out
    /// of bounds or every pattern spills over an edge (never happens on
    /// boards at least 2x2).
    pub fn candidate(grid: &HexGrid, pivot: Coord, order: [Direction; 6]) -> Option<Triad> {
        if !grid.in_bounds(pivot) {
            return None;
        }
        order
            .iter()
            .find_map(|&direction| Triad::compute(grid, pivot, direction))
    }
}

impl Direction {
    /// The six directions ordered by distance from `point` to each corner of
    /// the cell centered at `center`, closest first. Hosts feed the result
    /// straight into [`Triad::candidate`] to select the triangle nearest a
    /// tap or click.
    pub fn ranked_by_distance(point: (f32, f32), center: (f32, f32)) -> [Direction; 6] {
        let mut ranked: ArrayVec<(f32, Direction), 6> = Direction::ALL
            .iter()
            .map(|&d| {
                let (dx, dy) = CORNER_OFFSETS[d.index()];
                let ex = center.0 + dx - point.0;
                let ey = center.1 + dy - point.1;
                (ex * ex + ey * ey, d)
            })
            .collect();
        // distances are finite, total_cmp keeps the sort stable on ties
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut out = [Direction::RightTop; 6];
        for (slot, (_, d)) in out.iter_mut().zip(ranked) {
            *slot = d;
        }
        out
    }
}
