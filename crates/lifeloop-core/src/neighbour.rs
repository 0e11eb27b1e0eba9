//! Closed-boundary 8-connected neighbourhood.

use smallvec::SmallVec;

use crate::grid::Grid;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// In-bounds neighbour coordinates as `(row, col)` pairs.
///
/// Never more than 8, so it always stays inline.
pub type Neighbours = SmallVec<[(i32, i32); 8]>;

/// Count the live neighbours of `(row, col)`.
///
/// Offsets that land outside the grid contribute nothing: the boundary
/// is closed, not toroidal. The result is always in `[0, 8]`.
#[inline]
pub fn count_neighbours(grid: &Grid, row: i32, col: i32) -> u8 {
    let mut count = 0;
    for (dr, dc) in OFFSETS_8 {
        let (Some(nr), Some(nc)) = (row.checked_add(dr), col.checked_add(dc)) else {
            continue;
        };
        if grid.is_alive(nr, nc) {
            count += 1;
        }
    }
    count
}

/// In-bounds neighbours of `(row, col)` on a `rows x cols` grid.
///
/// Corners have 3, edge cells 5, interior cells 8. A coordinate that is
/// itself out of bounds may still have in-bounds neighbours.
pub fn neighbours(rows: usize, cols: usize, row: i32, col: i32) -> Neighbours {
    let mut result = Neighbours::new();
    for (dr, dc) in OFFSETS_8 {
        let (Some(nr), Some(nc)) = (row.checked_add(dr), col.checked_add(dc)) else {
            continue;
        };
        if nr >= 0 && nc >= 0 && (nr as usize) < rows && (nc as usize) < cols {
            result.push((nr, nc));
        }
    }
    result
}
