//! Classic patterns stamped at an anchor cell.
//!
//! Each function takes the anchor as the top-left corner of the
//! pattern's bounding box and writes live cells with
//! [`Grid::set_cell`], so anchors near the edge are clipped.

use lifeloop_core::Grid;

fn stamp(grid: &mut Grid, row: i32, col: i32, cells: &[(i32, i32)]) {
    for &(dr, dc) in cells {
        grid.set_cell(row + dr, col + dc, true);
    }
}

/// 2x2 block (still life).
pub fn block(grid: &mut Grid, row: i32, col: i32) {
    stamp(grid, row, col, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
}

/// Horizontal 3-cell blinker (period 2).
pub fn blinker(grid: &mut Grid, row: i32, col: i32) {
    stamp(grid, row, col, &[(0, 0), (0, 1), (0, 2)]);
}

/// Toad (period 2).
pub fn toad(grid: &mut Grid, row: i32, col: i32) {
    stamp(grid, row, col, &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)]);
}

/// Beacon (period 2).
pub fn beacon(grid: &mut Grid, row: i32, col: i32) {
    stamp(
        grid,
        row,
        col,
        &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    );
}

/// South-east travelling glider.
pub fn glider(grid: &mut Grid, row: i32, col: i32) {
    stamp(grid, row, col, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
}

/// Pulsar (period 3), occupying a 13x13 box.
pub fn pulsar(grid: &mut Grid, row: i32, col: i32) {
    for &a in &[0, 5, 7, 12] {
        for &b in &[2, 3, 4, 8, 9, 10] {
            grid.set_cell(row + a, col + b, true);
            grid.set_cell(row + b, col + a, true);
        }
    }
}

/// A fresh grid of the given size with one pattern applied.
pub fn grid_with(
    rows: usize,
    cols: usize,
    pattern: fn(&mut Grid, i32, i32),
    row: i32,
    col: i32,
) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("fixture dimensions");
    pattern(&mut grid, row, col);
    grid
}
