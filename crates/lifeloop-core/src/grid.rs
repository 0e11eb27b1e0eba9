//! Fixed-size double-buffered cell grid.

use std::fmt;

use crate::error::GridError;
use crate::neighbour::{self, Neighbours};
use crate::state::GenerationState;
use crate::traits::CellWriter;

/// A bounded rectangular grid of live/dead cells.
///
/// Cells are stored row-major in two owned buffers of identical length:
/// `current` holds the visible generation and `next` is the staging
/// buffer the stepper writes into before swapping the two. Only
/// `current` is ever observable through the public API.
///
/// Coordinates are signed so that pattern stampers can pass offsets
/// computed without bounds arithmetic. Anything outside
/// `[0, rows) x [0, cols)` is never stored: writes there are ignored
/// and reads there return `false`.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    pub(crate) current: Vec<bool>,
    pub(crate) next: Vec<bool>,
}

impl Grid {
    /// Maximum size of either dimension. Coordinates are `i32`, so each
    /// axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Maximum number of cells, 8192 x 8192. Both buffers and every
    /// retained history state scale with it.
    pub const MAX_CELLS: usize = 1 << 26;

    /// Create an all-dead grid with `rows * cols` cells.
    ///
    /// Fails under the same conditions as
    /// [`check_dimensions`](Self::check_dimensions).
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let cell_count = Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            current: vec![false; cell_count],
            next: vec![false; cell_count],
        })
    }

    /// Validate grid dimensions without allocating; returns the cell count.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(GridError::TooManyCells)` if
    /// `rows * cols` exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn check_dimensions(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        rows.checked_mul(cols)
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .ok_or(GridError::TooManyCells {
                rows,
                cols,
                max: Self::MAX_CELLS,
            })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.current.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major index of `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub(crate) fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    /// Set a cell. Silently ignored when `(row, col)` is out of bounds.
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) {
        if let Some(i) = self.index(row, col) {
            self.current[i] = alive;
        }
    }

    /// Whether a cell is alive. Out-of-bounds cells are dead.
    #[inline]
    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some_and(|i| self.current[i])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// The visible generation as a row-major slice.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    /// Live-neighbour count of `(row, col)` under the closed boundary.
    pub fn count_neighbours(&self, row: i32, col: i32) -> u8 {
        neighbour::count_neighbours(self, row, col)
    }

    /// In-bounds 8-connected neighbour coordinates of `(row, col)`.
    pub fn neighbours(&self, row: i32, col: i32) -> Neighbours {
        neighbour::neighbours(self.rows, self.cols, row, col)
    }

    /// Canonical comparison token for the visible generation.
    pub fn state(&self) -> GenerationState {
        GenerationState::from_cells(self.rows, self.cols, &self.current)
    }
}

// The staging buffer is scratch space; only the visible generation
// takes part in equality.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.current == other.current
    }
}

impl Eq for Grid {}

impl CellWriter for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn set_cell(&mut self, row: i32, col: i32, alive: bool) {
        Grid::set_cell(self, row, col, alive);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.current.chunks(self.cols) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
