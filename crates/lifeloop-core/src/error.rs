//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from [`Grid`](crate::Grid) construction.
///
/// Cell access never fails: out-of-bounds writes are ignored and
/// out-of-bounds reads are dead. Only the dimensions are validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A dimension exceeds the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The value provided.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// `rows * cols` exceeds [`Grid::MAX_CELLS`](crate::Grid::MAX_CELLS).
    TooManyCells {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// The maximum cell count.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { rows, cols, max } => {
                write!(f, "{rows}x{cols} grid exceeds maximum of {max} cells")
            }
        }
    }
}

impl Error for GridError {}
