//! Simulation configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use lifeloop_core::{Grid, GridError};

use crate::detect::MIN_HISTORY;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 55;
/// Default number of columns.
pub const DEFAULT_COLS: usize = 140;
/// Default number of retained history entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// History capacity cannot hold enough states for detection.
    HistoryTooSmall {
        /// The configured capacity.
        configured: usize,
        /// The smallest usable capacity.
        minimum: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::HistoryTooSmall {
                configured,
                minimum,
            } => write!(
                f,
                "history_capacity {configured} is below minimum of {minimum}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::HistoryTooSmall { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for constructing a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid height. Default: 55.
    pub rows: usize,
    /// Grid width. Default: 140.
    pub cols: usize,
    /// Number of state tokens retained for loop detection. Default: 100.
    /// Minimum: [`MIN_HISTORY`].
    ///
    /// Detecting period `k` needs `2k` retained states, so capacities
    /// below 40 also lower the largest detectable period.
    pub history_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SimConfig {
    /// Config for a `rows x cols` grid with default history capacity.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::check_dimensions(self.rows, self.cols)?;
        if self.history_capacity < MIN_HISTORY {
            return Err(ConfigError::HistoryTooSmall {
                configured: self.history_capacity,
                minimum: MIN_HISTORY,
            });
        }
        Ok(())
    }
}
