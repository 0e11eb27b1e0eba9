//! Fixed cell stamps and a seeder that places one.

use lifeloop_core::{CellWriter, Seeder};
use tracing::trace;

/// A named set of live cells, relative to the pattern's top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<(i32, i32)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Build a pattern from `(row, col)` offsets.
    ///
    /// Offsets are normalized so the bounding box starts at `(0, 0)`.
    /// Duplicates are kept once. Cells lying more than `i32::MAX` rows
    /// or columns past the top-left cell are dropped.
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let cells: Vec<(i32, i32)> = cells.into_iter().collect();
        let min_row = i64::from(cells.iter().map(|&(r, _)| r).min().unwrap_or(0));
        let min_col = i64::from(cells.iter().map(|&(_, c)| c).min().unwrap_or(0));

        let mut cells: Vec<(i32, i32)> = cells
            .into_iter()
            .filter_map(|(r, c)| {
                let row = i32::try_from(i64::from(r) - min_row).ok()?;
                let col = i32::try_from(i64::from(c) - min_col).ok()?;
                Some((row, col))
            })
            .collect();
        cells.sort_unstable();
        cells.dedup();
        let height = cells.iter().map(|&(r, _)| r as usize + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, c)| c as usize + 1).max().unwrap_or(0);

        Self {
            name: name.into(),
            cells,
            height,
            width,
        }
    }

    /// Build a pattern from plaintext rows: `O` or `#` is alive, anything
    /// else is dead.
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> Self {
        let cells = rows.iter().enumerate().flat_map(|(r, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| matches!(ch, 'O' | '#'))
                .map(move |(c, _)| (r as i32, c as i32))
        });
        Self::new(name, cells)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live-cell offsets, sorted row-major.
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    /// Bounding-box height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounding-box width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Set this pattern's cells alive with its top-left corner at
    /// `(origin_row, origin_col)`.
    ///
    /// Cells falling outside the grid are dropped. Returns how many
    /// cells landed inside.
    pub fn stamp_at(&self, cells: &mut dyn CellWriter, origin_row: i32, origin_col: i32) -> usize {
        let (rows, cols) = (cells.rows(), cells.cols());
        let mut placed = 0;
        for &(dr, dc) in &self.cells {
            let (Some(row), Some(col)) = (origin_row.checked_add(dr), origin_col.checked_add(dc))
            else {
                continue;
            };
            if row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols {
                placed += 1;
            }
            cells.set_cell(row, col, true);
        }
        trace!(
            pattern = %self.name,
            origin_row,
            origin_col,
            placed,
            clipped = self.cells.len() - placed,
            "pattern stamped"
        );
        placed
    }
}

/// Places one [`Pattern`], either at a fixed origin or centred.
#[derive(Clone, Debug)]
pub struct PatternSeeder {
    pattern: Pattern,
    origin: Option<(i32, i32)>,
}

impl PatternSeeder {
    /// Place `pattern` with its top-left corner at `(row, col)`.
    pub fn at(pattern: Pattern, row: i32, col: i32) -> Self {
        Self {
            pattern,
            origin: Some((row, col)),
        }
    }

    /// Place `pattern` centred on the grid.
    pub fn centered(pattern: Pattern) -> Self {
        Self {
            pattern,
            origin: None,
        }
    }

    /// The pattern this seeder places.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn origin_for(&self, rows: usize, cols: usize) -> (i32, i32) {
        self.origin.unwrap_or_else(|| {
            let centre = |extent: usize, size: usize| {
                ((extent as i64 - size as i64) / 2).clamp(i32::MIN as i64, i32::MAX as i64) as i32
            };
            (
                centre(rows, self.pattern.height()),
                centre(cols, self.pattern.width()),
            )
        })
    }
}

impl Seeder for PatternSeeder {
    fn name(&self) -> &str {
        self.pattern.name()
    }

    fn seed(&mut self, cells: &mut dyn CellWriter) {
        let (row, col) = self.origin_for(cells.rows(), cells.cols());
        self.pattern.stamp_at(cells, row, col);
    }
}
