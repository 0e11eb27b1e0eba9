//! Seams between the grid and its initialization collaborators.

/// Write access to the cells of a grid during seeding.
///
/// Writes outside `[0, rows) x [0, cols)` must be silently ignored, so
/// seeders can stamp patterns without bounds arithmetic.
pub trait CellWriter {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Set a cell; a no-op when out of bounds.
    fn set_cell(&mut self, row: i32, col: i32, alive: bool);
}

/// A pluggable grid initialization policy.
///
/// Seeders run before the first tick. The engine makes no assumption
/// about how they choose cells (random fill, fixed stamps, or both).
pub trait Seeder {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Write the initial live cells.
    fn seed(&mut self, cells: &mut dyn CellWriter);
}
