//! Several seeders applied in sequence.

use lifeloop_core::{CellWriter, Seeder};

/// Applies its seeders in insertion order onto the same grid.
///
/// Later seeders only ever add to or overwrite cells written by earlier
/// ones; nothing is cleared in between.
#[derive(Default)]
pub struct Composite {
    seeders: Vec<Box<dyn Seeder + Send>>,
}

impl Composite {
    /// A composite with no seeders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a seeder.
    pub fn push(&mut self, seeder: impl Seeder + Send + 'static) {
        self.seeders.push(Box::new(seeder));
    }

    /// Append a seeder, builder style.
    pub fn with(mut self, seeder: impl Seeder + Send + 'static) -> Self {
        self.push(seeder);
        self
    }

    /// Number of seeders.
    pub fn len(&self) -> usize {
        self.seeders.len()
    }

    /// Whether no seeders were added.
    pub fn is_empty(&self) -> bool {
        self.seeders.is_empty()
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.seeders.iter().map(|s| s.name()))
            .finish()
    }
}

impl Seeder for Composite {
    fn name(&self) -> &str {
        "composite"
    }

    fn seed(&mut self, cells: &mut dyn CellWriter) {
        for seeder in &mut self.seeders {
            seeder.seed(cells);
        }
    }
}
