//! Random per-cell fill.

use lifeloop_core::{CellWriter, Seeder};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::error::SeedError;

/// Live-cell probability used when none is configured.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Fills every cell independently: alive with probability `density`.
///
/// The generator is rebuilt from `seed` on every [`Seeder::seed`] call,
/// so the same seeder always produces the same grid for the same
/// dimensions.
#[derive(Clone, Debug)]
pub struct RandomSeeder {
    density: f64,
    seed: u64,
}

impl RandomSeeder {
    /// Create a seeder with a fixed RNG seed.
    ///
    /// Fails with [`SeedError::InvalidDensity`] unless `density` is in
    /// `[0, 1]`.
    pub fn new(density: f64, seed: u64) -> Result<Self, SeedError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(SeedError::InvalidDensity { value: density });
        }
        Ok(Self { density, seed })
    }

    /// Create a seeder whose RNG seed is drawn from the thread RNG.
    ///
    /// The chosen seed is available from [`rng_seed()`](Self::rng_seed) so a
    /// run can be reproduced later.
    pub fn from_entropy(density: f64) -> Result<Self, SeedError> {
        Self::new(density, rand::rng().random())
    }

    /// Live-cell probability.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// RNG seed.
    pub fn rng_seed(&self) -> u64 {
        self.seed
    }
}

impl Seeder for RandomSeeder {
    fn name(&self) -> &str {
        "random"
    }

    fn seed(&mut self, cells: &mut dyn CellWriter) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let (rows, cols) = (cells.rows(), cells.cols());
        let mut alive = 0usize;
        for row in 0..rows {
            for col in 0..cols {
                let live = rng.random_bool(self.density);
                alive += live as usize;
                cells.set_cell(row as i32, col as i32, live);
            }
        }
        trace!(seed = self.seed, density = self.density, alive, "random fill");
    }
}
