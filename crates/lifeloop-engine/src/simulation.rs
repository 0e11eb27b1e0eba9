//! The owned simulation state object.
//!
//! [`Simulation`] bundles the grid, the generation counter, and the
//! history window. There is no shared or global state: every operation
//! goes through `&self` / `&mut self`, so independent simulations can
//! coexist and tests can build as many as they like.
//!
//! # Tick lifecycle
//!
//! 1. the grid is stepped and the generation counter incremented;
//! 2. the new state token is recorded (evicting the oldest if full);
//! 3. the detector scans the retained window.
//!
//! The caller decides what to do with a detected loop. Cancellation is
//! only ever checked between ticks.

use std::time::Instant;

use lifeloop_core::{Generation, Grid, Seeder};
use tracing::{debug, trace};

use crate::config::{ConfigError, SimConfig};
use crate::detect::LoopInfo;
use crate::history::History;
use crate::metrics::StepMetrics;

/// Result of one [`Simulation::tick()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Generation reached by this tick.
    pub generation: Generation,
    /// Live cells after the tick.
    pub population: usize,
    /// Loop found in the history window after this tick, if any.
    pub loop_info: Option<LoopInfo>,
    /// Timing and size metrics for this tick.
    pub metrics: StepMetrics,
}

/// A single Game of Life run: grid, generation counter, and history.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    generation: Generation,
    history: History,
}

// A simulation may be built on one thread and driven on another.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

impl Simulation {
    /// Create a simulation with an all-dead grid at generation 0.
    ///
    /// Validates the configuration first.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.rows, config.cols)?,
            generation: Generation(0),
            history: History::new(config.history_capacity),
        })
    }

    /// Create a simulation and initialize it with `seeder`.
    ///
    /// The seeded grid is recorded as generation 0.
    pub fn seeded(config: SimConfig, seeder: &mut dyn Seeder) -> Result<Self, ConfigError> {
        let mut sim = Self::new(config)?;
        sim.seed(seeder);
        Ok(sim)
    }

    /// Clear the grid, run `seeder`, and restart from generation 0.
    ///
    /// History is discarded and the seeded grid recorded as its first
    /// entry.
    pub fn seed(&mut self, seeder: &mut dyn Seeder) {
        self.grid.clear();
        seeder.seed(&mut self.grid);
        self.generation = Generation(0);
        self.history.clear();
        self.history.record(self.generation, self.grid.state());
        debug!(
            seeder = seeder.name(),
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            population = self.grid.population(),
            "grid seeded"
        );
    }

    /// Kill every cell and restart from generation 0 with empty history.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = Generation(0);
        self.history.clear();
    }

    /// Set a cell of the current grid. Ignored when out of bounds.
    ///
    /// Intended for initialization. If the current generation has
    /// already been recorded, the edit shows up in history only from
    /// the next tick on.
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) {
        self.grid.set_cell(row, col, alive);
    }

    /// Whether a cell is alive. Out-of-bounds cells are dead.
    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.grid.is_alive(row, col)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current generation count.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The retained history window.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Run the loop detector over the current history window.
    pub fn detect(&self) -> Option<LoopInfo> {
        self.history.detect()
    }

    /// Advance the grid by one generation without recording it.
    ///
    /// The history window no longer leads up to the current generation
    /// afterwards, so it is cleared; the next [`tick()`](Self::tick)
    /// starts a fresh window at the generation reached here.
    pub fn step(&mut self) {
        self.advance();
        self.history.clear();
    }

    fn advance(&mut self) {
        self.grid.step();
        self.generation = self.generation.next();
    }

    /// Run one full iteration: step, record, detect.
    ///
    /// If nothing has been recorded yet (no seeder was used, or after
    /// [`reset()`](Self::reset)), the pre-step grid is recorded first
    /// so the window starts at the current generation.
    pub fn tick(&mut self) -> TickOutcome {
        let tick_start = Instant::now();

        if self.history.is_empty() {
            self.history.record(self.generation, self.grid.state());
        }

        let step_start = Instant::now();
        self.advance();
        let step_us = step_start.elapsed().as_micros() as u64;

        let record_start = Instant::now();
        self.history.record(self.generation, self.grid.state());
        let record_us = record_start.elapsed().as_micros() as u64;

        let detect_start = Instant::now();
        let loop_info = self.history.detect();
        let detect_us = detect_start.elapsed().as_micros() as u64;

        let population = self.grid.population();
        let metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            step_us,
            record_us,
            detect_us,
            population,
            history_len: self.history.len(),
        };

        trace!(
            generation = %self.generation,
            population,
            total_us = metrics.total_us,
            "tick"
        );
        if let Some(info) = &loop_info {
            debug!(
                generation = %self.generation,
                period = info.period_length,
                start = %info.loop_start_generation,
                "loop detected"
            );
        }

        TickOutcome {
            generation: self.generation,
            population,
            loop_info,
            metrics,
        }
    }
}
