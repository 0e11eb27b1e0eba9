//! Lifeloop: Conway's Game of Life with loop detection.
//!
//! This is the facade crate that re-exports the public API of the
//! Lifeloop sub-crates. The terminal front end lives in
//! `lifeloop-term` and is not re-exported.
//!
//! # Quick start
//!
//! ```rust
//! use lifeloop::prelude::*;
//!
//! let blinker = PatternLibrary::builtin().lookup("blinker").unwrap().clone();
//! let mut seeder = PatternSeeder::centered(blinker);
//! let mut sim = Simulation::seeded(SimConfig::with_size(7, 7), &mut seeder).unwrap();
//!
//! let found = loop {
//!     if let Some(info) = sim.tick().loop_info {
//!         break info;
//!     }
//! };
//! assert_eq!(found.kind(), LoopKind::Blinker);
//! assert_eq!(sim.generation(), Generation(3));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `lifeloop-core` | Grid, neighbour counting, rule, state tokens, seeding traits |
//! | [`engine`] | `lifeloop-engine` | Simulation, history window, loop detector |
//! | [`seed`] | `lifeloop-seed` | Random fill, pattern library, composite seeders |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid, stepping, and state tokens (`lifeloop-core`).
///
/// [`grid::Grid`] owns the double-buffered cells; [`grid::Seeder`] and
/// [`grid::CellWriter`] are the seams for initialization.
pub use lifeloop_core as grid;

/// Simulation, history, and loop detection (`lifeloop-engine`).
pub use lifeloop_engine as engine;

/// Seeders (`lifeloop-seed`).
///
/// [`seed::RandomSeeder`] for reproducible random fills,
/// [`seed::PatternLibrary`] for the named built-in patterns.
pub use lifeloop_seed as seed;

/// Common imports for typical Lifeloop usage.
///
/// ```rust
/// use lifeloop::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use lifeloop_core::{CellWriter, Generation, GenerationState, Grid, GridError, Seeder};

    // Engine
    pub use lifeloop_engine::{
        ConfigError, History, LoopInfo, LoopKind, SimConfig, Simulation, StepMetrics,
        TickOutcome,
    };

    // Seeding
    pub use lifeloop_seed::{
        Composite, Pattern, PatternLibrary, PatternSeeder, RandomSeeder, SeedError,
    };
}
