//! Simulation engine for Lifeloop.
//!
//! [`Simulation`] bundles the grid, the generation counter, and the
//! bounded [`History`] of state tokens into one owned object. Each
//! [`tick()`](Simulation::tick) steps the grid, records the new state,
//! and runs the [loop detector](detect::detect) over the retained
//! window.
//!
//! The engine performs no I/O and never sleeps: pacing, rendering and
//! cancellation belong to whoever drives the ticks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod detect;
pub mod history;
pub mod metrics;
pub mod simulation;

pub use config::{
    ConfigError, SimConfig, DEFAULT_COLS, DEFAULT_HISTORY_CAPACITY, DEFAULT_ROWS,
};
pub use detect::{detect, LoopInfo, LoopKind, MAX_PERIOD, MIN_HISTORY};
pub use history::History;
pub use metrics::StepMetrics;
pub use simulation::{Simulation, TickOutcome};
