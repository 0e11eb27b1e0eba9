//! Core types for the Lifeloop Game of Life engine.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! bounded [`Grid`] with its double buffer, the closed-boundary
//! neighbour counter, the B3/S23 transition rule, the generation
//! stepper, and the [`GenerationState`] token used for cycle detection.
//!
//! The grid is a closed rectangle: cells beyond the edges do not exist,
//! are never stored, and always read as dead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod neighbour;
pub mod rule;
pub mod state;
pub mod stepper;
pub mod traits;

pub use error::GridError;
pub use grid::Grid;
pub use id::Generation;
pub use neighbour::{count_neighbours, Neighbours, OFFSETS_8};
pub use rule::next_state;
pub use state::GenerationState;
pub use traits::{CellWriter, Seeder};
