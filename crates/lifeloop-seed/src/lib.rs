//! Grid seeders for Lifeloop.
//!
//! Every seeder implements [`lifeloop_core::Seeder`] and writes through
//! a [`CellWriter`](lifeloop_core::CellWriter), so out-of-bounds cells
//! are dropped by the grid rather than by the seeder.
//!
//! - [`RandomSeeder`]: independent per-cell fill from a seeded
//!   [`ChaCha8Rng`](rand_chacha::ChaCha8Rng).
//! - [`Pattern`] / [`PatternLibrary`] / [`PatternSeeder`]: named fixed
//!   stamps such as the glider or the Gosper glider gun.
//! - [`Composite`]: several seeders applied in order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod error;
pub mod library;
pub mod pattern;
pub mod random;

pub use composite::Composite;
pub use error::SeedError;
pub use library::PatternLibrary;
pub use pattern::{Pattern, PatternSeeder};
pub use random::{RandomSeeder, DEFAULT_DENSITY};
