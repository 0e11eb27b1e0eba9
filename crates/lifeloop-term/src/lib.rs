//! Terminal front end for Lifeloop.
//!
//! The binary is a thin shell around this library:
//!
//! - [`cli`] turns arguments into a validated [`TermConfig`](cli::TermConfig).
//! - [`render`] draws frames and the loop panel into any `io::Write`.
//! - [`input`] abstracts key polling behind [`KeySource`](input::KeySource).
//! - [`app`] drives the tick / draw / poll cycle.
//! - [`terminal`] owns raw mode and the alternate screen.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod render;
pub mod terminal;
