//! Test utilities and fixtures for Lifeloop development.
//!
//! - [`grid_from_ascii`] builds grids from row strings.
//! - [`fixtures`] stamps the classic still lifes and oscillators.
//! - [`token`] and [`periodic_states`] build synthetic histories for
//!   exercising the loop detector without running a simulation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use lifeloop_core::{GenerationState, Grid};

/// Build a grid from ASCII art, one string per row.
///
/// `#`, `O`, `*` and `1` are alive; anything else is dead.
///
/// # Panics
///
/// Panics if there are no rows, a row is empty, or rows differ in length.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "ascii grid needs at least one row");
    let cols = rows[0].chars().count();
    let mut grid = Grid::new(rows.len(), cols).expect("ascii grid dimensions");
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "row {r} has {} columns, expected {cols}",
            line.chars().count()
        );
        for (c, ch) in line.chars().enumerate() {
            if matches!(ch, '#' | 'O' | '*' | '1') {
                grid.set_cell(r as i32, c as i32, true);
            }
        }
    }
    grid
}

/// A distinct 1x32 state token whose cells are the bits of `id`.
///
/// Tokens compare equal iff their ids are equal.
pub fn token(id: u32) -> GenerationState {
    let cells: Vec<bool> = (0..32).map(|bit| id & (1 << bit) != 0).collect();
    GenerationState::from_cells(1, 32, &cells)
}

/// `prefix` distinct lead-in states followed by a cycle of `period`
/// distinct states, `total` states long.
///
/// Lead-in ids start at 1000 so they never collide with cycle ids.
pub fn periodic_states(prefix: usize, period: usize, total: usize) -> Vec<GenerationState> {
    assert!(period > 0, "period must be positive");
    (0..total)
        .map(|i| {
            if i < prefix {
                token(1000 + i as u32)
            } else {
                token(((i - prefix) % period) as u32)
            }
        })
        .collect()
}

/// `total` pairwise-distinct states (no repetition at all).
pub fn aperiodic_states(total: usize) -> Vec<GenerationState> {
    (0..total).map(|i| token(5000 + i as u32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trips_through_display() {
        let g = grid_from_ascii(&[".#.", "..#", "###"]);
        assert_eq!(g.to_string(), ".#.\n..#\n###\n");
        assert_eq!(g.population(), 5);
    }

    #[test]
    fn tokens_are_distinct() {
        assert_eq!(token(3), token(3));
        assert_ne!(token(3), token(4));
    }

    #[test]
    fn periodic_states_repeat_after_prefix() {
        let s = periodic_states(2, 3, 9);
        assert_ne!(s[0], s[1]);
        assert_eq!(s[2], s[5]);
        assert_eq!(s[3], s[6]);
        assert_ne!(s[2], s[3]);
    }
}
