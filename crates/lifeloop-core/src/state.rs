//! Canonical per-generation state tokens.
//!
//! A [`GenerationState`] is the comparison key the loop detector works
//! on. It packs the row-major cells of a grid into 64-bit words and
//! carries an FNV-1a fingerprint of those words. The fingerprint only
//! short-circuits inequality: equal fingerprints always fall through to
//! a full word-by-word comparison, so a hash collision can never make
//! two different grids compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

const WORD_BITS: usize = 64;

/// 64-bit FNV-1a over the little-endian bytes of the dimensions, then
/// the packed words.
fn fingerprint(rows: usize, cols: usize, words: &[u64]) -> u64 {
    const BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    [rows as u64, cols as u64]
        .iter()
        .chain(words)
        .flat_map(|w| w.to_le_bytes())
        .fold(BASIS, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

/// Immutable snapshot token of one generation.
///
/// Bit `i` of the packed words is cell `i` in row-major order. Two
/// tokens are equal iff they have the same dimensions and identical
/// cells. The token is never turned back into a grid.
#[derive(Clone, Debug)]
pub struct GenerationState {
    rows: usize,
    cols: usize,
    words: Box<[u64]>,
    fingerprint: u64,
}

impl GenerationState {
    /// Pack `cells` (row-major, `rows * cols` long) into a token.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: &[bool]) -> Self {
        assert_eq!(
            cells.len(),
            rows * cols,
            "cell slice length {} does not match {rows}x{cols}",
            cells.len()
        );
        let mut words = vec![0u64; cells.len().div_ceil(WORD_BITS)];
        for (i, _) in cells.iter().enumerate().filter(|&(_, &alive)| alive) {
            words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
        }
        Self {
            rows,
            cols,
            fingerprint: fingerprint(rows, cols, &words),
            words: words.into_boxed_slice(),
        }
    }

    /// Number of rows of the grid this token was taken from.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the grid this token was taken from.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells encoded.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the token encodes zero cells. Never true for a token
    /// taken from a [`Grid`](crate::Grid).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// FNV-1a fingerprint of the dimensions and packed cells.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Whether cell `index` (row-major) was alive. `false` past the end.
    pub fn is_alive(&self, index: usize) -> bool {
        index < self.len() && self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Number of live cells encoded.
    pub fn population(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl PartialEq for GenerationState {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && self.rows == other.rows
            && self.cols == other.cols
            && self.words == other.words
    }
}

impl Eq for GenerationState {}

impl Hash for GenerationState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state);
    }
}

/// Row-major `'1'`/`'0'` string, one character per cell.
impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            f.write_str(if self.is_alive(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn canonical_string_is_row_major() {
        let mut g = Grid::new(2, 3).unwrap();
        g.set_cell(0, 0, true);
        g.set_cell(1, 1, true);
        assert_eq!(g.state().to_string(), "100010");
    }

    #[test]
    fn fingerprint_is_fnv1a_of_dimensions_and_words() {
        // rows = 2, cols = 3, then one word with bits 0 and 4 set.
        let s = GenerationState::from_cells(2, 3, &[true, false, false, false, true, false]);
        assert_eq!(s.fingerprint(), 0xf0ce_888f_fbb4_9b35);
    }

    #[test]
    fn same_cells_same_state() {
        let mut a = Grid::new(5, 7).unwrap();
        let mut b = Grid::new(5, 7).unwrap();
        for g in [&mut a, &mut b] {
            g.set_cell(1, 1, true);
            g.set_cell(4, 6, true);
        }
        assert_eq!(a.state(), b.state());
        assert_eq!(a.state().fingerprint(), b.state().fingerprint());
    }

    #[test]
    fn single_cell_difference_is_unequal() {
        let mut a = Grid::new(9, 9).unwrap();
        let b = a.clone();
        a.set_cell(8, 8, true);
        assert_ne!(a.state(), b.state());
    }

    #[test]
    fn dimensions_take_part_in_equality() {
        // Both all-dead with 6 cells, but shaped differently.
        let a = Grid::new(2, 3).unwrap().state();
        let b = Grid::new(3, 2).unwrap().state();
        assert_ne!(a, b);
    }

    #[test]
    fn equal_fingerprints_still_compare_words() {
        let a = GenerationState::from_cells(1, 2, &[true, false]);
        let mut forged = GenerationState::from_cells(1, 2, &[false, true]);
        forged.fingerprint = a.fingerprint;
        assert_ne!(a, forged);
    }

    #[test]
    fn packs_across_word_boundaries() {
        let mut g = Grid::new(3, 50).unwrap();
        g.set_cell(1, 13, true); // index 63
        g.set_cell(1, 14, true); // index 64
        g.set_cell(2, 49, true); // index 149
        let s = g.state();
        assert_eq!(s.len(), 150);
        assert!(s.is_alive(63));
        assert!(s.is_alive(64));
        assert!(s.is_alive(149));
        assert!(!s.is_alive(150));
        assert_eq!(s.population(), 3);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn from_cells_rejects_wrong_length() {
        let _ = GenerationState::from_cells(2, 2, &[true; 3]);
    }
}
