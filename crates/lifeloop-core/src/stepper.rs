//! Generation stepper.

use crate::grid::Grid;
use crate::neighbour::count_neighbours;
use crate::rule::next_state;

impl Grid {
    /// Advance the grid by one generation.
    ///
    /// Every cell of the staging buffer is computed from the visible
    /// buffer alone, then the two buffers are swapped. The visible
    /// buffer is never written mid-pass, so the result does not depend
    /// on iteration order and no partial generation is ever observable.
    pub fn step(&mut self) {
        let cols = self.cols();
        for row in 0..self.rows() {
            for col in 0..cols {
                let i = row * cols + col;
                let n = count_neighbours(self, row as i32, col as i32);
                self.next[i] = next_state(self.current[i], n);
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
