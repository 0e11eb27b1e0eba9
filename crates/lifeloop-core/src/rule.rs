//! The B3/S23 transition rule.

/// Next state of a cell given its current state and live-neighbour count.
///
/// A live cell survives with exactly 2 or 3 live neighbours. A dead cell
/// is born with exactly 3. Everything else is (or stays) dead.
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (true, 3) | (false, 3))
}
