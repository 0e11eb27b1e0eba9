//! Exact-period loop detection over a window of state tokens.
//!
//! The detector looks only at the tail of the window: a period `k` is
//! confirmed when the last `k` states equal the `k` states immediately
//! before them. Periods are tried in increasing order, so the smallest
//! confirmed period wins (a period-2 cycle is never reported as 4).
//!
//! Cycles longer than [`MAX_PERIOD`] are never detected.

use std::fmt;

use lifeloop_core::{Generation, GenerationState};

/// Fewest states required before any detection is attempted.
pub const MIN_HISTORY: usize = 3;

/// Largest period the detector checks.
pub const MAX_PERIOD: usize = 20;

/// Classification of a detected loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopKind {
    /// Period 1: the grid no longer changes.
    StillLife,
    /// Period 2.
    Blinker,
    /// Any period of 3 or more.
    Oscillator {
        /// The period.
        period: usize,
    },
}

impl LoopKind {
    /// Classify a period length.
    pub fn from_period(period: usize) -> Self {
        match period {
            1 => Self::StillLife,
            2 => Self::Blinker,
            period => Self::Oscillator { period },
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StillLife => write!(f, "Pattern has reached a stable state (still life)."),
            Self::Blinker => write!(f, "Pattern is oscillating with period 2 (blinker-like)."),
            Self::Oscillator { period } => write!(f, "Pattern is repeating with period {period}."),
        }
    }
}

/// A detected repeating cycle.
///
/// Carries no identity: detection recomputes it from scratch each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopInfo {
    /// Length of the cycle, in generations. Always >= 1.
    pub period_length: usize,
    /// Generation at which the first observed repetition of the cycle
    /// began.
    pub loop_start_generation: Generation,
}

impl LoopInfo {
    /// Classification of this loop's period.
    pub fn kind(&self) -> LoopKind {
        LoopKind::from_period(self.period_length)
    }

    /// Shift the start generation by `base` generations.
    ///
    /// Converts a window-relative result into an absolute one.
    pub fn offset_by(self, base: Generation) -> Self {
        Self {
            loop_start_generation: Generation(base.0 + self.loop_start_generation.0),
            ..self
        }
    }
}

impl fmt::Display for LoopInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Loop started at generation {}.",
            self.kind(),
            self.loop_start_generation
        )
    }
}

/// Scan `states` (oldest first) for a repeating tail.
///
/// Returns `None` with fewer than [`MIN_HISTORY`] states. Otherwise:
///
/// - period 1 if the last two states are equal, starting at `len - 2`;
/// - else the smallest `k` in `2..=min(MAX_PERIOD, len / 2)` whose last
///   `k` states equal the `k` before them, starting at `len - 2k`;
/// - else `None`.
///
/// Start generations are indices into `states`. Pure and idempotent.
pub fn detect(states: &[GenerationState]) -> Option<LoopInfo> {
    let len = states.len();
    if len < MIN_HISTORY {
        return None;
    }

    if states[len - 1] == states[len - 2] {
        return Some(LoopInfo {
            period_length: 1,
            loop_start_generation: Generation((len - 2) as u64),
        });
    }

    let max_period = MAX_PERIOD.min(len / 2);
    (2..=max_period)
        .find(|&period| repeats_with_period(states, period))
        .map(|period| LoopInfo {
            period_length: period,
            loop_start_generation: Generation((len - 2 * period) as u64),
        })
}

/// Whether the last `period` states equal the `period` states before them.
///
/// Requires `2 * period <= states.len()`.
fn repeats_with_period(states: &[GenerationState], period: usize) -> bool {
    let len = states.len();
    (0..period).all(|i| {
        let current = len - 1 - i;
        states[current] == states[current - period]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn token(id: u32) -> GenerationState {
        let cells: Vec<bool> = (0..32).map(|bit| id & (1 << bit) != 0).collect();
        GenerationState::from_cells(1, 32, &cells)
    }

    fn seq(ids: &[u32]) -> Vec<GenerationState> {
        ids.iter().map(|&id| token(id)).collect()
    }

    fn info(period: usize, start: u64) -> Option<LoopInfo> {
        Some(LoopInfo {
            period_length: period,
            loop_start_generation: Generation(start),
        })
    }

    #[test]
    fn too_short_history_reports_nothing() {
        assert_eq!(detect(&[]), None);
        assert_eq!(detect(&seq(&[7])), None);
        // Identical, but only two states.
        assert_eq!(detect(&seq(&[7, 7])), None);
    }

    #[test]
    fn still_life_is_period_one() {
        assert_eq!(detect(&seq(&[1, 2, 2])), info(1, 1));
        assert_eq!(detect(&seq(&[1, 2, 3, 4, 4])), info(1, 3));
    }

    #[test]
    fn period_two_needs_four_states() {
        assert_eq!(detect(&seq(&[1, 2, 1])), None);
        assert_eq!(detect(&seq(&[1, 2, 1, 2])), info(2, 0));
        assert_eq!(detect(&seq(&[9, 1, 2, 1, 2])), info(2, 1));
    }

    #[test]
    fn smallest_period_wins() {
        // Satisfies both period 2 and period 4.
        let states = seq(&[1, 2, 1, 2, 1, 2, 1, 2]);
        assert_eq!(detect(&states), info(2, 4));
    }

    #[test]
    fn period_three() {
        assert_eq!(detect(&seq(&[5, 1, 2, 3, 1, 2, 3])), info(3, 1));
    }

    #[test]
    fn partial_repeat_is_not_a_loop() {
        // The last two states repeat four back, but the tail breaks at i = 2.
        assert_eq!(detect(&seq(&[1, 2, 3, 4, 1, 5, 3, 4])), None);
    }

    #[test]
    fn period_twenty_is_detected_period_twenty_one_is_not() {
        let cycle20: Vec<u32> = (0..40).map(|i| i % 20).collect();
        assert_eq!(detect(&seq(&cycle20)), info(20, 0));

        let cycle21: Vec<u32> = (0..42).map(|i| i % 21).collect();
        assert_eq!(detect(&seq(&cycle21)), None);
    }

    #[test]
    fn period_limited_by_half_the_window() {
        // Period 3 with only 5 states: 2 * 3 > 5, so not checked.
        assert_eq!(detect(&seq(&[1, 2, 3, 1, 2])), None);
    }

    #[test]
    fn detection_is_idempotent() {
        let states = seq(&[4, 1, 2, 3, 1, 2, 3]);
        assert_eq!(detect(&states), detect(&states));
    }

    #[test]
    fn kind_and_description() {
        assert_eq!(LoopKind::from_period(1), LoopKind::StillLife);
        assert_eq!(LoopKind::from_period(2), LoopKind::Blinker);
        assert_eq!(
            LoopKind::from_period(15),
            LoopKind::Oscillator { period: 15 }
        );
        let text = LoopInfo {
            period_length: 3,
            loop_start_generation: Generation(12),
        }
        .to_string();
        assert_eq!(
            text,
            "Pattern is repeating with period 3. Loop started at generation 12."
        );
    }

    #[test]
    fn offset_shifts_start_only() {
        let shifted = info(2, 5).unwrap().offset_by(Generation(40));
        assert_eq!(shifted, info(2, 45).unwrap());
    }

    proptest! {
        #[test]
        fn finds_exactly_the_cycle_period(
            prefix in 0usize..10,
            period in 1usize..=MAX_PERIOD,
            extra in 0usize..20,
        ) {
            let total = prefix + 2 * period + 1 + extra;
            let ids: Vec<u32> = (0..total)
                .map(|i| if i < prefix { 1000 + i as u32 } else { ((i - prefix) % period) as u32 })
                .collect();
            let found = detect(&seq(&ids)).unwrap();
            prop_assert_eq!(found.period_length, period);
            prop_assert_eq!(found.loop_start_generation, Generation((total - 2 * period) as u64));
        }

        #[test]
        fn reported_loops_really_repeat(ids in prop::collection::vec(0u32..4, 0..60)) {
            let states = seq(&ids);
            let found = detect(&states);
            prop_assert_eq!(found, detect(&states));
            if let Some(info) = found {
                let k = info.period_length;
                let len = states.len();
                prop_assert!(len >= MIN_HISTORY);
                for i in 0..k {
                    prop_assert_eq!(&states[len - 1 - i], &states[len - 1 - i - k]);
                }
                // No smaller period also fits.
                for smaller in 1..k {
                    prop_assert!((0..smaller).any(|i| states[len - 1 - i] != states[len - 1 - i - smaller]));
                }
            }
        }
    }
}
