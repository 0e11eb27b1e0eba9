//! Benchmark profiles for Lifeloop.
//!
//! - [`reference_profile`]: the default 55x140 terminal grid, random
//!   fill at density 0.5
//! - [`stress_profile`]: 316x316 (~100K cells), same fill

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifeloop_engine::{SimConfig, Simulation};
use lifeloop_seed::{RandomSeeder, DEFAULT_DENSITY};

/// Build the reference profile: default 55x140 grid, random fill.
pub fn reference_profile(seed: u64) -> Simulation {
    profile(SimConfig::default(), seed)
}

/// Build the stress profile: 316x316 grid (~100K cells), random fill.
pub fn stress_profile(seed: u64) -> Simulation {
    profile(SimConfig::with_size(316, 316), seed)
}

fn profile(config: SimConfig, seed: u64) -> Simulation {
    let mut seeder = RandomSeeder::new(DEFAULT_DENSITY, seed).unwrap();
    Simulation::seeded(config, &mut seeder).unwrap()
}

/// Tick `sim` until its history window is full or a loop appears.
///
/// Returns the number of ticks run.
pub fn warm_history(sim: &mut Simulation) -> usize {
    let capacity = sim.history().capacity();
    let mut ticks = 0;
    while sim.history().len() < capacity {
        ticks += 1;
        if sim.tick().loop_info.is_some() {
            break;
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeloop_engine::DEFAULT_HISTORY_CAPACITY;

    #[test]
    fn reference_profile_matches_defaults() {
        let sim = reference_profile(42);
        assert_eq!((sim.rows(), sim.cols()), (55, 140));
        assert_eq!(sim.history().len(), 1);
        assert!(sim.grid().population() > 0);
    }

    #[test]
    fn stress_profile_size() {
        let sim = stress_profile(42);
        assert_eq!(sim.grid().cell_count(), 316 * 316);
    }

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(reference_profile(7).grid(), reference_profile(7).grid());
    }

    #[test]
    fn warm_history_fills_the_window() {
        let mut sim = reference_profile(42);
        let ticks = warm_history(&mut sim);
        assert!(ticks >= 1);
        assert!(sim.history().len() <= DEFAULT_HISTORY_CAPACITY);
    }
}
