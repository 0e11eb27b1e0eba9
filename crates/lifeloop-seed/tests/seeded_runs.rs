//! Seeders driving full simulations.

use lifeloop_core::Generation;
use lifeloop_engine::{LoopKind, SimConfig, Simulation};
use lifeloop_seed::{Composite, PatternLibrary, PatternSeeder, RandomSeeder};

fn centred(name: &str, rows: usize, cols: usize) -> Simulation {
    let pattern = PatternLibrary::builtin().lookup(name).unwrap().clone();
    let mut seeder = PatternSeeder::centered(pattern);
    Simulation::seeded(SimConfig::with_size(rows, cols), &mut seeder).unwrap()
}

fn first_loop(sim: &mut Simulation, max_ticks: u64) -> Option<(u64, usize, Generation)> {
    (0..max_ticks).find_map(|_| {
        let out = sim.tick();
        out.loop_info
            .map(|info| (out.generation.0, info.period_length, info.loop_start_generation))
    })
}

#[test]
fn block_settles_immediately() {
    let mut sim = centred("block", 10, 10);
    assert_eq!(first_loop(&mut sim, 10), Some((2, 1, Generation(1))));
}

#[test]
fn period_two_oscillators() {
    for name in ["blinker", "toad", "beacon"] {
        let mut sim = centred(name, 12, 12);
        assert_eq!(
            first_loop(&mut sim, 10),
            Some((3, 2, Generation(0))),
            "{name}"
        );
    }
}

#[test]
fn pulsar_is_period_three() {
    let mut sim = centred("pulsar", 55, 140);
    let (generation, period, start) = first_loop(&mut sim, 20).unwrap();
    assert_eq!((generation, period, start), (5, 3, Generation(0)));
    assert_eq!(LoopKind::from_period(period), LoopKind::Oscillator { period: 3 });
}

#[test]
fn glider_keeps_moving_in_open_space() {
    let mut sim = centred("glider", 55, 140);
    assert_eq!(first_loop(&mut sim, 40), None);
    assert_eq!(sim.grid().population(), 5);
}

#[test]
fn gun_never_repeats_while_firing() {
    let library = PatternLibrary::builtin();
    let gun = library.lookup("gosper glider gun").unwrap().clone();
    let mut seeder = PatternSeeder::at(gun, 2, 2);
    let mut sim = Simulation::seeded(SimConfig::with_size(55, 140), &mut seeder).unwrap();
    assert_eq!(first_loop(&mut sim, 90), None);
    // One glider leaves the gun every 30 generations.
    assert_eq!(sim.grid().population(), 36 + 3 * 5);
}

#[test]
fn composite_of_still_life_and_blinker_is_period_two() {
    let library = PatternLibrary::builtin();
    let mut seeder = Composite::new()
        .with(PatternSeeder::at(library.lookup("block").unwrap().clone(), 1, 1))
        .with(PatternSeeder::at(library.lookup("blinker").unwrap().clone(), 8, 8));
    let mut sim = Simulation::seeded(SimConfig::with_size(15, 15), &mut seeder).unwrap();
    assert_eq!(sim.grid().population(), 7);
    assert_eq!(first_loop(&mut sim, 10), Some((3, 2, Generation(0))));
}

#[test]
fn same_random_seed_same_run() {
    let run = |seed| {
        let mut seeder = RandomSeeder::new(0.5, seed).unwrap();
        let mut sim = Simulation::seeded(SimConfig::default(), &mut seeder).unwrap();
        (0..50).map(|_| sim.tick().population).collect::<Vec<_>>()
    };
    assert_eq!(run(11), run(11));
}
