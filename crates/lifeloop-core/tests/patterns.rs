//! Evolution of classic patterns through the public grid API.

use lifeloop_core::Grid;
use lifeloop_test_utils::fixtures::{beacon, blinker, block, glider, grid_with, pulsar, toad};
use lifeloop_test_utils::grid_from_ascii;

fn evolve(grid: &mut Grid, generations: usize) {
    for _ in 0..generations {
        grid.step();
    }
}

#[test]
fn isolated_block_is_unchanged_by_a_step() {
    let mut g = grid_with(6, 6, block, 2, 2);
    let before = g.clone();
    g.step();
    assert_eq!(g, before);
    for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        assert_eq!(g.count_neighbours(r, c), 3);
    }
}

#[test]
fn block_in_corner_is_still_life() {
    let mut g = grid_with(4, 4, block, 0, 0);
    let before = g.clone();
    evolve(&mut g, 5);
    assert_eq!(g, before);
}

#[test]
fn corner_of_3x3_has_at_most_three_neighbours() {
    let g = grid_from_ascii(&["###", "###", "###"]);
    assert_eq!(g.neighbours(0, 0).len(), 3);
    assert_eq!(g.count_neighbours(0, 0), 3);
}

#[test]
fn blinker_has_period_two() {
    let start = grid_with(7, 7, blinker, 3, 2);
    let mut g = start.clone();
    g.step();
    assert_ne!(g, start);
    assert_eq!(
        g,
        grid_from_ascii(&[
            ".......",
            ".......",
            "...#...",
            "...#...",
            "...#...",
            ".......",
            ".......",
        ])
    );
    g.step();
    assert_eq!(g, start);
}

#[test]
fn toad_and_beacon_have_period_two() {
    for pattern in [toad as fn(&mut Grid, i32, i32), beacon] {
        let start = grid_with(10, 10, pattern, 3, 3);
        let mut g = start.clone();
        g.step();
        assert_ne!(g, start);
        g.step();
        assert_eq!(g, start);
    }
}

#[test]
fn pulsar_has_period_three() {
    let start = grid_with(17, 17, pulsar, 2, 2);
    let mut g = start.clone();
    for _ in 0..2 {
        g.step();
        assert_ne!(g, start);
    }
    g.step();
    assert_eq!(g, start);
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let mut g = grid_with(12, 12, glider, 1, 1);
    evolve(&mut g, 4);
    assert_eq!(g, grid_with(12, 12, glider, 2, 2));
}

#[test]
fn glider_dies_against_the_closed_boundary() {
    // With no wrap-around the glider collides with the corner and
    // settles into a block.
    let mut g = grid_with(8, 8, glider, 0, 0);
    evolve(&mut g, 60);
    let settled = g.clone();
    g.step();
    assert_eq!(g, settled);
    assert_eq!(g.population(), 4);
}

#[test]
fn state_tracks_grid_equality() {
    let mut g = grid_with(7, 7, blinker, 3, 2);
    let s0 = g.state();
    g.step();
    let s1 = g.state();
    g.step();
    let s2 = g.state();
    assert_ne!(s0, s1);
    assert_eq!(s0, s2);
    assert_eq!(s0.to_string().len(), 49);
}
