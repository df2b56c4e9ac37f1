use std::str::FromStr;

use itertools::Itertools;

use crate::{Cell, Universe};

const BLOCK: &str = "
    ......
    ......
    ..oo..
    ..oo..
    ......
    ......";

const BLINKER_H: &str = "
    .....
    .....
    .ooo.
    .....
    .....";

const BLINKER_V: &str = "
    .....
    ..o..
    ..o..
    ..o..
    .....";

const GLIDER: &str = "
    .o......
    ..o.....
    ooo.....
    ........
    ........
    ........
    ........
    ........";

fn dedent(s: &str) -> String {
    let get_indent = |s: &str| match s.trim_start().len() {
        0 => None,
        l => Some(s.len() - l),
    };
    let s = s.trim_end();
    let indent = s.lines().filter_map(get_indent).min().unwrap_or_default();
    let lines = s.lines().skip_while(|l| l.trim().is_empty());
    lines.map(|l| l.split_at(indent).1.trim_end()).join("\n")
}

#[test]
fn test_dimensions() {
    let universe = Universe::new(9, 7);
    assert_eq!(universe.width(), 9);
    assert_eq!(universe.height(), 7);
    assert_eq!(universe.cells().len(), 63);
    assert!(universe.cells().iter().all(|&c| c == Cell::Dead));
}

#[test]
#[should_panic]
fn test_zero_width() {
    Universe::new(0, 5);
}

#[test]
fn test_double_toggle_restores() {
    let mut universe = Universe::from_str(BLOCK).unwrap();
    let before = universe.clone();
    universe.toggle_cell(2, 2);
    assert_ne!(universe, before);
    universe.toggle_cell(2, 2);
    assert_eq!(universe, before);
}

#[test]
fn test_toggle_changes_one_cell() {
    let mut universe = Universe::new(6, 4);
    let before = universe.cells().to_vec();
    universe.toggle_cell(1, 3);
    let changed = universe
        .cells()
        .iter()
        .zip(&before)
        .positions(|(a, b)| a != b)
        .collect_vec();
    assert_eq!(changed, vec![1 * 6 + 3]);
}

#[test]
#[should_panic]
fn test_toggle_out_of_range() {
    Universe::new(4, 4).toggle_cell(4, 0);
}

#[test]
fn test_block() {
    // Block is constant.
    let mut universe = Universe::from_str(BLOCK).unwrap();
    let before = universe.clone();
    universe.tick();
    assert_eq!(universe, before);
}

#[test]
fn test_blinker() {
    // Blinker blinks with period 2.
    let mut universe = Universe::from_str(BLINKER_H).unwrap();
    let vertical = Universe::from_str(BLINKER_V).unwrap();
    assert_ne!(universe, vertical);
    universe.tick();
    assert_eq!(universe, vertical);
    universe.tick();
    assert_eq!(universe, Universe::from_str(BLINKER_H).unwrap());
}

#[test]
fn test_corner_neighbours_wrap() {
    // The four grid corners are mutually adjacent on the torus, so together
    // they form a block: each has exactly 3 live neighbours and survives.
    // Without wraparound every one of them would die of isolation.
    let mut universe = Universe::new(6, 6);
    universe.set_cells(&[(0, 0), (0, 5), (5, 0), (5, 5)]);
    let before = universe.clone();
    universe.tick();
    assert_eq!(universe, before);
}

#[test]
fn test_glider_crosses_the_edges() {
    // A glider travels one cell diagonally every 4 generations, so on an
    // 8x8 torus it wraps all the way home after 32.
    let mut universe = Universe::from_str(GLIDER).unwrap();
    let start = universe.clone();
    for generation in 1..=32 {
        universe.tick();
        assert_eq!(universe == start, generation == 32, "at {generation}");
    }
}

#[test]
fn test_empty_stays_empty() {
    let mut universe = Universe::new(5, 4);
    for _ in 0..3 {
        universe.tick();
        assert!(universe.cells().iter().all(|&c| c == Cell::Dead));
    }
}

#[test]
fn test_pattern_round_trip() {
    let universe = Universe::from_str(BLOCK).unwrap();
    assert_eq!(universe.to_string(), dedent(BLOCK));
    assert_eq!(universe.width(), 6);
    assert_eq!(universe.height(), 6);
}

#[test]
fn test_rejects_unknown_characters() {
    assert!(Universe::from_str("..x..").is_err());
    assert!(Universe::from_str("").is_err());
}
