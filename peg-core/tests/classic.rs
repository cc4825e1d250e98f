//! Classic 15-hole table check
//!
//! Loads the known jump lines of the standard 15-hole triangle and verifies
//! the board generates exactly those jumps:
//! - Sources offered for every empty hole
//! - The jumped peg for every line, in both directions
//! - The total number of distinct jumps

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use peg_core::{Board, Move};
use serde::Deserialize;

/// JSON structure of the fixture
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct JumpTable {
    height: usize,
    description: String,
    lines: Vec<[usize; 3]>,
}

fn load_table() -> JumpTable {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/classic_15.json");
    let file = File::open(&path).expect("Failed to open jump table");
    serde_json::from_reader(BufReader::new(file)).expect("Failed to parse JSON")
}

/// destination -> sources, both directions of every line
fn expected_sources(table: &JumpTable) -> BTreeMap<usize, BTreeSet<usize>> {
    let mut map: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for &[a, _, b] in &table.lines {
        map.entry(b).or_default().insert(a);
        map.entry(a).or_default().insert(b);
    }
    map
}

#[test]
fn test_single_hole_sources_match_table() {
    let table = load_table();
    let expected = expected_sources(&table);

    for hole in 1..=15 {
        let mut board = Board::new(table.height).unwrap();
        board.remove_initial_peg(hole).unwrap();

        let moves = board.all_moves();
        assert_eq!(moves.len(), 1, "only hole {} is empty", hole);

        let got: BTreeSet<usize> = moves[&hole].iter().copied().collect();
        assert_eq!(got, expected[&hole], "sources for hole {}", hole);
        assert_eq!(board.moves_to(hole), moves[&hole]);
    }
}

#[test]
fn test_every_line_jumps_both_ways() {
    let table = load_table();

    for &[a, middle, b] in &table.lines {
        for (from, to) in [(a, b), (b, a)] {
            let mut board = Board::new(table.height).unwrap();
            board.remove_initial_peg(to).unwrap();

            let mov = board.move_peg(from, to).unwrap();
            match mov {
                Move::Jump { from: f, over, to: t } => {
                    assert_eq!(f.number(), from);
                    assert_eq!(over.number(), middle, "{} -> {}", from, to);
                    assert_eq!(t.number(), to);
                }
                Move::Initial { .. } => panic!("expected a jump"),
            }
            assert_eq!(board.is_removed(middle), Some(true));
            assert_eq!(board.is_removed(from), Some(true));
            assert_eq!(board.is_removed(to), Some(false));
        }
    }
}

#[test]
fn test_total_jump_count() {
    let table = load_table();
    let mut count = 0;
    for hole in 1..=15 {
        let mut board = Board::new(table.height).unwrap();
        board.remove_initial_peg(hole).unwrap();
        count += board.moves_to(hole).len();
    }
    assert_eq!(count, table.lines.len() * 2);
    assert_eq!(count, 36);
}

#[test]
fn test_apex_start() {
    let mut board = Board::new(5).unwrap();
    board.remove_initial_peg(1).unwrap();
    let moves = board.all_moves();
    assert_eq!(moves.get(&1), Some(&vec![4, 6]));
}

#[test]
fn test_non_lines_rejected() {
    let table = load_table();
    let lines: BTreeSet<(usize, usize)> = table
        .lines
        .iter()
        .flat_map(|&[a, _, b]| [(a, b), (b, a)])
        .collect();

    for to in 1..=15 {
        let mut board = Board::new(table.height).unwrap();
        board.remove_initial_peg(to).unwrap();
        for from in 1..=15 {
            let legal = board.clone().move_peg(from, to).is_ok();
            assert_eq!(legal, lines.contains(&(from, to)), "{} -> {}", from, to);
        }
    }
}
