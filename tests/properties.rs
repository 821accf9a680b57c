//! Property-based tests using proptest.

use chessguardian::eval;
use chessguardian::position::Position;
use chessguardian::search::{ordering, Searcher};
use chessguardian::types::{Color, Depth, Score};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Play `plies` random legal moves from the starting position
fn random_walk(seed: u64, plies: usize) -> Position {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..plies {
        let moves = pos.legal_moves();
        if moves.is_empty() || pos.is_game_over() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        pos.push(moves[idx]);
    }
    pos
}

fn root_search(searcher: &mut Searcher, pos: &mut Position, depth: i32) -> Score {
    let maximizing = pos.side_to_move() == Color::White;
    searcher
        .minimax(
            pos,
            Depth::new(depth),
            Score::neg_infinity(),
            Score::infinity(),
            maximizing,
        )
        .0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: alpha-beta returns the same value as plain minimax
    #[test]
    fn prop_pruning_is_transparent(seed in any::<u64>(), plies in 0..30usize, depth in 1..=3i32) {
        let mut pos = random_walk(seed, plies);

        let mut pruned = Searcher::new();
        let mut full = Searcher::exhaustive();
        let a = root_search(&mut pruned, &mut pos, depth);
        let b = root_search(&mut full, &mut pos, depth);

        prop_assert_eq!(a, b);
        prop_assert!(pruned.stats().nodes <= full.stats().nodes);
    }

    /// Property: search leaves the position exactly as it found it
    #[test]
    fn prop_search_restores_position(seed in any::<u64>(), plies in 0..40usize, depth in 0..=2i32) {
        let mut pos = random_walk(seed, plies);
        let before = pos.clone();

        Searcher::new().search(&mut pos, Depth::new(depth));

        prop_assert_eq!(pos.fen(), before.fen());
        prop_assert!(pos == before);
    }

    /// Property: depth 0 is the static evaluation
    #[test]
    fn prop_depth_zero_is_static_eval(seed in any::<u64>(), plies in 0..60usize) {
        let mut pos = random_walk(seed, plies);
        let expected = eval::evaluate(&pos);
        prop_assert_eq!(root_search(&mut Searcher::new(), &mut pos, 0), expected);
    }
}

proptest! {
    /// Property: move ordering returns a permutation of its input
    #[test]
    fn prop_ordering_is_permutation(seed in any::<u64>(), plies in 0..60usize) {
        let pos = random_walk(seed, plies);
        let moves = pos.legal_moves();
        let ordered = ordering::order_moves(&pos, moves.clone());

        let mut expected: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        let mut actual: Vec<String> = ordered.iter().map(|m| m.to_string()).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}
