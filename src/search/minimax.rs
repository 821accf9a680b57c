//! Minimax search with alpha-beta pruning.
//!
//! Scores stay White-relative all the way down: White nodes maximize, Black nodes
//! minimize. Each node
//! - scores itself statically at the horizon or when the game is over
//! - orders its legal moves (see `ordering`)
//! - applies each move through a scope guard, recurses, and takes it back
//! - stops early once `beta <= alpha`

use super::{ordering, Searcher};
use crate::eval;
use crate::position::Position;
use crate::types::{Depth, Move, Score};

impl Searcher {
    /// Search `pos` to `depth` plies inside the `(alpha, beta)` window.
    ///
    /// Returns the minimax value and the move achieving it. The move is `None` when
    /// the node is scored statically (depth 0 or game over). `pos` is restored to
    /// its entry state before this returns.
    pub fn minimax(
        &mut self,
        pos: &mut Position,
        depth: Depth,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Score, Option<Move>) {
        self.inc_nodes();

        // Claimable draws are left to the evaluator; they do not end the search
        if depth.is_leaf() || pos.is_game_over() {
            return (eval::evaluate(pos), None);
        }

        let moves = ordering::order_moves(pos, pos.legal_moves());
        let mut best_move = None;

        if maximizing {
            let mut best = Score::neg_infinity();
            for m in moves {
                let (score, _) = {
                    let mut child = pos.apply(m);
                    self.minimax(&mut child, depth - 1, alpha, beta, false)
                };

                if score > best {
                    best = score;
                    best_move = Some(m);
                }
                alpha = alpha.max(score);
                if self.pruning && beta <= alpha {
                    // Beta cutoff
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best, best_move)
        } else {
            let mut best = Score::infinity();
            for m in moves {
                let (score, _) = {
                    let mut child = pos.apply(m);
                    self.minimax(&mut child, depth - 1, alpha, beta, true)
                };

                if score < best {
                    best = score;
                    best_move = Some(m);
                }
                beta = beta.min(score);
                if self.pruning && beta <= alpha {
                    // Alpha cutoff
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best, best_move)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, SCORE_MATE};

    fn run(fen: &str, depth: i32) -> (Score, Option<Move>, Position) {
        let mut pos = Position::from_fen(fen).unwrap();
        let maximizing = pos.side_to_move() == Color::White;
        let (score, best) = Searcher::new().minimax(
            &mut pos,
            Depth::new(depth),
            Score::neg_infinity(),
            Score::infinity(),
            maximizing,
        );
        (score, best, pos)
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
        let (score, best, _) = run(fen, 0);
        assert_eq!(score, eval::evaluate(&Position::from_fen(fen).unwrap()));
        assert_eq!(best, None);
    }

    #[test]
    fn test_mate_in_one_for_white() {
        let (score, best, pos) = run("6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1", 1);
        assert_eq!(score.raw(), SCORE_MATE);
        assert_eq!(best.map(Position::uci).as_deref(), Some("e1e8"));
        assert_eq!(pos.fen(), "6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1");
    }

    #[test]
    fn test_mate_in_one_for_black() {
        let (score, best, _) = run("4r1k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", 2);
        assert_eq!(score.raw(), -SCORE_MATE);
        assert_eq!(best.map(Position::uci).as_deref(), Some("e8e1"));
    }

    #[test]
    fn test_terminal_root_returns_no_move() {
        let (score, best, _) = run("k7/8/1QK5/8/8/8/8/8 b - - 0 1", 3);
        assert_eq!(score, Score::draw());
        assert_eq!(best, None);
    }

    #[test]
    fn test_claimable_draw_root_is_expanded() {
        // Fifty-move claim available, but Rxa1 resets the clock and wins the queen
        let fen = "4k3/8/8/8/8/8/8/q2RK3 w - - 99 80";
        let root = Position::from_fen(fen).unwrap();
        assert!(root.is_claimable_draw());
        assert_eq!(eval::evaluate(&root), Score::draw());

        let (score, best, pos) = run(fen, 1);
        assert_eq!(best.map(Position::uci).as_deref(), Some("d1a1"));
        assert!(score.raw() > 400, "score {:?}", score);
        assert_eq!(pos.fen(), fen);
    }

    #[test]
    fn test_pruning_cuts_nodes_not_value() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
        let mut pos = Position::from_fen(fen).unwrap();

        let mut pruned = Searcher::new();
        let (a, _) = pruned.minimax(
            &mut pos,
            Depth::new(2),
            Score::neg_infinity(),
            Score::infinity(),
            true,
        );
        let mut full = Searcher::exhaustive();
        let (b, _) = full.minimax(
            &mut pos,
            Depth::new(2),
            Score::neg_infinity(),
            Score::infinity(),
            true,
        );

        assert_eq!(a, b);
        assert!(pruned.stats().nodes < full.stats().nodes);
        assert!(pruned.stats().cutoffs > 0);
        assert_eq!(full.stats().cutoffs, 0);
    }
}
