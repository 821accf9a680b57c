//! Search module for the chess engine.
//!
//! Fixed-depth minimax with alpha-beta pruning over a single mutable [`Position`].
//!
//! # Architecture
//! - `Searcher`: per-search controller holding statistics and the pruning switch
//! - `minimax`: the recursive alpha-beta search
//! - `ordering`: move ordering heuristics (MVV-LVA, promotions, checks)
//!
//! Every top-level search starts from a blank slate: there is no transposition table,
//! history table or other state carried between calls.

mod minimax;
pub mod ordering;

use crate::position::Position;
use crate::types::{Color, Depth, Move, NodeCount, Score};
use log::debug;
use std::time::Instant;

/// Search statistics collected during search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: NodeCount,
    pub cutoffs: NodeCount,
    pub depth: Depth,
    pub time_ms: u64,
}

impl SearchStats {
    pub fn nps(&self) -> u64 {
        if self.time_ms > 0 {
            self.nodes * 1000 / self.time_ms
        } else {
            0
        }
    }
}

/// Result of a top-level search
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// White-relative score
    pub score: Score,
    pub stats: SearchStats,
    /// The search picked no move and the first legal move was substituted
    pub fallback: bool,
}

/// Search controller
pub struct Searcher {
    /// Search statistics
    stats: SearchStats,
    /// Cut off once `beta <= alpha`; off only for exhaustive reference searches
    pruning: bool,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            stats: SearchStats::default(),
            pruning: true,
        }
    }

    /// A searcher that never prunes: plain minimax, for checking pruned results
    pub fn exhaustive() -> Self {
        Self {
            pruning: false,
            ..Self::new()
        }
    }

    /// Get current statistics
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search the position for the side to move with a full window.
    ///
    /// If the search selects no move while legal moves exist (a depth-0 search of a
    /// live position), the first legal move is returned with a draw score and
    /// `fallback` set.
    pub fn search(&mut self, pos: &mut Position, depth: Depth) -> SearchResult {
        self.stats = SearchStats::default();
        let start = Instant::now();

        let maximizing = pos.side_to_move() == Color::White;
        let (mut score, mut best_move) = self.minimax(
            pos,
            depth,
            Score::neg_infinity(),
            Score::infinity(),
            maximizing,
        );

        let mut fallback = false;
        if best_move.is_none() {
            if let Some(&first) = pos.legal_moves().first() {
                debug!("no move selected at depth {}, falling back to {}", depth, first);
                best_move = Some(first);
                score = Score::draw();
                fallback = true;
            }
        }

        self.stats.depth = depth;
        self.stats.time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "search depth {} score {} nodes {} cutoffs {} time {}ms",
            depth, score.raw(), self.stats.nodes, self.stats.cutoffs, self.stats.time_ms
        );

        SearchResult {
            best_move,
            score,
            stats: self.stats.clone(),
            fallback,
        }
    }

    /// Increment node counter
    #[inline]
    pub fn inc_nodes(&mut self) {
        self.stats.nodes += 1;
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimax value and best move of `pos` to `depth` plies in the `(alpha, beta)`
/// window; `maximizing` is true when White is to move.
///
/// The position is restored before this returns.
pub fn search(
    pos: &mut Position,
    depth: Depth,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> (Score, Option<Move>) {
    Searcher::new().minimax(pos, depth, alpha, beta, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_falls_back_to_a_legal_move() {
        let mut pos = Position::new();
        let result = Searcher::new().search(&mut pos, Depth::ZERO);

        assert!(result.fallback);
        assert_eq!(result.best_move, pos.legal_moves().first().copied());
        assert_eq!(result.score, Score::draw());
        assert_eq!(result.stats.nodes, 1);
    }

    #[test]
    fn test_no_fallback_without_legal_moves() {
        let mut pos = Position::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
        let result = Searcher::new().search(&mut pos, Depth::new(2));
        assert!(!result.fallback);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::draw());
    }

    #[test]
    fn test_stats_reset_between_searches() {
        let mut pos = Position::new();
        let mut searcher = Searcher::new();
        let first = searcher.search(&mut pos, Depth::new(2));
        let second = searcher.search(&mut pos, Depth::new(2));
        assert_eq!(first.stats.nodes, second.stats.nodes);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(second.stats.depth, Depth::new(2));
    }

    #[test]
    fn test_free_function_matches_searcher() {
        let mut pos = Position::new();
        let (score, best) = search(
            &mut pos,
            Depth::ONE,
            Score::neg_infinity(),
            Score::infinity(),
            true,
        );
        let result = Searcher::new().search(&mut pos, Depth::ONE);
        assert_eq!(score, result.score);
        assert_eq!(best, result.best_move);
    }
}
