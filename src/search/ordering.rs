//! Move ordering heuristics.
//!
//! Good move ordering is critical for alpha-beta pruning efficiency: the sooner a
//! strong move is searched, the sooner the window closes. Ordering never changes the
//! searched value, only how many nodes it takes to prove it.

use crate::position::Position;
use crate::types::{piece_value, Move};
use std::cmp::Reverse;

/// Flat bonus for captures without a piece on the target square (en passant)
const UNRESOLVED_CAPTURE_BONUS: i32 = 500;
/// Bonus for moves that give check
const CHECK_BONUS: i32 = 50;

/// MVV-LVA score for a capture: victim value x10 minus attacker value
#[inline]
fn mvv_lva_score(pos: &Position, m: Move) -> i32 {
    let victim = pos.piece_on(m.get_dest());
    let attacker = pos.piece_on(m.get_source());

    match (victim, attacker) {
        (Some(v), Some(a)) => piece_value(v) * 10 - piece_value(a),
        _ => UNRESOLVED_CAPTURE_BONUS,
    }
}

/// Score a move for ordering (higher = search first)
pub fn score_move(pos: &Position, m: Move) -> i32 {
    let mut score = 0;

    if pos.is_capture(m) {
        score += mvv_lva_score(pos, m);
    }

    if let Some(promo) = m.get_promotion() {
        score += piece_value(promo);
    }

    // Tested on a child board; the position itself is untouched
    if pos.gives_check(m) {
        score += CHECK_BONUS;
    }

    score
}

/// Order moves best-first.
///
/// Returns a permutation of `moves`. The sort is stable, so equally scored moves keep
/// their input order.
pub fn order_moves(pos: &Position, moves: Vec<Move>) -> Vec<Move> {
    let mut scored: Vec<(Move, i32)> = moves
        .into_iter()
        .map(|m| (m, score_move(pos, m)))
        .collect();
    scored.sort_by_key(|&(_, score)| Reverse(score));
    scored.into_iter().map(|(m, _)| m).collect()
}
