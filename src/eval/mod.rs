//! Static position evaluation.
//!
//! Scores are White-relative centipawns. Finished or drawn positions short-circuit to
//! the mate sentinel or zero; everything else is the sum of
//! - material and piece-square bonuses (see `pst`)
//! - mobility of the side to move
//! - retained castling rights
//! - a penalty for the side to move being in check

mod pst;

pub use pst::oriented_bonus;

use crate::position::Position;
use crate::types::{color_sign, piece_value, Color, Score, Value, ALL_SQUARES};

/// Per legal move of the side to move
pub const MOBILITY_BONUS: Value = 2;
pub const KINGSIDE_CASTLING_BONUS: Value = 15;
pub const QUEENSIDE_CASTLING_BONUS: Value = 10;
/// Paid by the side to move when it is in check
pub const CHECK_PENALTY: Value = 20;

/// Term-by-term evaluation of a live position (White-relative)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalTrace {
    pub material: Value,
    pub positional: Value,
    pub mobility: Value,
    pub castling: Value,
    pub check: Value,
}

impl EvalTrace {
    pub fn total(&self) -> Score {
        Score::cp(self.material + self.positional + self.mobility + self.castling + self.check)
    }
}

/// Evaluate the position from White's perspective.
///
/// Checkmate scores the mate sentinel against the side to move. Stalemate,
/// insufficient material and claimable draws score exactly zero.
pub fn evaluate(pos: &Position) -> Score {
    if pos.is_checkmate() {
        return Score::checkmated(pos.side_to_move());
    }
    if pos.is_stalemate() || pos.is_insufficient_material() || pos.is_claimable_draw() {
        return Score::draw();
    }
    trace(pos).total()
}

/// Break down the non-terminal evaluation into its terms.
pub fn trace(pos: &Position) -> EvalTrace {
    let board = pos.board();
    let stm = color_sign(pos.side_to_move());
    let mut t = EvalTrace::default();

    for &sq in ALL_SQUARES.iter() {
        if let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) {
            let sign = color_sign(color);
            t.material += sign * piece_value(piece);
            t.positional += sign * oriented_bonus(piece, sq, color);
        }
    }

    t.mobility = stm * MOBILITY_BONUS * pos.legal_move_count() as Value;

    for &color in &[Color::White, Color::Black] {
        let rights = board.castle_rights(color);
        let sign = color_sign(color);
        if rights.has_kingside() {
            t.castling += sign * KINGSIDE_CASTLING_BONUS;
        }
        if rights.has_queenside() {
            t.castling += sign * QUEENSIDE_CASTLING_BONUS;
        }
    }

    if pos.is_check() {
        t.check = -stm * CHECK_PENALTY;
    }

    t
}
