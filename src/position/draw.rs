//! Material-based draw detection.

use crate::types::{BitBoard, Board, Color, Piece, EMPTY};

/// a1, c1, ..., b2, d2, ...
const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;

/// Whether `color` lacks the material to ever deliver mate.
pub(super) fn has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = *board.color_combined(color);
    let theirs = *board.color_combined(!color);

    let pawns = *board.pieces(Piece::Pawn);
    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);
    let queens = *board.pieces(Piece::Queen);
    let kings = *board.pieces(Piece::King);

    if ours & (pawns | *board.pieces(Piece::Rook) | queens) != EMPTY {
        return false;
    }

    // A lone knight mates only with help from enemy pieces other than queens
    if ours & knights != EMPTY {
        return ours.popcnt() <= 2 && (theirs & !kings & !queens) == EMPTY;
    }

    // Bishops all on one square colour never mate, unless something can block
    if ours & bishops != EMPTY {
        let dark = BitBoard::new(DARK_SQUARES);
        let same_colour = (bishops & dark) == EMPTY || (bishops & !dark) == EMPTY;
        return same_colour && pawns == EMPTY && knights == EMPTY;
    }

    true
}
