//! Core types for the engine.
//!
//! Board and move types come straight from the `chess` crate; this module adds the
//! engine-specific values (scores, depths, material) on top of them.
//!
//! # Design Principles
//! - Re-export chess crate types as the canonical source for board/move types
//! - Keep every score White-relative: positive is good for White
//! - Piece-indexed constants are plain `const` data, never lookups that can miss

mod score;
mod depth;

pub use score::{Score, SCORE_INFINITY, SCORE_MATE, SCORE_DRAW};
pub use depth::{Depth, MAX_SEARCH_DEPTH};

// Re-export chess crate types as canonical types
pub use chess::{
    Board,
    ChessMove as Move,
    Square,
    Piece,
    Color,
    BitBoard,
    MoveGen,
    BoardStatus,
    ALL_SQUARES,
    EMPTY,
};

/// Node count type
pub type NodeCount = u64;

/// Centipawn value type (for piece values, etc.)
pub type Value = i32;

// Piece values in centipawns
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 320;
pub const BISHOP_VALUE: Value = 330;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
/// Kings are never captured; mate is scored by the sentinel instead.
pub const KING_VALUE: Value = 0;

/// Get the material value of a piece in centipawns
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// +1 for White, -1 for Black.
#[inline]
pub const fn color_sign(color: Color) -> Value {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
