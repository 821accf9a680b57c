//! Game position: the board capability the engine searches over.
//!
//! `chess::Board` is an immutable, copyable snapshot with legal move generation.
//! `Position` layers the game state a searcher needs on top of it:
//! - an undo stack so moves can be applied and taken back in place
//! - halfmove clock and fullmove number (kept out of `chess::Board`)
//! - repetition history for draw claims
//! - SAN rendering and parsing (see `san`)
//!
//! Moves applied during search go through [`Position::apply`], which returns a
//! [`ScopedMove`] guard that takes the move back when it goes out of scope.

mod draw;
mod error;
mod san;

pub use error::PositionError;

use crate::types::{Board, BoardStatus, Color, Move, MoveGen, Piece, Square, EMPTY};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// State needed to take back one move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Undo {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    mv: Move,
}

/// Why a game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// Final result of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    /// `None` for draws
    pub winner: Option<Color>,
}

impl Outcome {
    /// PGN result string
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

/// A chess position with move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    stack: Vec<Undo>,
}

impl Position {
    /// The standard starting position
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
            stack: Vec::new(),
        }
    }

    /// Parse a FEN string. The move counters are optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(PositionError::invalid_fen(
                fen,
                format!("expected 4 to 6 fields, found {}", fields.len()),
            ));
        }

        let halfmove_clock = match fields.get(4) {
            Some(field) => field.parse::<u32>().map_err(|_| {
                PositionError::invalid_fen(fen, format!("bad halfmove clock '{field}'"))
            })?,
            None => 0,
        };
        let fullmove_number = match fields.get(5) {
            Some(field) => field.parse::<u32>().map_err(|_| {
                PositionError::invalid_fen(fen, format!("bad fullmove number '{field}'"))
            })?,
            None => 1,
        };

        let board = Board::from_str(&format!("{} 0 1", fields[..4].join(" ")))
            .map_err(|_| PositionError::invalid_fen(fen, "board rejected by move generator"))?;

        Ok(Self {
            board,
            halfmove_clock,
            fullmove_number: fullmove_number.max(1),
            stack: Vec::new(),
        })
    }

    /// FEN of the current position, including move counters
    pub fn fen(&self) -> String {
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The underlying board snapshot
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied since this position was set up, oldest first
    pub fn move_stack(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|u| u.mv)
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    // === Move generation ===

    /// Legal moves for the side to move, in generator order
    pub fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.board).collect()
    }

    #[inline]
    pub fn legal_move_count(&self) -> usize {
        MoveGen::new_legal(&self.board).len()
    }

    /// Pawn moves diagonally onto an empty square
    pub fn is_en_passant(&self, m: Move) -> bool {
        self.board.piece_on(m.get_source()) == Some(Piece::Pawn)
            && m.get_source().get_file() != m.get_dest().get_file()
            && self.board.piece_on(m.get_dest()).is_none()
    }

    pub fn is_capture(&self, m: Move) -> bool {
        self.board.piece_on(m.get_dest()).is_some() || self.is_en_passant(m)
    }

    /// Captures and pawn moves reset the halfmove clock
    pub fn is_zeroing(&self, m: Move) -> bool {
        self.board.piece_on(m.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(m.get_dest()).is_some()
    }

    /// Whether playing `m` leaves the opponent in check
    pub fn gives_check(&self, m: Move) -> bool {
        *self.board.make_move_new(m).checkers() != EMPTY
    }

    // === Apply / undo ===

    /// Play a legal move.
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.board.legal(m), "push of illegal move {}", m);

        let zeroing = self.is_zeroing(m);
        self.stack.push(Undo {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            mv: m,
        });

        self.board = self.board.make_move_new(m);
        self.halfmove_clock = if zeroing { 0 } else { self.halfmove_clock + 1 };
        if self.board.side_to_move() == Color::White {
            self.fullmove_number += 1;
        }
    }

    /// Take back the most recent move
    pub fn pop(&mut self) -> Option<Move> {
        let undo = self.stack.pop()?;
        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        Some(undo.mv)
    }

    /// Play `m` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the position; dropping it undoes the move on every exit
    /// path, including early returns and unwinding.
    pub fn apply(&mut self, m: Move) -> ScopedMove<'_> {
        self.push(m);
        ScopedMove { position: self }
    }

    // === Status ===

    #[inline]
    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    pub fn is_checkmate(&self) -> bool {
        self.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.status() == BoardStatus::Stalemate
    }

    /// Neither side can possibly deliver mate
    pub fn is_insufficient_material(&self) -> bool {
        draw::has_insufficient_material(&self.board, Color::White)
            && draw::has_insufficient_material(&self.board, Color::Black)
    }

    /// How many times the current position occurred since the last capture or
    /// pawn move, counting the current occurrence.
    pub fn repetition_count(&self) -> usize {
        let current = self.board.get_hash();
        1 + self.repetition_window().filter(|&h| h == current).count()
    }

    /// Draw by threefold repetition can be claimed now or by the next move
    pub fn can_claim_threefold_repetition(&self) -> bool {
        if self.repetition_count() >= 3 {
            return true;
        }

        let mut seen: Vec<u64> = self.repetition_window().collect();
        seen.push(self.board.get_hash());
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        if !sorted.windows(2).any(|w| w[0] == w[1]) {
            // Nothing occurred twice, so no move can make a third occurrence
            return false;
        }

        MoveGen::new_legal(&self.board)
            .filter(|&m| !self.is_zeroing(m))
            .any(|m| {
                let child = self.board.make_move_new(m).get_hash();
                1 + seen.iter().filter(|&&h| h == child).count() >= 3
            })
    }

    /// Draw by the fifty-move rule can be claimed now or by the next move
    pub fn can_claim_fifty_moves(&self) -> bool {
        if self.halfmove_clock >= 100 {
            return self.legal_move_count() > 0;
        }
        self.halfmove_clock >= 99
            && MoveGen::new_legal(&self.board).any(|m| !self.is_zeroing(m))
    }

    pub fn is_claimable_draw(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }

    /// Automatic draw after 75 moves without a capture or pawn move
    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= 150 && self.legal_move_count() > 0
    }

    /// Automatic draw on the fifth occurrence of a position
    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetition_count() >= 5
    }

    /// How the game ended, if it has. Claimable draws do not end the game.
    pub fn outcome(&self) -> Option<Outcome> {
        let (termination, winner) = match self.status() {
            BoardStatus::Checkmate => (Termination::Checkmate, Some(!self.side_to_move())),
            BoardStatus::Stalemate => (Termination::Stalemate, None),
            BoardStatus::Ongoing => {
                if self.is_insufficient_material() {
                    (Termination::InsufficientMaterial, None)
                } else if self.is_seventyfive_moves() {
                    (Termination::SeventyFiveMoves, None)
                } else if self.is_fivefold_repetition() {
                    (Termination::FivefoldRepetition, None)
                } else {
                    return None;
                }
            }
        };
        Some(Outcome { termination, winner })
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Hashes of earlier positions reachable by reversible moves, newest first
    fn repetition_window(&self) -> impl Iterator<Item = u64> + '_ {
        self.stack
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .map(|u| u.board.get_hash())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Position::from_fen(fen)
    }
}

/// Text diagram of the board, rank 8 first, plus the FEN.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = crate::types::ALL_SQUARES[rank * 8 + file];
                let c = match (self.board.piece_on(sq), self.board.color_on(sq)) {
                    (Some(piece), Some(color)) => san::piece_char(piece, color),
                    _ => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "FEN: {}", self.fen())
    }
}

/// A move applied to a [`Position`] that is taken back on drop.
pub struct ScopedMove<'a> {
    position: &'a mut Position,
}

impl Deref for ScopedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.position.pop();
    }
}
