//! Move notation: Standard Algebraic Notation and UCI coordinates.

use super::{Position, PositionError};
use crate::types::{BoardStatus, Color, Move, MoveGen, Piece, Square, EMPTY};
use std::str::FromStr;

#[inline]
fn file_char(sq: Square) -> char {
    (b'a' + sq.get_file().to_index() as u8) as char
}

#[inline]
fn rank_char(sq: Square) -> char {
    (b'1' + sq.get_rank().to_index() as u8) as char
}

/// Upper-case SAN letter of a piece
fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

/// FEN-style piece character: upper case for White, lower case for Black
pub(super) fn piece_char(piece: Piece, color: Color) -> char {
    let c = piece_letter(piece);
    match color {
        Color::White => c,
        Color::Black => c.to_ascii_lowercase(),
    }
}

/// Strip check marks, annotations and `=` so spellings compare equal
fn normalize_san(san: &str) -> String {
    san.trim()
        .trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'))
        .replace('0', "O")
        .replace('=', "")
}

impl Position {
    /// Render a legal move in Standard Algebraic Notation, e.g. `Nbd7`, `exd6`,
    /// `O-O`, `e8=Q+`, `Qh4#`.
    pub fn san(&self, m: Move) -> String {
        let mut san = self.san_body(m);
        let child = self.board.make_move_new(m);
        if child.status() == BoardStatus::Checkmate {
            san.push('#');
        } else if *child.checkers() != EMPTY {
            san.push('+');
        }
        san
    }

    /// SAN without the check suffix
    fn san_body(&self, m: Move) -> String {
        let src = m.get_source();
        let dst = m.get_dest();
        let piece = match self.board.piece_on(src) {
            Some(p) => p,
            None => return m.to_string(),
        };

        if piece == Piece::King {
            let from = src.get_file().to_index();
            let to = dst.get_file().to_index();
            if to == from + 2 {
                return "O-O".to_string();
            }
            if to + 2 == from {
                return "O-O-O".to_string();
            }
        }

        let capture = self.is_capture(m);
        let mut san = String::with_capacity(8);

        if piece == Piece::Pawn {
            if capture {
                san.push(file_char(src));
                san.push('x');
            }
            san.push_str(&dst.to_string());
            if let Some(promo) = m.get_promotion() {
                san.push('=');
                san.push(piece_letter(promo));
            }
            return san;
        }

        san.push(piece_letter(piece));

        // Other pieces of the same kind that can also reach the destination
        let rivals: Vec<Square> = MoveGen::new_legal(&self.board)
            .filter(|o| {
                o.get_dest() == dst
                    && o.get_source() != src
                    && self.board.piece_on(o.get_source()) == Some(piece)
            })
            .map(|o| o.get_source())
            .collect();

        if !rivals.is_empty() {
            let file_unique = rivals.iter().all(|r| r.get_file() != src.get_file());
            let rank_unique = rivals.iter().all(|r| r.get_rank() != src.get_rank());
            if file_unique {
                san.push(file_char(src));
            } else if rank_unique {
                san.push(rank_char(src));
            } else {
                san.push(file_char(src));
                san.push(rank_char(src));
            }
        }

        if capture {
            san.push('x');
        }
        san.push_str(&dst.to_string());
        san
    }

    /// Parse a SAN move (`Nf3`, `exd5`, `O-O`, `e8=Q`) that is legal here.
    pub fn parse_san(&self, san: &str) -> Result<Move, PositionError> {
        let wanted = normalize_san(san);
        MoveGen::new_legal(&self.board)
            .find(|&m| !wanted.is_empty() && normalize_san(&self.san_body(m)) == wanted)
            .ok_or_else(|| self.illegal(san))
    }

    /// Parse a UCI coordinate move (e.g. `e2e4`, `e7e8q`) that is legal here.
    pub fn parse_uci(&self, text: &str) -> Result<Move, PositionError> {
        let text = text.trim();
        if text.len() < 4 || text.len() > 5 || !text.is_ascii() {
            return Err(self.illegal(text));
        }

        let from = Square::from_str(&text[0..2]).map_err(|_| self.illegal(text))?;
        let to = Square::from_str(&text[2..4]).map_err(|_| self.illegal(text))?;

        let promo = match text.chars().nth(4) {
            None => None,
            Some('q') | Some('Q') => Some(Piece::Queen),
            Some('r') | Some('R') => Some(Piece::Rook),
            Some('b') | Some('B') => Some(Piece::Bishop),
            Some('n') | Some('N') => Some(Piece::Knight),
            Some(_) => return Err(self.illegal(text)),
        };

        MoveGen::new_legal(&self.board)
            .find(|m| m.get_source() == from && m.get_dest() == to && m.get_promotion() == promo)
            .ok_or_else(|| self.illegal(text))
    }

    /// Parse either UCI or SAN notation
    pub fn parse_move(&self, text: &str) -> Result<Move, PositionError> {
        self.parse_uci(text).or_else(|_| self.parse_san(text))
    }

    /// Format a move in UCI notation (e.g. `e2e4`, `e7e8q`)
    pub fn uci(m: Move) -> String {
        let mut s = format!("{}{}", m.get_source(), m.get_dest());
        if let Some(promo) = m.get_promotion() {
            s.push(piece_letter(promo).to_ascii_lowercase());
        }
        s
    }

    fn illegal(&self, notation: &str) -> PositionError {
        PositionError::IllegalMove {
            notation: notation.to_string(),
            fen: self.fen(),
        }
    }
}
