//! Error types for position parsing and move input.

use std::fmt;

/// Error raised when text cannot be turned into a position or a legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The FEN string is malformed or describes an impossible board
    InvalidFen { fen: String, reason: String },
    /// The move text is malformed or not legal in the position
    IllegalMove { notation: String, fen: String },
}

impl PositionError {
    pub(crate) fn invalid_fen(fen: &str, reason: impl Into<String>) -> Self {
        PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidFen { fen, reason } => {
                write!(f, "Invalid FEN '{fen}': {reason}")
            }
            PositionError::IllegalMove { notation, fen } => {
                write!(f, "Illegal move '{notation}' in position '{fen}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}
