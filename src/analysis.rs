//! One-shot position analysis.
//!
//! Takes a FEN, reports whether the game is already decided and otherwise searches it
//! at the configured depth. This is what the command line prints and what the UCI
//! `go` command builds on.

use crate::config::EngineConfig;
use crate::eval;
use crate::position::{Outcome, Position, PositionError, Termination};
use crate::search::{SearchStats, Searcher};
use crate::types::{Color, Move, Score};
use std::fmt;

/// State of the game in the analysed position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Play goes on, `Color` is to move
    Ongoing(Color),
    /// Play may go on, but the side to move can claim a draw
    DrawClaimable,
    /// The game is over
    Over(Outcome),
}

impl GameStatus {
    pub fn of(pos: &Position) -> Self {
        match pos.outcome() {
            Some(outcome) => GameStatus::Over(outcome),
            None if pos.is_claimable_draw() => GameStatus::DrawClaimable,
            None => GameStatus::Ongoing(pos.side_to_move()),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing(color) => write!(f, "{} to move", color_name(*color)),
            GameStatus::DrawClaimable => write!(f, "Draw can be claimed (1/2-1/2)"),
            GameStatus::Over(outcome) => {
                let result = outcome.result();
                match (outcome.termination, outcome.winner) {
                    (Termination::Checkmate, Some(winner)) => {
                        write!(f, "Checkmate - {} wins ({})", color_name(winner), result)
                    }
                    (Termination::Checkmate, None) => write!(f, "Checkmate ({})", result),
                    (Termination::Stalemate, _) => write!(f, "Stalemate - Draw ({})", result),
                    (Termination::InsufficientMaterial, _) => {
                        write!(f, "Insufficient material - Draw ({})", result)
                    }
                    // Automatic draws get the generic game-over line
                    (Termination::SeventyFiveMoves | Termination::FivefoldRepetition, _) => {
                        write!(f, "Game over ({})", result)
                    }
                }
            }
        }
    }
}

/// Result of analysing one position
#[derive(Debug, Clone)]
pub struct Analysis {
    pub fen: String,
    pub status: GameStatus,
    pub best_move: Option<Move>,
    /// Best move in Standard Algebraic Notation
    pub san: Option<String>,
    /// Best move in UCI notation
    pub uci: Option<String>,
    /// White-relative score
    pub score: Score,
    /// White's winning chance in percent
    pub win_chance: u8,
    pub fallback: bool,
    /// `None` when the game was already over and nothing was searched
    pub stats: Option<SearchStats>,
}

impl Analysis {
    /// Signed pawn string, e.g. `+0.35`
    pub fn eval_text(&self) -> String {
        self.score.to_string()
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        match (&self.san, &self.uci) {
            (Some(san), Some(uci)) if self.fallback => {
                writeln!(f, "Best move: {} ({}, fallback)", san, uci)?
            }
            (Some(san), Some(uci)) => writeln!(f, "Best move: {} ({})", san, uci)?,
            _ => writeln!(f, "Best move: none")?,
        }
        writeln!(f, "Evaluation: {}", self.eval_text())?;
        write!(f, "White win chance: {}%", self.win_chance)?;
        if let Some(stats) = &self.stats {
            write!(
                f,
                "\nDepth {}, {} nodes, {} cutoffs, {} ms",
                stats.depth, stats.nodes, stats.cutoffs, stats.time_ms
            )?;
        }
        Ok(())
    }
}

/// Parse `fen` and analyse it.
pub fn analyze(fen: &str, config: &EngineConfig) -> Result<Analysis, PositionError> {
    let mut pos = Position::from_fen(fen)?;
    Ok(analyze_position(&mut pos, config))
}

/// Analyse `pos` at the configured depth. The position is left unchanged.
pub fn analyze_position(pos: &mut Position, config: &EngineConfig) -> Analysis {
    let status = GameStatus::of(pos);
    let fen = pos.fen();

    if let GameStatus::Over(outcome) = status {
        let win_chance = match outcome.winner {
            Some(Color::White) => 100,
            Some(Color::Black) => 0,
            None => 50,
        };
        return Analysis {
            fen,
            status,
            best_move: None,
            san: None,
            uci: None,
            score: eval::evaluate(pos),
            win_chance,
            fallback: false,
            stats: None,
        };
    }

    let result = Searcher::new().search(pos, config.depth());
    let san = result.best_move.map(|m| pos.san(m));
    let uci = result.best_move.map(Position::uci);

    Analysis {
        fen,
        status,
        best_move: result.best_move,
        san,
        uci,
        score: result.score,
        win_chance: result.score.win_chance(),
        fallback: result.fallback,
        stats: Some(result.stats),
    }
}
