//! ChessGuardian: a fixed-depth minimax chess engine.
//!
//! # Layout
//! - `types`: scores, depths and piece values on top of the `chess` crate types
//! - `position`: game state with undo, counters, repetition history and SAN
//! - `eval`: static evaluation (material, piece-square tables, mobility, castling)
//! - `search`: alpha-beta minimax and move ordering
//! - `config`: engine options
//! - `analysis`: one-shot analysis of a FEN
//! - `uci`: the UCI front end
//! - `logging`: stderr logger for the binary

pub mod types;
pub mod position;
pub mod eval;
pub mod search;
pub mod config;
pub mod analysis;
pub mod uci;
pub mod logging;

pub use analysis::{analyze, Analysis, GameStatus};
pub use config::EngineConfig;
pub use position::{Position, PositionError};
pub use search::{SearchResult, Searcher};
pub use types::{Depth, Move, Score};
