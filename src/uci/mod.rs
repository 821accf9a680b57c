//! UCI (Universal Chess Interface) protocol handler.
//!
//! This module implements the subset of the UCI protocol a fixed-depth engine needs
//! to talk to chess GUIs. See: http://wbec-ridderkerk.nl/html/UCIProtocol.html

mod parser;
mod handler;

pub use handler::UciHandler;
pub use parser::{parse_command, UciCommand};

use crate::types::Depth;

/// UCI engine identification
pub const ENGINE_NAME: &str = "ChessGuardian";
pub const ENGINE_AUTHOR: &str = "ChessGuardian developers";

/// Parameters of the "go" command.
///
/// Searches are fixed-depth, so clock and node limits are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search to this depth instead of the configured one
    pub depth: Option<Depth>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create params for a fixed depth search
    pub fn fixed_depth(depth: i32) -> Self {
        Self {
            depth: Some(Depth::new(depth)),
        }
    }
}
