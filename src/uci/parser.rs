//! UCI command parser.

use super::SearchParams;
use crate::types::Depth;

/// Parsed UCI command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    /// "uci" - Initialize UCI mode
    Uci,
    /// "debug on/off"
    Debug(bool),
    /// "isready" - Synchronization
    IsReady,
    /// "setoption name X value Y"
    SetOption { name: String, value: Option<String> },
    /// "ucinewgame" - New game starting
    UciNewGame,
    /// "position startpos/fen [moves ...]"
    Position { fen: Option<String>, moves: Vec<String> },
    /// "go ..." - Start searching
    Go(SearchParams),
    /// "stop" - Stop searching
    Stop,
    /// "quit" - Exit the engine
    Quit,
    /// "d" - Debug: display board (non-standard but common)
    Display,
    /// "eval" - Debug: print the evaluation breakdown (non-standard)
    Eval,
    /// Blank line
    Empty,
    /// Unknown command
    Unknown(String),
}

/// Parse a UCI command string into a UciCommand
pub fn parse_command(input: &str) -> UciCommand {
    let input = input.trim();
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let Some((&command, args)) = tokens.split_first() else {
        return UciCommand::Empty;
    };

    match command {
        "uci" => UciCommand::Uci,
        "debug" => UciCommand::Debug(args.first() == Some(&"on")),
        "isready" => UciCommand::IsReady,
        "setoption" => parse_setoption(args),
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => parse_position(args),
        "go" => parse_go(args),
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        "d" => UciCommand::Display,
        "eval" => UciCommand::Eval,
        _ => UciCommand::Unknown(input.to_string()),
    }
}

/// `name <words..> [value <words..>]`; names and values may contain spaces.
fn parse_setoption(args: &[&str]) -> UciCommand {
    let value_at = args.iter().position(|&t| t == "value");
    let name = match args.iter().position(|&t| t == "name") {
        Some(at) => {
            let end = value_at.filter(|&v| v > at).unwrap_or(args.len());
            args[at + 1..end].join(" ")
        }
        None => String::new(),
    };
    let value = value_at
        .map(|at| args[at + 1..].join(" "))
        .filter(|v| !v.is_empty());

    UciCommand::SetOption { name, value }
}

/// `startpos | fen <fields..>`, then an optional `moves <m1> <m2> ..`.
fn parse_position(args: &[&str]) -> UciCommand {
    let (setup, moves) = match args.iter().position(|&t| t == "moves") {
        Some(at) => (&args[..at], &args[at + 1..]),
        None => (args, &[][..]),
    };

    // A FEN has at most six fields; the counters may be left off
    let fen = match setup {
        ["fen", fields @ ..] if !fields.is_empty() => {
            Some(fields[..fields.len().min(6)].join(" "))
        }
        _ => None,
    };

    UciCommand::Position {
        fen,
        moves: moves.iter().map(|m| m.to_string()).collect(),
    }
}

/// Only `depth N` is honoured; clock and node limits are ignored.
fn parse_go(args: &[&str]) -> UciCommand {
    let mut params = SearchParams::new();

    if let Some(at) = args.iter().position(|&t| t == "depth") {
        params.depth = args
            .get(at + 1)
            .and_then(|t| t.parse::<i32>().ok())
            .map(Depth::new);
    }

    UciCommand::Go(params)
}
