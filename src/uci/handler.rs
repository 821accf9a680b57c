//! UCI command handler and main loop.

use super::parser::{parse_command, UciCommand};
use super::{SearchParams, ENGINE_AUTHOR, ENGINE_NAME};
use crate::config::EngineConfig;
use crate::eval;
use crate::position::Position;
use crate::search::Searcher;
use crate::logging;
use log::{debug, warn};
use std::io::{self, BufRead, Stdout, Write};

/// UCI protocol handler
pub struct UciHandler<W: Write = Stdout> {
    /// Current position, including the moves played to reach it
    position: Position,
    config: EngineConfig,
    /// Should the engine quit
    quit: bool,
    out: W,
}

impl Default for UciHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UciHandler {
    pub fn new() -> Self {
        Self::with_output(EngineConfig::default(), io::stdout())
    }
}

impl<W: Write> UciHandler<W> {
    /// Handler writing its replies to `out`
    pub fn with_output(config: EngineConfig, out: W) -> Self {
        Self {
            position: Position::new(),
            config,
            quit: false,
            out,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run the UCI main loop until "quit" or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            debug!("< {}", line);
            self.handle_input(&line)?;
            if self.quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle a single UCI command
    pub fn handle_input(&mut self, input: &str) -> io::Result<()> {
        let cmd = parse_command(input);
        self.handle_command(cmd)
    }

    fn handle_command(&mut self, cmd: UciCommand) -> io::Result<()> {
        match cmd {
            UciCommand::Uci => self.cmd_uci(),
            UciCommand::Debug(on) => {
                log::set_max_level(logging::level(on));
                Ok(())
            }
            UciCommand::IsReady => self.send("readyok"),
            UciCommand::SetOption { name, value } => {
                if let Err(e) = self.config.set_option(&name, value.as_deref()) {
                    warn!("{}", e);
                }
                Ok(())
            }
            UciCommand::UciNewGame => {
                self.position = Position::new();
                Ok(())
            }
            UciCommand::Position { fen, moves } => {
                self.cmd_position(fen.as_deref(), &moves);
                Ok(())
            }
            UciCommand::Go(params) => self.cmd_go(params),
            // Searches are synchronous, so there is never one to stop
            UciCommand::Stop => Ok(()),
            UciCommand::Quit => {
                self.quit = true;
                Ok(())
            }
            UciCommand::Display => {
                let board = self.position.to_string();
                self.send(&board)
            }
            UciCommand::Eval => self.cmd_eval(),
            UciCommand::Empty => Ok(()),
            UciCommand::Unknown(s) => {
                warn!("Unknown command: {}", s);
                Ok(())
            }
        }
    }

    /// Send output to GUI
    fn send(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", msg)?;
        self.out.flush()
    }

    // === UCI Commands ===

    fn cmd_uci(&mut self) -> io::Result<()> {
        self.send(&format!("id name {}", ENGINE_NAME))?;
        self.send(&format!("id author {}", ENGINE_AUTHOR))?;
        for option in EngineConfig::uci_options() {
            self.send(&option)?;
        }
        self.send("uciok")
    }

    fn cmd_position(&mut self, fen: Option<&str>, moves: &[String]) {
        let mut position = match fen {
            Some(f) => match Position::from_fen(f) {
                Ok(p) => p,
                Err(e) => {
                    warn!("{}", e);
                    return;
                }
            },
            None => Position::new(),
        };

        for move_str in moves {
            match position.parse_uci(move_str) {
                Ok(m) => position.push(m),
                Err(e) => warn!("{}", e),
            }
        }

        self.position = position;
    }

    fn cmd_go(&mut self, params: SearchParams) -> io::Result<()> {
        let depth = params
            .depth
            .map(|d| d.clamped())
            .unwrap_or_else(|| self.config.depth());

        let result = Searcher::new().search(&mut self.position, depth);
        let stats = &result.stats;
        let score = result.score.relative_to(self.position.side_to_move());

        let mut info = format!(
            "info depth {} score cp {} nodes {} nps {} time {}",
            stats.depth.raw(),
            score.raw(),
            stats.nodes,
            stats.nps(),
            stats.time_ms
        );
        if let Some(m) = result.best_move {
            info.push_str(&format!(" pv {}", Position::uci(m)));
        }
        self.send(&info)?;

        match result.best_move {
            Some(m) => self.send(&format!("bestmove {}", Position::uci(m))),
            None => self.send("bestmove 0000"),
        }
    }

    fn cmd_eval(&mut self) -> io::Result<()> {
        let t = eval::trace(&self.position);
        let total = eval::evaluate(&self.position);
        self.send(&format!("Material:   {:>6}", t.material))?;
        self.send(&format!("Positional: {:>6}", t.positional))?;
        self.send(&format!("Mobility:   {:>6}", t.mobility))?;
        self.send(&format!("Castling:   {:>6}", t.castling))?;
        self.send(&format!("Check:      {:>6}", t.check))?;
        self.send(&format!("Final evaluation: {} (white side)", total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Depth;
    use log::LevelFilter;

    fn run_commands(commands: &str) -> (UciHandler<Vec<u8>>, String) {
        let mut handler = UciHandler::with_output(EngineConfig::default(), Vec::new());
        handler.run(commands.as_bytes()).unwrap();
        let text = String::from_utf8(handler.out.clone()).unwrap();
        (handler, text)
    }

    #[test]
    fn test_handshake() {
        let (_, out) = run_commands("uci\nisready\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("id name {}", ENGINE_NAME));
        assert!(lines.contains(&"option name Depth type spin default 4 min 0 max 10"));
        assert!(lines.contains(&"uciok"));
        assert_eq!(lines.last(), Some(&"readyok"));
    }

    #[test]
    fn test_position_keeps_history() {
        let (handler, _) = run_commands("position startpos moves e2e4 e7e5 g1f3\n");
        assert_eq!(
            handler.position().fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        assert_eq!(handler.position().move_stack().count(), 3);
    }

    #[test]
    fn test_bad_input_is_ignored() {
        // Illegal move skipped, later moves still applied
        let (handler, _) = run_commands("position startpos moves e2e5 e2e4\n");
        assert_eq!(handler.position().move_stack().count(), 1);

        // Invalid FEN leaves the previous position in place
        let (handler, _) =
            run_commands("position startpos moves d2d4\nposition fen garbage w - -\nflip\n");
        assert_eq!(handler.position().move_stack().count(), 1);
        assert!(!handler.should_quit());
    }

    #[test]
    fn test_go_finds_mate() {
        let (_, out) = run_commands("position fen 6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1\ngo depth 1\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("info depth 1 score cp 30000 "));
        assert!(lines[0].ends_with("pv e1e8"));
        assert_eq!(lines[1], "bestmove e1e8");
    }

    #[test]
    fn test_go_reports_score_for_side_to_move() {
        let (_, out) = run_commands("position fen 4r1k1/8/8/8/8/8/5PPP/6K1 b - - 0 1\ngo depth 2\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("info depth 2 score cp 30000 "));
        assert_eq!(lines[1], "bestmove e8e1");
    }

    #[test]
    fn test_go_without_legal_moves() {
        let (_, out) = run_commands("position fen k7/8/1QK5/8/8/8/8/8 b - - 0 1\ngo depth 2\n");
        assert_eq!(out.lines().last(), Some("bestmove 0000"));
    }

    #[test]
    fn test_setoption_depth() {
        let (handler, _) = run_commands("setoption name Depth value 2\nsetoption name Hash value 64\n");
        assert_eq!(handler.config().depth(), Depth::new(2));

        let (_, out) = run_commands("setoption name Depth value 1\ngo\n");
        assert!(out.starts_with("info depth 1 "));
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let (handler, out) = run_commands("quit\nisready\n");
        assert!(handler.should_quit());
        assert!(out.is_empty());
    }

    #[test]
    fn test_eval_and_display() {
        let (_, out) = run_commands("eval\nd\n");
        assert!(out.contains(&format!("Mobility:   {:>6}", 40)));
        assert!(out.contains("Final evaluation: +0.40 (white side)"));
        assert!(out.contains("FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    }

    #[test]
    fn test_debug_toggles_log_level() {
        run_commands("debug on\n");
        assert_eq!(log::max_level(), LevelFilter::Debug);
        run_commands("debug off\n");
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
