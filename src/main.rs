use chessguardian::config::{EngineConfig, DEFAULT_DEPTH};
use chessguardian::uci::UciHandler;
use chessguardian::{analysis, logging};
use clap::Parser;
use log::{error, info};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "chessguardian")]
#[command(about = "Fixed-depth minimax chess engine: UCI on stdin, or one-shot FEN analysis")]
struct Args {
    /// Search depth in plies (0-10)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: i32,

    /// Analyse this position and exit instead of speaking UCI
    #[arg(short, long)]
    fen: Option<String>,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = EngineConfig::with_depth(args.depth);

    match args.fen {
        Some(fen) => match analysis::analyze(&fen, &config) {
            Ok(result) => {
                println!("{}", result);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
        None => {
            info!("{} ready, depth {}", chessguardian::uci::ENGINE_NAME, config.depth());
            let mut handler = UciHandler::with_output(config, io::stdout());
            match handler.run(io::stdin().lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
