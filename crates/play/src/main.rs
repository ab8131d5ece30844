//! Terminal chess
//!
//! Play human or computer on either side. Computer moves come from an
//! external UCI engine (Stockfish by default) with a random fallback.

mod config;
mod game;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_rules::{move_to_uci, notation, Position};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uci_client::Suggester;

use config::{PlayConfig, Player};
use game::{color_name, parse_command, Command, SelectOutcome, Session};

fn print_usage() {
    println!("Terminal chess");
    println!();
    println!("Usage:");
    println!("  chess_play [--config <file>] [--fen <fen>]");
    println!();
    println!("Commands during play:");
    println!("  e2e4 | e2 e4  - play a move (add q/r/b/n to choose a promotion)");
    println!("  e2            - select a square; a second square completes the move");
    println!("  undo          - take back the last move");
    println!("  reset         - back to the starting position");
    println!("  moves         - list legal moves");
    println!("  quit          - leave");
}

struct Args {
    config: Option<PathBuf>,
    fen: Option<String>,
}

fn parse_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut parsed = Args { config: None, fen: None };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).context("--config needs a file")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--fen" => {
                i += 1;
                parsed.fen = Some(args.get(i).context("--fen needs a position")?.clone());
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument {other:?}"),
        }
        i += 1;
    }
    Ok(Some(parsed))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let Some(args) = parse_args()? else {
        print_usage();
        return Ok(());
    };
    let config = PlayConfig::load(args.config.as_deref())?;
    let start = match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("invalid --fen {fen:?}"))?,
        None => Position::startpos(),
    };

    let suggester = if config.has_computer() {
        Suggester::new(config.engine.clone())
    } else {
        Suggester::random_only()
    };
    info!(white = ?config.white, black = ?config.black, "starting game");

    run(&config, Session::new(start), suggester)
}

fn run(config: &PlayConfig, mut session: Session, mut suggester: Suggester) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let is_computer = |color| config.player(color) == Player::Computer;

    loop {
        if let Some(text) = session.take_announcement() {
            println!("{text}");
        }
        let side = session.position().side_to_move();

        if !config.has_human() {
            if session.status().is_over() {
                break;
            }
            if session.position().fullmove_number() > config.max_moves {
                println!("Move limit reached.");
                break;
            }
        }

        if !session.status().is_over() && is_computer(side) {
            let legal = session.legal().to_vec();
            let mv = suggester.best_move(session.position(), &legal)?;
            println!("{} plays {}", color_name(side), notation(&mv));
            session.play(mv);
            continue;
        }

        print!("{} to move> ", color_name(side));
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => print_usage(),
            Command::Moves => {
                let moves: Vec<String> = session.legal().iter().map(|m| move_to_uci(*m)).collect();
                println!("{}", moves.join(" "));
            }
            Command::Undo => {
                if session.take_back(is_computer) == 0 {
                    println!("Nothing to undo.");
                }
            }
            Command::Reset => {
                session.reset();
                suggester.new_game();
            }
            _ if session.status().is_over() => println!("The game is over: undo, reset or quit."),
            Command::Square(sq) => {
                if let SelectOutcome::Rejected { from, to } = session.select(sq) {
                    warn!(from, to, "not a legal move");
                    println!("Illegal move.");
                }
            }
            Command::Move { from, to, promo } => {
                if session.play_squares(from, to, promo).is_none() {
                    println!("Illegal move.");
                }
            }
        }
    }
    Ok(())
}
