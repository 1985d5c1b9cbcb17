use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use scacco_core::{destinations, destinations_from_label, Board, Move};
use scacco_uci::{MoveOracle, UciProcess};

/// Terminal chessboard with move hints and an optional UCI engine opponent.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a UCI engine binary that plays the replies.
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Engine think time per move, in milliseconds.
    #[arg(long, default_value_t = 1500)]
    movetime: u64,

    /// Start with the board flipped (rank 1 at the top).
    #[arg(long)]
    flipped: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut board = Board::starting_position();
    if args.flipped {
        board.flip();
    }

    let mut oracle = match &args.engine {
        Some(path) => {
            let engine = UciProcess::spawn(path, Duration::from_millis(args.movetime))?;
            info!(engine = %path.display(), movetime_ms = args.movetime, "engine attached");
            Some(engine)
        }
        None => None,
    };

    println!("{}", board.pretty());
    println!("Type help for the command list.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} to move> ", board.side_to_move().name());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "help" => print_help(),
            "board" => println!("{}", board.pretty()),
            "fen" => println!("{board}"),
            "moves" => print!("{}", board.history_log()),
            "flip" => {
                board.flip();
                println!("{}", board.pretty());
            }
            "reset" => {
                board.reset();
                if let Some(engine) = oracle.as_mut() {
                    engine.new_game()?;
                }
                println!("{}", board.pretty());
            }
            "go" => match oracle.as_mut() {
                Some(engine) => engine_reply(&mut board, engine),
                None => eprintln!("no engine attached; start with --engine <path>"),
            },
            _ => handle_square_or_move(input, &mut board, oracle.as_mut()),
        }
    }

    Ok(())
}

/// Interpret free-form input: a two-character square label lists that
/// square's moves, anything else is tried as coordinate move text.
fn handle_square_or_move(input: &str, board: &mut Board, oracle: Option<&mut UciProcess>) {
    if input.len() == 2 {
        show_destinations(input, board);
        return;
    }
    match input.parse::<Move>() {
        Ok(mv) => {
            if play_human(board, mv) && let Some(engine) = oracle {
                engine_reply(board, engine);
            }
        }
        Err(error) => eprintln!("{error}"),
    }
}

/// Print the destinations of the piece on a labeled square.
fn show_destinations(label: &str, board: &Board) {
    match destinations_from_label(board, label) {
        Ok(Some(targets)) if targets.is_empty() => println!("{label}: no moves"),
        Ok(Some(targets)) => {
            let mut list: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
            list.sort();
            println!("{label}: {}", list.join(" "));
        }
        Ok(None) => println!("{label}: empty square"),
        Err(error) => eprintln!("{error}"),
    }
}

/// Play a human move if the generator offers its destination.
///
/// Returns `true` when the move was applied to the board.
fn play_human(board: &mut Board, mv: Move) -> bool {
    match destinations(board, mv.from) {
        None => {
            eprintln!("no piece on {}", mv.from);
            false
        }
        Some(targets) if !targets.contains(&mv.to) => {
            eprintln!("{} cannot move to {}", mv.from, mv.to);
            false
        }
        Some(_) => match board.play(mv) {
            Some(played) => {
                println!("{played}");
                println!("{}", board.pretty());
                true
            }
            None => false,
        },
    }
}

/// Ask the engine for a move and apply it.
///
/// Engine trouble is reported and the session continues; the user can
/// keep moving pieces or quit.
fn engine_reply(board: &mut Board, engine: &mut UciProcess) {
    match engine.best_move(board) {
        Ok(mv) => match board.play(mv) {
            Some(played) => {
                println!("engine plays {played}");
                println!("{}", board.pretty());
            }
            None => eprintln!("engine suggested {mv} but {} is empty", mv.from),
        },
        Err(error) => eprintln!("engine error: {error}"),
    }
}

fn print_help() {
    println!("  e2      list the moves for the piece on e2");
    println!("  e2e4    move the piece on e2 to e4");
    println!("  go      ask the engine to move");
    println!("  board   print the board");
    println!("  fen     print the position as FEN");
    println!("  moves   print the move history");
    println!("  flip    turn the board around");
    println!("  reset   start over");
    println!("  quit    leave");
}
