//! UCI command formatting and reply parsing.
//!
//! This crate sits on the GUI side of the protocol: commands are formatted
//! for the engine's stdin and replies are parsed from its stdout.

use std::time::Duration;

use scacco_core::{Board, Move};

use crate::error::UciError;

/// Format a `position` command describing `board`.
///
/// The board is shipped as a full FEN rather than `startpos` plus a move
/// list, so arbitrary setups serialize the same way as played games.
pub fn position_command(board: &Board) -> String {
    format!("position fen {board}")
}

/// Format a `go` command bounded by a fixed think time.
pub fn go_command(movetime: Duration) -> String {
    format!("go movetime {}", movetime.as_millis())
}

/// A parsed line of engine output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `uciok` -- the engine finished identifying itself.
    UciOk,
    /// `readyok` -- synchronization pong.
    ReadyOk,
    /// `bestmove <move>` -- the engine's answer for the current position.
    BestMove(Move),
    /// `bestmove (none)` -- the engine has no move to suggest.
    NoMove,
    /// Anything else (`id`, `option`, `info` chatter). Ignored.
    Other,
}

/// Parse a single line of engine output into a [`Reply`].
///
/// Engines may suffix a promotion letter to a bestmove ("e7e8q"); the
/// origin/destination pair is all the caller can apply, so the suffix is
/// dropped. Unrecognized lines are [`Reply::Other`], never errors: UCI
/// engines are free to chatter.
pub fn parse_reply(line: &str) -> Result<Reply, UciError> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("uciok") => Ok(Reply::UciOk),
        Some("readyok") => Ok(Reply::ReadyOk),
        Some("bestmove") => match tokens.next() {
            Some("(none)") => Ok(Reply::NoMove),
            Some(text) => {
                let pair = if text.len() == 5 && text.is_ascii() {
                    &text[..4]
                } else {
                    text
                };
                pair.parse::<Move>()
                    .map(Reply::BestMove)
                    .map_err(|_| UciError::MalformedBestMove {
                        line: line.to_string(),
                    })
            }
            None => Err(UciError::MalformedBestMove {
                line: line.to_string(),
            }),
        },
        _ => Ok(Reply::Other),
    }
}
