//! External engine processes and the oracle seam they sit behind.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};

use scacco_core::{Board, Move};

use crate::command::{go_command, parse_reply, position_command, Reply};
use crate::error::UciError;

/// A source of best moves for a board position.
///
/// The board crosses this seam by value of its serialized form, so an
/// implementation may live in another process entirely. Calls are
/// synchronous and may take as long as the oracle thinks.
pub trait MoveOracle {
    /// Return the move the oracle would play for the side to move on `board`.
    fn best_move(&mut self, board: &Board) -> Result<Move, UciError>;
}

/// A UCI engine running as a child process.
///
/// The `uci`/`isready` handshake happens during [`UciProcess::spawn`];
/// dropping the value asks the engine to quit and reaps it.
pub struct UciProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    /// Fixed think time passed with every `go`.
    movetime: Duration,
}

impl UciProcess {
    /// Launch the engine binary at `path` and complete the handshake.
    ///
    /// Blocks until the engine has answered `uciok` and `readyok`, so a
    /// returned process is ready for positions immediately.
    pub fn spawn(path: &Path, movetime: Duration) -> Result<UciProcess, UciError> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| UciError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        // Both streams were requested piped; a missing handle is an I/O
        // failure, not a programming error worth panicking over.
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("engine stdin was not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("engine stdout was not captured"))
            .map(BufReader::new)?;

        let mut process = UciProcess {
            child,
            stdin,
            stdout,
            movetime,
        };
        process.send("uci")?;
        process.wait_for(Reply::UciOk)?;
        process.send("isready")?;
        process.wait_for(Reply::ReadyOk)?;
        debug!(engine = %path.display(), "engine handshake complete");
        Ok(process)
    }

    /// Tell the engine a fresh game is starting and wait until it is ready.
    pub fn new_game(&mut self) -> Result<(), UciError> {
        self.send("ucinewgame")?;
        self.send("isready")?;
        self.wait_for(Reply::ReadyOk)?;
        Ok(())
    }

    /// Write one line to the engine's stdin.
    fn send(&mut self, line: &str) -> Result<(), UciError> {
        debug!(%line, "-> engine");
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Read lines until one parses to a non-[`Reply::Other`] reply.
    fn read_reply(&mut self) -> Result<Reply, UciError> {
        loop {
            let mut line = String::new();
            if self.stdout.read_line(&mut line)? == 0 {
                return Err(UciError::EngineClosed);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(line = %trimmed, "<- engine");
            match parse_reply(trimmed)? {
                Reply::Other => continue,
                reply => return Ok(reply),
            }
        }
    }

    /// Read replies until `expected` arrives, discarding everything else.
    fn wait_for(&mut self, expected: Reply) -> Result<(), UciError> {
        loop {
            if self.read_reply()? == expected {
                return Ok(());
            }
        }
    }
}

impl MoveOracle for UciProcess {
    fn best_move(&mut self, board: &Board) -> Result<Move, UciError> {
        self.send(&position_command(board))?;
        self.send(&go_command(self.movetime))?;
        loop {
            match self.read_reply()? {
                Reply::BestMove(mv) => return Ok(mv),
                Reply::NoMove => return Err(UciError::NoBestMove),
                _ => continue,
            }
        }
    }
}

impl Drop for UciProcess {
    fn drop(&mut self) {
        // Best effort: a dead engine already satisfies the intent.
        if let Err(error) = self.send("quit") {
            warn!(%error, "failed to send quit to engine");
        }
        if let Err(error) = self.child.wait() {
            warn!(%error, "failed to reap engine process");
        }
    }
}
