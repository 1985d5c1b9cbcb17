//! Errors from driving an external UCI engine.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while spawning or talking to an engine process.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The engine binary could not be launched.
    #[error("failed to launch engine {path:?}: {source}")]
    Spawn {
        /// Path to the engine binary.
        path: PathBuf,
        /// The underlying launch error.
        source: io::Error,
    },

    /// Reading from or writing to the engine pipes failed.
    #[error("engine I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// The engine closed its output stream while a reply was expected.
    #[error("engine closed its output stream")]
    EngineClosed,

    /// The engine answered `bestmove (none)`: it has no move to suggest.
    #[error("engine has no move to suggest")]
    NoBestMove,

    /// A `bestmove` reply carried something that is not a move.
    #[error("malformed bestmove reply: {line:?}")]
    MalformedBestMove {
        /// The reply line as received.
        line: String,
    },
}
