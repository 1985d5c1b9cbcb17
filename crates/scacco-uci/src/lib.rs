//! UCI client plumbing: delegate opponent play to an external engine.

pub mod client;
pub mod command;
pub mod error;

pub use client::{MoveOracle, UciProcess};
pub use command::{go_command, parse_reply, position_command, Reply};
pub use error::UciError;
