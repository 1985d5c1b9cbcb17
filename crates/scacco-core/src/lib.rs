//! Core chess types: board state, move records, and pseudo-legal move
//! generation.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod movegen;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub use board::{Board, HistoryLog, PrettyBoard};
pub use chess_move::{Move, PlayedMove};
pub use color::Color;
pub use error::{InvalidSquare, MoveParseError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use movegen::{destinations, destinations_from_label};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
