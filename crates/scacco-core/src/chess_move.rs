//! Chess move representation: origin/destination pairs and history records.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;
use crate::piece::Piece;
use crate::square::Square;

/// A move as an origin/destination pair.
///
/// Carries no piece or legality information; the board decides what the
/// move means when it is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Create a move from origin and destination squares.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation ("e2e4") into a move.
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        // The two-byte slices below are only safe to take on ASCII input.
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::WrongShape {
                text: s.to_string(),
            });
        }
        let from = s[..2].parse()?;
        let to = s[2..].parse()?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// A move that has been applied to a board: the moving piece plus its
/// origin and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl PlayedMove {
    /// Record `piece` moving from `from` to `to`.
    #[inline]
    pub const fn new(piece: Piece, from: Square, to: Square) -> PlayedMove {
        PlayedMove { piece, from, to }
    }

    /// Return the origin/destination pair without the piece.
    #[inline]
    pub const fn as_move(self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for PlayedMove {
    /// Format as piece letter plus coordinates, e.g. "Pe2e4" or "ng8f6".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece, self.from, self.to)
    }
}
