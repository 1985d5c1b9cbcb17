//! FEN serialization of board state.
//!
//! Output only: positions are built through [`Board::place`] and
//! [`Board::play`], then serialized here for anything that speaks FEN, UCI
//! engines above all. Castling rights and en passant are always reported
//! absent because the board does not track them; claiming rights it cannot
//! apply would invite engine replies it cannot play. The halfmove clock is
//! pinned to zero for the same reason, and the fullmove number is derived
//! from the history length.

use std::fmt;

use crate::board::Board;
use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// FEN for the standard starting position, as this crate serializes it.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Placement runs rank 8 down to rank 1 regardless of the display
        // orientation.
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_run = 0;
            for file in File::ALL {
                match self.piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }
        write!(f, " {} - - 0 {}", self.side_to_move(), self.fullmove_number())
    }
}
