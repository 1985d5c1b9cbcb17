//! Board state: piece placement, side to move, display orientation, and
//! played-move history.

use std::fmt;

use tracing::debug;

use crate::chess_move::{Move, PlayedMove};
use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Complete state for one game session.
///
/// Every square holds at most one piece; an empty square is `None`, never a
/// sentinel. The orientation flag feeds the display helpers only: squares
/// keep their fixed LERF indices whichever way the board is shown.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// One cell per square, indexed by [`Square::index`].
    squares: [Option<Piece>; Square::COUNT],
    /// The side expected to move next. Advisory: [`Board::play`] applies
    /// moves for either color without checking it.
    side_to_move: Color,
    /// `true` when the display helpers show rank 1 at the top.
    flipped: bool,
    /// Every move accepted since the last reset, in play order.
    history: Vec<PlayedMove>,
}

impl Board {
    /// Create a board with no pieces, White to move, standard orientation.
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            flipped: false,
            history: Vec::new(),
        }
    }

    /// Create a board with the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.place_starting_pieces();
        board
    }

    /// Place the 32 starting pieces on their home squares.
    fn place_starting_pieces(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            self.place(Square::new(Rank::Rank1, file), Some(Piece::new(Color::White, kind)));
            self.place(Square::new(Rank::Rank2, file), Some(Piece::WHITE_PAWN));
            self.place(Square::new(Rank::Rank7, file), Some(Piece::BLACK_PAWN));
            self.place(Square::new(Rank::Rank8, file), Some(Piece::new(Color::Black, kind)));
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(|piece| piece.color)
    }

    /// Return `true` if the given square has no piece on it.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_on(sq).is_none()
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_on(sq).is_some()
    }

    /// Return the side expected to move next.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return `true` if the display orientation is flipped (rank 1 on top).
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Return every move accepted since the last reset, in play order.
    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Fullmove number as FEN counts it: 1 on a fresh board, then one more
    /// after each Black move.
    #[inline]
    pub fn fullmove_number(&self) -> usize {
        self.history.len() / 2 + 1
    }

    /// Overwrite a cell with a piece, or clear it with `None`.
    ///
    /// The raw cell write: position setup and move application both go
    /// through here. Whatever occupied the square before is discarded.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Move the piece on `mv.from` to `mv.to`, capturing by overwrite.
    ///
    /// Appends the move to the history and toggles the side to move.
    /// Returns `None` and leaves the board untouched when the origin square
    /// is empty. No legality check is made beyond that: callers are expected
    /// to pick destinations from the generator.
    pub fn play(&mut self, mv: Move) -> Option<PlayedMove> {
        let piece = self.piece_on(mv.from)?;
        self.place(mv.from, None);
        self.place(mv.to, Some(piece));
        self.side_to_move = self.side_to_move.opposite();
        let played = PlayedMove::new(piece, mv.from, mv.to);
        self.history.push(played);
        debug!(played = %played, side_to_move = %self.side_to_move, "move applied");
        Some(played)
    }

    /// Restore the standard starting position.
    ///
    /// Un-flips the board first when needed, then rebuilds the starting
    /// placement, sets White to move, and clears the history, so reset
    /// always lands on the same canonical state.
    pub fn reset(&mut self) {
        if self.flipped {
            self.flip();
        }
        self.squares = [None; Square::COUNT];
        self.side_to_move = Color::White;
        self.history.clear();
        self.place_starting_pieces();
        debug!("board reset to the starting position");
    }

    /// Toggle the display orientation.
    ///
    /// Presentation only: square coordinates, stored pieces, and generated
    /// destinations are identical before and after.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
        debug!(flipped = self.flipped, "board orientation toggled");
    }

    /// Ranks in top-to-bottom display order for the current orientation.
    pub fn display_ranks(&self) -> impl Iterator<Item = Rank> {
        let mut ranks = Rank::ALL;
        if !self.flipped {
            ranks.reverse();
        }
        ranks.into_iter()
    }

    /// Files in left-to-right display order for the current orientation.
    pub fn display_files(&self) -> impl Iterator<Item = File> {
        let mut files = File::ALL;
        if self.flipped {
            files.reverse();
        }
        files.into_iter()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Return a printable, numbered log of the move history.
    pub fn history_log(&self) -> HistoryLog<'_> {
        HistoryLog(&self.history)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
///
/// Rows and edge labels follow the board's display orientation.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in board.display_ranks() {
            write!(f, "{rank}  ")?;
            for (i, file) in board.display_files().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match board.piece_on(Square::new(rank, file)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in board.display_files() {
            write!(f, " {file}")?;
        }
        Ok(())
    }
}

/// Wrapper for printing a move history as numbered lines ("1. Pe2e4").
pub struct HistoryLog<'a>(&'a [PlayedMove]);

impl fmt::Display for HistoryLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, played) in self.0.iter().enumerate() {
            writeln!(f, "{}. {}", number + 1, played)?;
        }
        Ok(())
    }
}
