//! Pseudo-legal destination generation.
//!
//! Destinations respect piece geometry and board occupancy only: a ray
//! stops at the first occupied square (which is a capture when it holds the
//! other color), a step lands anywhere not occupied by a friendly piece,
//! and pawns push forward but capture diagonally. Checks, pins, castling,
//! en passant, and promotion are outside this module's contract; callers
//! that need strict legality filter on top.

use crate::board::Board;
use crate::color::Color;
use crate::error::InvalidSquare;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// File/rank deltas for the four orthogonal ray directions.
const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// File/rank deltas for the four diagonal ray directions.
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The eight king steps: every adjacent square.
const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Enumerate the pseudo-legal destinations for the piece on `origin`.
///
/// Returns `None` when the origin square is empty, and `Some` of the
/// reachable squares otherwise (possibly empty for a fully blocked piece).
/// Works for whichever color occupies the origin; the board's side to move
/// is not consulted. The order of the returned squares is unspecified.
pub fn destinations(board: &Board, origin: Square) -> Option<Vec<Square>> {
    let piece = board.piece_on(origin)?;
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, origin, piece.color, &mut out),
        PieceKind::Knight => step_targets(board, origin, piece.color, &KNIGHT_JUMPS, &mut out),
        PieceKind::Bishop => ray_targets(board, origin, piece.color, &DIAGONAL, &mut out),
        PieceKind::Rook => ray_targets(board, origin, piece.color, &ORTHOGONAL, &mut out),
        PieceKind::Queen => {
            ray_targets(board, origin, piece.color, &ORTHOGONAL, &mut out);
            ray_targets(board, origin, piece.color, &DIAGONAL, &mut out);
        }
        PieceKind::King => step_targets(board, origin, piece.color, &KING_STEPS, &mut out),
    }
    Some(out)
}

/// Label-accepting variant of [`destinations`] for presentation callers.
///
/// Rejects labels outside a1-h8 with [`InvalidSquare`] before the board is
/// consulted; a valid label behaves exactly like [`destinations`].
pub fn destinations_from_label(
    board: &Board,
    label: &str,
) -> Result<Option<Vec<Square>>, InvalidSquare> {
    let origin: Square = label.parse()?;
    Ok(destinations(board, origin))
}

/// Walk each direction until the board edge or the first occupied square.
///
/// Empty squares along the way are destinations. The occupied square that
/// ends a ray is a destination only when it holds the opposite color.
fn ray_targets(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            match board.color_on(next) {
                None => out.push(next),
                Some(occupant) => {
                    if occupant != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Collect each offset square that is on the board and not occupied by a
/// friendly piece.
fn step_targets(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(target) = origin.offset(file_delta, rank_delta)
            && board.color_on(target) != Some(color)
        {
            out.push(target);
        }
    }
}

/// Pawn destinations: forward pushes that need empty squares, plus diagonal
/// captures that need an enemy piece.
///
/// White pawns advance toward rank 8, Black pawns toward rank 1. The double
/// push is only offered from the pawn's starting rank and only when both
/// squares ahead are empty.
fn pawn_targets(board: &Board, origin: Square, color: Color, out: &mut Vec<Square>) {
    let (forward, start_rank) = match color {
        Color::White => (1, Rank::Rank2),
        Color::Black => (-1, Rank::Rank7),
    };

    if let Some(one_ahead) = origin.offset(0, forward)
        && board.is_empty(one_ahead)
    {
        out.push(one_ahead);
        if origin.rank() == start_rank
            && let Some(two_ahead) = origin.offset(0, 2 * forward)
            && board.is_empty(two_ahead)
        {
            out.push(two_ahead);
        }
    }

    for file_delta in [-1, 1] {
        if let Some(target) = origin.offset(file_delta, forward)
            && let Some(occupant) = board.color_on(target)
            && occupant != color
        {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{destinations, destinations_from_label};
    use crate::board::Board;
    use crate::error::InvalidSquare;
    use crate::piece::Piece;
    use crate::square::Square;

    /// Build an otherwise empty board holding the given pieces.
    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.place(sq, Some(piece));
        }
        board
    }

    /// Generate destinations and collect them into a set, panicking if the
    /// origin is empty.
    fn targets(board: &Board, origin: Square) -> HashSet<Square> {
        destinations(board, origin)
            .expect("origin square should be occupied")
            .into_iter()
            .collect()
    }

    /// Parse a list of labels into a set of squares.
    fn squares(labels: &[&str]) -> HashSet<Square> {
        labels
            .iter()
            .map(|label| label.parse().expect("test label should be valid"))
            .collect()
    }

    #[test]
    fn empty_origin_yields_none() {
        let board = Board::starting_position();
        assert_eq!(destinations(&board, Square::E4), None);
        assert_eq!(destinations(&board, Square::A6), None);
    }

    #[test]
    fn blocked_piece_yields_empty_list() {
        let board = Board::starting_position();
        // A rook boxed in by its own pawn and knight has no moves at all.
        let moves = destinations(&board, Square::A1).expect("a1 is occupied");
        assert!(moves.is_empty(), "expected no rook moves, got {moves:?}");
    }

    #[test]
    fn knight_from_starting_position() {
        let board = Board::starting_position();
        assert_eq!(targets(&board, Square::B1), squares(&["a3", "c3"]));
        assert_eq!(targets(&board, Square::G8), squares(&["f6", "h6"]));
    }

    #[test]
    fn knight_in_the_open_has_eight_jumps() {
        let board = board_with(&[(Square::D4, Piece::WHITE_KNIGHT)]);
        assert_eq!(
            targets(&board, Square::D4),
            squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
        );
    }

    #[test]
    fn knight_in_the_corner_has_two_jumps() {
        let board = board_with(&[(Square::A1, Piece::BLACK_KNIGHT)]);
        assert_eq!(targets(&board, Square::A1), squares(&["b3", "c2"]));
    }

    #[test]
    fn knight_jumps_over_blockers_but_skips_friends() {
        let board = board_with(&[
            (Square::D4, Piece::WHITE_KNIGHT),
            // Adjacent pieces are irrelevant to a knight.
            (Square::D5, Piece::BLACK_PAWN),
            (Square::E4, Piece::WHITE_PAWN),
            // One landing square friendly, one enemy.
            (Square::E6, Piece::WHITE_BISHOP),
            (Square::F3, Piece::BLACK_ROOK),
        ]);
        assert_eq!(
            targets(&board, Square::D4),
            squares(&["b3", "b5", "c2", "c6", "e2", "f3", "f5"])
        );
    }

    #[test]
    fn rook_ray_stops_on_enemy_and_includes_it() {
        let board = board_with(&[
            (Square::D4, Piece::WHITE_ROOK),
            (Square::D7, Piece::BLACK_PAWN),
        ]);
        assert_eq!(
            targets(&board, Square::D4),
            squares(&[
                "d5", "d6", "d7", // up to and including the capture
                "d3", "d2", "d1", // down
                "c4", "b4", "a4", // left
                "e4", "f4", "g4", "h4", // right
            ])
        );
    }

    #[test]
    fn bishop_ray_stops_before_friend() {
        let board = board_with(&[
            (Square::D4, Piece::WHITE_BISHOP),
            (Square::F6, Piece::WHITE_PAWN),
        ]);
        assert_eq!(
            targets(&board, Square::D4),
            squares(&["e5", "c5", "b6", "a7", "c3", "b2", "a1", "e3", "f2", "g1"])
        );
    }

    #[test]
    fn queen_covers_rook_and_bishop_lines() {
        let board = board_with(&[(Square::D4, Piece::WHITE_QUEEN)]);
        let queen = targets(&board, Square::D4);
        assert_eq!(queen.len(), 27);

        let rook_board = board_with(&[(Square::D4, Piece::WHITE_ROOK)]);
        let bishop_board = board_with(&[(Square::D4, Piece::WHITE_BISHOP)]);
        let mut union = targets(&rook_board, Square::D4);
        union.extend(targets(&bishop_board, Square::D4));
        assert_eq!(queen, union);
    }

    #[test]
    fn king_steps_to_adjacent_squares() {
        let board = board_with(&[(Square::D4, Piece::BLACK_KING)]);
        assert_eq!(
            targets(&board, Square::D4),
            squares(&["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"])
        );
    }

    #[test]
    fn king_respects_friends_and_captures_enemies() {
        let board = board_with(&[
            (Square::D4, Piece::WHITE_KING),
            (Square::D5, Piece::WHITE_PAWN),
            (Square::E4, Piece::BLACK_PAWN),
        ]);
        assert_eq!(
            targets(&board, Square::D4),
            squares(&["c3", "c4", "c5", "d3", "e3", "e4", "e5"])
        );
    }

    #[test]
    fn king_boxed_in_at_start() {
        let board = Board::starting_position();
        let moves = destinations(&board, Square::E1).expect("e1 is occupied");
        assert!(moves.is_empty(), "expected no king moves, got {moves:?}");
    }

    #[test]
    fn white_pawn_single_and_double_push() {
        let board = Board::starting_position();
        assert_eq!(targets(&board, Square::E2), squares(&["e3", "e4"]));
    }

    #[test]
    fn black_pawn_pushes_toward_rank_one() {
        let board = Board::starting_position();
        assert_eq!(targets(&board, Square::E7), squares(&["e6", "e5"]));
    }

    #[test]
    fn pawn_off_its_starting_rank_pushes_one() {
        let board = board_with(&[(Square::E3, Piece::WHITE_PAWN)]);
        assert_eq!(targets(&board, Square::E3), squares(&["e4"]));
    }

    #[test]
    fn pawn_blocked_directly_ahead_cannot_push() {
        // The blocker stops the push whatever its color.
        for blocker in [Piece::BLACK_ROOK, Piece::WHITE_ROOK] {
            let board = board_with(&[(Square::E2, Piece::WHITE_PAWN), (Square::E3, blocker)]);
            let moves = destinations(&board, Square::E2).expect("e2 is occupied");
            assert!(moves.is_empty(), "expected no pawn moves, got {moves:?}");
        }
    }

    #[test]
    fn pawn_double_push_blocked_on_the_far_square() {
        let board = board_with(&[
            (Square::E2, Piece::WHITE_PAWN),
            (Square::E4, Piece::BLACK_KNIGHT),
        ]);
        assert_eq!(targets(&board, Square::E2), squares(&["e3"]));
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let board = board_with(&[
            (Square::E4, Piece::WHITE_PAWN),
            (Square::D5, Piece::BLACK_PAWN),
            (Square::F5, Piece::WHITE_PAWN),
        ]);
        assert_eq!(targets(&board, Square::E4), squares(&["e5", "d5"]));
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let board = board_with(&[
            (Square::E4, Piece::WHITE_PAWN),
            (Square::E5, Piece::BLACK_PAWN),
        ]);
        let moves = destinations(&board, Square::E4).expect("e4 is occupied");
        assert!(moves.is_empty(), "expected no pawn moves, got {moves:?}");
    }

    #[test]
    fn pawn_on_the_edge_does_not_wrap() {
        let board = board_with(&[
            (Square::A4, Piece::WHITE_PAWN),
            // An enemy on h5 must stay out of reach of an a-file pawn.
            (Square::H5, Piece::BLACK_PAWN),
            (Square::B5, Piece::BLACK_PAWN),
        ]);
        assert_eq!(targets(&board, Square::A4), squares(&["a5", "b5"]));
    }

    #[test]
    fn black_pawn_captures_toward_rank_one() {
        let board = board_with(&[
            (Square::D5, Piece::BLACK_PAWN),
            (Square::C4, Piece::WHITE_KNIGHT),
            (Square::E4, Piece::BLACK_KNIGHT),
        ]);
        assert_eq!(targets(&board, Square::D5), squares(&["d4", "c4"]));
    }

    #[test]
    fn generator_ignores_side_to_move() {
        let board = Board::starting_position();
        // White to move, but Black's pieces still report destinations.
        assert_eq!(targets(&board, Square::B8), squares(&["a6", "c6"]));
    }

    #[test]
    fn flipping_the_board_changes_nothing() {
        let mut board = Board::starting_position();
        let before = targets(&board, Square::G1);
        board.flip();
        assert_eq!(targets(&board, Square::G1), before);
    }

    #[test]
    fn label_lookup_accepts_valid_labels() {
        let board = Board::starting_position();
        let moves = destinations_from_label(&board, "e2")
            .expect("label is valid")
            .expect("e2 is occupied");
        assert_eq!(moves.len(), 2);

        // Valid label, empty square.
        assert_eq!(destinations_from_label(&board, "e4"), Ok(None));
    }

    #[test]
    fn label_lookup_rejects_bad_labels() {
        let board = Board::starting_position();
        for label in ["z9", "e9", "i2", "", "e22"] {
            assert_eq!(
                destinations_from_label(&board, label),
                Err(InvalidSquare::new(label)),
                "label {label:?} should be rejected"
            );
        }
    }
}
