//! Attack queries: does some side attack a given square of the board?
//!
//! Ground: `examples/original_source/selftest/dodecahedron/movegen.cpp`
//! (`inline_is_attacked`).

use super::attack_tables::{
    castling_king_path, king_attacks, knight_attacks, nearest_blocker, pawn_attacked_by,
    DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use super::state::Board;
use super::types::{Color, Piece, Square};

/// Does `by_color` attack `square` in this position?
#[must_use]
pub fn is_attacked(board: &Board, by_color: Color, square: Square) -> bool {
    if board
        .piece_occupied(by_color, Piece::Pawn)
        .intersects(pawn_attacked_by(by_color, square))
    {
        return true;
    }
    if board
        .piece_occupied(by_color, Piece::Knight)
        .intersects(knight_attacks(square))
    {
        return true;
    }
    if board
        .piece_occupied(by_color, Piece::King)
        .intersects(king_attacks(square))
    {
        return true;
    }

    let occupied = board.occupied();
    let diagonal_sliders = board
        .piece_occupied(by_color, Piece::Bishop)
        .or(board.piece_occupied(by_color, Piece::Queen));
    for dir in DIAGONAL_DIRECTIONS {
        if let Some(blocker) = nearest_blocker(dir, square, occupied) {
            if diagonal_sliders.contains(blocker) {
                return true;
            }
        }
    }

    let orthogonal_sliders = board
        .piece_occupied(by_color, Piece::Rook)
        .or(board.piece_occupied(by_color, Piece::Queen));
    for dir in ORTHOGONAL_DIRECTIONS {
        if let Some(blocker) = nearest_blocker(dir, square, occupied) {
            if orthogonal_sliders.contains(blocker) {
                return true;
            }
        }
    }

    false
}

/// Is the side *not* to move's king attacked? Used after `make_move` to
/// decide whether the move that was just played was legal.
#[must_use]
pub fn is_opponent_king_attacked(board: &Board) -> bool {
    let opponent = board.side_to_move().opponent();
    is_attacked(board, board.side_to_move(), board.king_square(opponent))
}

/// Is the side to move currently in check?
#[must_use]
pub fn is_check(board: &Board) -> bool {
    let mover = board.side_to_move();
    is_attacked(board, mover.opponent(), board.king_square(mover))
}

/// Would castling on this side leave the king passing through or landing on
/// an attacked square? Used by the move generator; does not check that the
/// squares between king and rook are empty (that's `castling_empty_mask`).
pub(crate) fn castling_path_is_safe(board: &Board, color: Color, kingside: bool) -> bool {
    let attacker = color.opponent();
    castling_king_path(color, kingside)
        .iter()
        .all(|&sq| !is_attacked(board, attacker, sq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::builder::BoardBuilder;

    #[test]
    fn start_position_e4_is_not_attacked_by_black() {
        let board = Board::start_position();
        assert!(!is_attacked(&board, Color::Black, Square::new(4, 4)));
    }

    #[test]
    fn a_rook_attacks_along_its_open_file() {
        let board = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::Black, Piece::King)
            .piece(Square::new(7, 4), Color::White, Piece::King)
            .piece(Square::new(7, 0), Color::White, Piece::Rook)
            .build();
        assert!(is_attacked(&board, Color::White, Square::new(0, 0)));
    }

    #[test]
    fn a_blocked_rook_does_not_attack_past_the_blocker() {
        let board = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::Black, Piece::King)
            .piece(Square::new(7, 4), Color::White, Piece::King)
            .piece(Square::new(7, 0), Color::White, Piece::Rook)
            .piece(Square::new(4, 0), Color::Black, Piece::Pawn)
            .build();
        assert!(!is_attacked(&board, Color::White, Square::new(0, 0)));
        assert!(is_attacked(&board, Color::White, Square::new(4, 0)));
    }

    #[test]
    fn king_left_in_check_is_detected_after_make() {
        let mut board = Board::try_from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = board.parse_move("e1e2").unwrap();
        board.make_move(&mv);
        assert!(is_opponent_king_attacked(&board));
    }
}
