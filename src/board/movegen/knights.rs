//! Knight pseudo-legal moves.

use super::emit;
use crate::board::attack_tables::knight_attacks;
use crate::board::state::Board;
use crate::board::types::{Color, Move, Square};

pub(crate) fn generate(board: &Board, color: Color, from: Square, buf: &mut [Move], idx: &mut usize) {
    let own = board.color_occupied(color);
    let targets = knight_attacks(from).and(own.not());
    for to in targets.iter() {
        emit(buf, idx, Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::MAX_MOVES;

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let board = crate::board::builder::BoardBuilder::new()
            .piece(Square::new(0, 4), Color::Black, crate::board::types::Piece::King)
            .piece(Square::new(7, 4), Color::White, crate::board::types::Piece::King)
            .piece(Square::new(7, 7), Color::White, crate::board::types::Piece::Knight)
            .build();
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        let mut idx = 0;
        generate(&board, Color::White, Square::new(7, 7), &mut buf, &mut idx);
        assert_eq!(idx, 2);
    }

    #[test]
    fn knight_cannot_capture_its_own_piece() {
        let board = crate::board::builder::BoardBuilder::new()
            .piece(Square::new(0, 4), Color::Black, crate::board::types::Piece::King)
            .piece(Square::new(7, 4), Color::White, crate::board::types::Piece::King)
            .piece(Square::new(4, 4), Color::White, crate::board::types::Piece::Knight)
            .piece(Square::new(2, 3), Color::White, crate::board::types::Piece::Pawn)
            .build();
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        let mut idx = 0;
        generate(&board, Color::White, Square::new(4, 4), &mut buf, &mut idx);
        assert!(!buf[..idx].iter().any(|m| m.to == Square::new(2, 3)));
    }
}
