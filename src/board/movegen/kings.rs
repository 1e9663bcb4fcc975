//! King pseudo-legal moves, including castling.

use super::emit;
use crate::board::attack_tables::{castling_empty_mask, king_attacks};
use crate::board::attacks::castling_path_is_safe;
use crate::board::state::Board;
use crate::board::types::{Color, Move, Square};

pub(crate) fn generate(board: &Board, color: Color, from: Square, buf: &mut [Move], idx: &mut usize) {
    let own = board.color_occupied(color);
    let targets = king_attacks(from).and(own.not());
    for to in targets.iter() {
        emit(buf, idx, Move::new(from, to));
    }

    let back_row = if color == Color::White { 7 } else { 0 };
    if from != Square::new(back_row, 4) {
        return;
    }

    let rights = board.castling_rights();
    let occupied = board.occupied();

    if rights.has(color, true)
        && occupied.is_disjoint(castling_empty_mask(color, true))
        && castling_path_is_safe(board, color, true)
    {
        emit(buf, idx, Move::castle_kingside(from, Square::new(back_row, 6)));
    }
    if rights.has(color, false)
        && occupied.is_disjoint(castling_empty_mask(color, false))
        && castling_path_is_safe(board, color, false)
    {
        emit(buf, idx, Move::castle_queenside(from, Square::new(back_row, 2)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::state::Board;
    use crate::board::types::MAX_MOVES;

    fn generated_texts(board: &Board) -> Vec<String> {
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        let count = crate::board::movegen::generate_moves(board, &mut buf);
        buf[..count].iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn kingside_castle_is_generated_when_path_is_clear_and_safe() {
        let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(generated_texts(&board).contains(&"e1g1".to_string()));
    }

    #[test]
    fn castling_is_blocked_when_the_crossed_square_is_attacked() {
        let board = Board::try_from_fen("r3k2r/8/8/8/8/5b2/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(!generated_texts(&board).contains(&"e1g1".to_string()));
    }

    #[test]
    fn castling_is_blocked_when_a_between_square_is_occupied() {
        let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1").unwrap();
        assert!(!generated_texts(&board).contains(&"e1g1".to_string()));
    }
}
