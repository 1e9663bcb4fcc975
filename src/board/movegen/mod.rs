//! Pseudo-legal move generation.
//!
//! Ground: `examples/original_source/selftest/dodecahedron/movegen.cpp`
//! (`gen_moves`). One generator function per piece kind, each walking that
//! kind's piece list and writing candidate moves straight into the
//! caller's buffer — no intermediate allocation, matching the reference
//! generator's array-of-moves convention.
//!
//! Legality (king not left in check) is deliberately not checked here; see
//! [`crate::board::attacks::is_opponent_king_attacked`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Board;
use super::types::{Move, Piece};

/// Write every pseudo-legal move for `board`'s side to move into `buf`,
/// returning the count written. If there is room, an [`Move::end_of_list`]
/// sentinel is written one slot past the last real move, so a caller can
/// walk the buffer linearly without tracking the count separately.
pub fn generate_moves(board: &Board, buf: &mut [Move]) -> usize {
    let color = board.side_to_move();
    let mut idx = 0usize;

    for &from in board.piece_squares(color, Piece::Pawn) {
        pawns::generate(board, color, from, buf, &mut idx);
    }
    for &from in board.piece_squares(color, Piece::Knight) {
        knights::generate(board, color, from, buf, &mut idx);
    }
    for &from in board.piece_squares(color, Piece::Bishop) {
        sliders::generate_bishop(board, color, from, buf, &mut idx);
    }
    for &from in board.piece_squares(color, Piece::Rook) {
        sliders::generate_rook(board, color, from, buf, &mut idx);
    }
    for &from in board.piece_squares(color, Piece::Queen) {
        sliders::generate_queen(board, color, from, buf, &mut idx);
    }
    for &from in board.piece_squares(color, Piece::King) {
        kings::generate(board, color, from, buf, &mut idx);
    }

    if idx < buf.len() {
        buf[idx] = Move::end_of_list();
    }
    idx
}

/// Append `mv` to `buf` at `*idx`, advancing `*idx`. A buffer overflow is a
/// programmer error (the caller under-sized the buffer below
/// [`super::types::MAX_MOVES`]); debug builds assert, release builds drop
/// the overflowing move.
pub(crate) fn emit(buf: &mut [Move], idx: &mut usize, mv: Move) {
    debug_assert!(*idx < buf.len(), "move buffer overflow");
    if *idx < buf.len() {
        buf[*idx] = mv;
    }
    *idx += 1;
}
