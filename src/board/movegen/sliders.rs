//! Bishop/rook/queen pseudo-legal moves via the nearest-blocker ray scan.

use super::emit;
use crate::board::attack_tables::{ray_reach, Direction, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::board::state::Board;
use crate::board::types::{Color, Move, Square};

fn generate_sliding(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[Direction],
    buf: &mut [Move],
    idx: &mut usize,
) {
    let occupied = board.occupied();
    let own = board.color_occupied(color);
    for &dir in directions {
        let reach = ray_reach(dir, from, occupied);
        for to in reach.iter() {
            if own.contains(to) {
                continue;
            }
            emit(buf, idx, Move::new(from, to));
        }
    }
}

pub(crate) fn generate_bishop(board: &Board, color: Color, from: Square, buf: &mut [Move], idx: &mut usize) {
    generate_sliding(board, color, from, &DIAGONAL_DIRECTIONS, buf, idx);
}

pub(crate) fn generate_rook(board: &Board, color: Color, from: Square, buf: &mut [Move], idx: &mut usize) {
    generate_sliding(board, color, from, &ORTHOGONAL_DIRECTIONS, buf, idx);
}

pub(crate) fn generate_queen(board: &Board, color: Color, from: Square, buf: &mut [Move], idx: &mut usize) {
    generate_sliding(board, color, from, &ALL_DIRECTIONS, buf, idx);
}
