//! Pawn pseudo-legal moves: single/double push, diagonal captures,
//! en passant, and promotion branching.

use super::emit;
use crate::board::attack_tables::{
    pawn_capture_left, pawn_capture_right, pawn_double_push, pawn_ep_dest, pawn_ep_src,
    pawn_single_push,
};
use crate::board::state::Board;
use crate::board::types::{Color, Move, Square, PROMOTION_PIECES};

fn is_promotion_target(color: Color, to: Square) -> bool {
    match color {
        Color::White => to.row() == 0,
        Color::Black => to.row() == 7,
    }
}

fn emit_pawn_target(color: Color, from: Square, to: Square, buf: &mut [Move], idx: &mut usize) {
    if is_promotion_target(color, to) {
        for &promotion in &PROMOTION_PIECES {
            emit(buf, idx, Move::with_promotion(from, to, promotion));
        }
    } else {
        emit(buf, idx, Move::new(from, to));
    }
}

pub(crate) fn generate(board: &Board, color: Color, from: Square, buf: &mut [Move], idx: &mut usize) {
    let occupied = board.occupied();
    let enemy = board.color_occupied(color.opponent());

    let single = pawn_single_push(color, from);
    if !single.is_empty() && !occupied.intersects(single) {
        let to = single.iter().next().expect("single push target exists");
        if is_promotion_target(color, to) {
            emit_pawn_target(color, from, to, buf, idx);
        } else {
            emit(buf, idx, Move::new(from, to));

            let double = pawn_double_push(color, from);
            if !double.is_empty() && !occupied.intersects(double) {
                let to2 = double.iter().next().expect("double push target exists");
                emit(buf, idx, Move::double_push(from, to2));
            }
        }
    }

    for captures in [pawn_capture_left(color, from), pawn_capture_right(color, from)] {
        if captures.is_empty() {
            continue;
        }
        let to = captures.iter().next().expect("capture target exists");
        if enemy.contains(to) {
            emit_pawn_target(color, from, to, buf, idx);
        }
    }

    if let Some(file) = board.ep_file() {
        if pawn_ep_src(color, file).contains(from) {
            let to = pawn_ep_dest(color, file);
            emit(buf, idx, Move::en_passant(from, to));
        }
    }
}
