//! Precomputed attack tables, built once and shared read-only.
//!
//! Ground: `examples/original_source/selftest/dodecahedron/bitboard.cpp`
//! (`gen_bitboards()`), reshaped into Rust types. Sliding-piece attacks are
//! resolved by scanning `RayTables::cells` for the nearest occupied square
//! rather than via magic bitboards or Hyperbola Quintessence — acceptable
//! here since this core favors simplicity over the last few percent of
//! raw sliding-attack throughput.

mod tables;

use once_cell::sync::Lazy;

pub(crate) use tables::{Direction, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

use crate::board::types::{Bitboard, Color, Square};

pub(crate) static TABLES: Lazy<tables::Tables> = Lazy::new(tables::build_tables);

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    TABLES.knight[sq.index()]
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    TABLES.king[sq.index()]
}

#[inline]
pub(crate) fn pawn_single_push(color: Color, sq: Square) -> Bitboard {
    TABLES.pawns.single_push[color.index()][sq.index()]
}

#[inline]
pub(crate) fn pawn_double_push(color: Color, sq: Square) -> Bitboard {
    TABLES.pawns.double_push[color.index()][sq.index()]
}

#[inline]
pub(crate) fn pawn_capture_left(color: Color, sq: Square) -> Bitboard {
    TABLES.pawns.capture_left[color.index()][sq.index()]
}

#[inline]
pub(crate) fn pawn_capture_right(color: Color, sq: Square) -> Bitboard {
    TABLES.pawns.capture_right[color.index()][sq.index()]
}

/// Squares a pawn of `color` would need to occupy to attack `sq`.
#[inline]
pub(crate) fn pawn_attacked_by(color: Color, sq: Square) -> Bitboard {
    TABLES.pawns.attacked_by[color.index()][sq.index()]
}

#[inline]
pub(crate) fn pawn_ep_src(color: Color, file: usize) -> Bitboard {
    TABLES.pawns.ep_src[color.index()][file]
}

#[inline]
pub(crate) fn pawn_ep_dest(color: Color, file: usize) -> Square {
    TABLES.pawns.ep_dest[color.index()][file]
        .iter()
        .next()
        .expect("ep destination table entry is always a single square")
}

#[inline]
pub(crate) fn castling_empty_mask(color: Color, kingside: bool) -> Bitboard {
    TABLES.castling.empty[color.index()][usize::from(kingside)]
}

#[inline]
pub(crate) fn castling_king_path(color: Color, kingside: bool) -> [Square; 3] {
    TABLES.castling.king_path[color.index()][usize::from(kingside)]
}

/// Ray-scan nearest blocker in `dir` from `from`, given the full-board
/// occupancy. Returns `None` if the ray runs off the board with no
/// occupied square.
#[inline]
pub(crate) fn nearest_blocker(dir: Direction, from: Square, occupied: Bitboard) -> Option<Square> {
    let d = dir.index();
    let sq = from.index();
    let len = TABLES.rays.len[d][sq] as usize;
    for cell in TABLES.rays.cells[d][sq].iter().take(len) {
        if occupied.contains(*cell) {
            return Some(*cell);
        }
    }
    None
}

/// Every square a slider on `from` could reach in `dir` before (and
/// including) the nearest blocker, given full-board occupancy.
#[inline]
pub(crate) fn ray_reach(dir: Direction, from: Square, occupied: Bitboard) -> Bitboard {
    let d = dir.index();
    let sq = from.index();
    let len = TABLES.rays.len[d][sq] as usize;
    let mut reach = Bitboard::EMPTY;
    for cell in TABLES.rays.cells[d][sq].iter().take(len) {
        reach = reach.or(Bitboard::from_square(*cell));
        if occupied.contains(*cell) {
            break;
        }
    }
    reach
}
