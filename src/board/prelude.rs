//! Convenient re-exports for downstream crates (search, UCI adapters).
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let board = Board::start_position();
//! let mut buf = [Move::end_of_list(); MAX_MOVES];
//! let count = generate_moves(&board, &mut buf);
//! assert_eq!(count, 20);
//! ```

pub use super::{
    generate_moves, is_attacked, is_check, is_opponent_king_attacked, Bitboard, Board,
    BoardBuilder, CastlingRights, Cell, Color, FenError, Move, MoveFlag, MoveParseError, Piece,
    Square, SquareError, MAX_MOVES,
};
