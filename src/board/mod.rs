//! Chess board representation, pseudo-legal move generation, and
//! make/unmake.
//!
//! Built around three representations kept in lockstep by a single
//! mutator ([`state::Board::change_piece`]): a mailbox array, per-(color,
//! kind) piece lists, and bitboards. See [`state::Board`] for the full
//! invariant list.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, MAX_MOVES, Move};
//!
//! let board = Board::start_position();
//! let mut buf = [Move::end_of_list(); MAX_MOVES];
//! let count = chess_core::board::generate_moves(&board, &mut buf);
//! assert_eq!(count, 20);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

pub use attacks::{is_attacked, is_check, is_opponent_king_attacked};
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use movegen::generate_moves;
pub use state::{Board, MAX_PIECES_PER_KIND};
pub use types::{Bitboard, CastlingRights, Cell, Color, Move, MoveFlag, Piece, Square, MAX_MOVES};
