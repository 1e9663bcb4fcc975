//! `chess_core`: a chess board representation and pseudo-legal move
//! generator with matching make/unmake primitives and attack detection.
//!
//! This crate answers two questions fast: "what moves may be played?" and
//! "is this square attacked by that side?" It is the substrate search,
//! evaluation, and UCI front-ends are built on, not an engine itself —
//! search, evaluation, and protocol adapters are external collaborators
//! out of scope here.
//!
//! Move generation is **pseudo-legal**: a generated move may leave its own
//! king in check. Callers filter illegal moves after [`board::Board::make_move`]
//! with [`board::is_opponent_king_attacked`].

pub mod board;

pub use board::{
    generate_moves, Bitboard, Board, BoardBuilder, CastlingRights, Cell, Color, FenError, Move,
    MoveFlag, MoveParseError, Piece, Square, SquareError, UnmakeInfo, MAX_MOVES,
};
