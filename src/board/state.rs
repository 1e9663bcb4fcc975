//! The board itself: mailbox, piece lists, and redundant bitboards kept in
//! lockstep through a single mutator.
//!
//! Ground: `examples/original_source/selftest/dodecahedron/board.h` and
//! `board.cpp` (`BOARD`, `recalc_board`, `validate_board`, `board_ok`).

use std::fmt;

use super::error::FenError;
use super::types::{Bitboard, CastlingRights, Cell, Color, Piece, Square};

/// Upper bound on how many of one piece kind a side can have on the board
/// at once. Eight pawns can each under-promote, so the true ceiling for a
/// single kind is higher than a standard position ever needs; 16 is the
/// same generous bound the reference implementation uses.
pub const MAX_PIECES_PER_KIND: usize = 16;

/// A chess position: mailbox board, per-(color, piece) piece lists, and
/// redundant bitboards, all kept consistent by [`Board::change_piece`].
#[derive(Clone)]
pub struct Board {
    mailbox: [Cell; 64],
    piece_squares: [[[Square; MAX_PIECES_PER_KIND]; 6]; 2],
    piece_count: [[u8; 6]; 2],
    /// For an occupied square, its index within the owning piece list.
    /// Meaningless (and unread) for empty squares.
    list_index: [u8; 64],
    bb_piece: [[Bitboard; 6]; 2],
    bb_color: [Bitboard; 2],
    bb_all: Bitboard,
    side_to_move: Color,
    castling: CastlingRights,
    /// File of a pawn that just double-pushed, if an en passant capture is
    /// available this move. The rank is implied by `side_to_move`.
    ep_file: Option<u8>,
    halfmove_clock: u32,
}

impl Board {
    /// An empty board: no pieces, White to move, no castling rights, no
    /// en passant target, halfmove clock at zero.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            mailbox: [Cell::Empty; 64],
            piece_squares: [[[Square::from_index(0); MAX_PIECES_PER_KIND]; 6]; 2],
            piece_count: [[0; 6]; 2],
            list_index: [0; 64],
            bb_piece: [[Bitboard::EMPTY; 6]; 2],
            bb_color: [Bitboard::EMPTY; 2],
            bb_all: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            ep_file: None,
            halfmove_clock: 0,
        }
    }

    /// The standard chess starting position.
    #[must_use]
    pub fn start_position() -> Self {
        let mut board = Board::empty();
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.change_piece(Square::new(7, col), Cell::Occupied(Color::White, piece));
            board.change_piece(Square::new(0, col), Cell::Occupied(Color::Black, piece));
        }
        for col in 0..8 {
            board.change_piece(Square::new(6, col), Cell::Occupied(Color::White, Piece::Pawn));
            board.change_piece(Square::new(1, col), Cell::Occupied(Color::Black, Piece::Pawn));
        }
        board.side_to_move = Color::White;
        board.castling = CastlingRights::all();
        board
    }

    /// Reset to the empty board in place.
    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.mailbox[sq.index()]
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub(crate) fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    #[inline]
    #[must_use]
    pub fn ep_file(&self) -> Option<usize> {
        self.ep_file.map(|f| f as usize)
    }

    pub(crate) fn set_ep_file(&mut self, file: Option<usize>) {
        self.ep_file = file.map(|f| f as u8);
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> Bitboard {
        self.bb_all
    }

    #[inline]
    #[must_use]
    pub const fn color_occupied(&self, color: Color) -> Bitboard {
        self.bb_color[color.index()]
    }

    #[inline]
    #[must_use]
    pub const fn piece_occupied(&self, color: Color, piece: Piece) -> Bitboard {
        self.bb_piece[color.index()][piece.index()]
    }

    /// Squares currently holding a piece of this kind and color.
    #[inline]
    #[must_use]
    pub fn piece_squares(&self, color: Color, piece: Piece) -> &[Square] {
        let count = self.piece_count[color.index()][piece.index()] as usize;
        &self.piece_squares[color.index()][piece.index()][..count]
    }

    /// The square holding `color`'s king.
    ///
    /// # Panics
    /// Panics if `color` has no king, which the position invariants never
    /// allow for a board reachable through `change_piece`/FEN parsing.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.piece_squares(color, Piece::King)[0]
    }

    /// Replace whatever is on `sq` with `new`, keeping the mailbox, piece
    /// lists, and bitboards in lockstep. Returns the previous contents.
    ///
    /// This is the single mutation point every other operation (FEN
    /// parsing, the builder, make/unmake) goes through.
    pub(crate) fn change_piece(&mut self, sq: Square, new: Cell) -> Cell {
        let old = self.mailbox[sq.index()];
        if let Some((color, piece)) = old.piece() {
            self.remove_from_piece_list(color, piece, sq);
            self.bb_piece[color.index()][piece.index()].clear(sq);
            self.bb_color[color.index()].clear(sq);
            self.bb_all.clear(sq);
        }
        self.mailbox[sq.index()] = new;
        if let Some((color, piece)) = new.piece() {
            self.add_to_piece_list(color, piece, sq);
            self.bb_piece[color.index()][piece.index()].set(sq);
            self.bb_color[color.index()].set(sq);
            self.bb_all.set(sq);
        }
        old
    }

    fn remove_from_piece_list(&mut self, color: Color, piece: Piece, sq: Square) {
        let ci = color.index();
        let pi = piece.index();
        let idx = self.list_index[sq.index()] as usize;
        let count = self.piece_count[ci][pi] as usize;
        debug_assert!(count > 0, "removing from an empty piece list");
        let last = self.piece_squares[ci][pi][count - 1];
        self.piece_squares[ci][pi][idx] = last;
        self.list_index[last.index()] = idx as u8;
        self.piece_count[ci][pi] -= 1;
    }

    fn add_to_piece_list(&mut self, color: Color, piece: Piece, sq: Square) {
        let ci = color.index();
        let pi = piece.index();
        let count = self.piece_count[ci][pi] as usize;
        debug_assert!(
            count < MAX_PIECES_PER_KIND,
            "piece list for this color/kind is full"
        );
        self.piece_squares[ci][pi][count] = sq;
        self.list_index[sq.index()] = count as u8;
        self.piece_count[ci][pi] += 1;
    }

    /// Rebuild piece lists and bitboards from the mailbox alone. Used after
    /// bulk mailbox edits where going through `change_piece` square by
    /// square would be wasteful (FEN parsing, the builder).
    pub(crate) fn recalc_redundant(&mut self) {
        self.piece_count = [[0; 6]; 2];
        self.bb_piece = [[Bitboard::EMPTY; 6]; 2];
        self.bb_color = [Bitboard::EMPTY; 2];
        self.bb_all = Bitboard::EMPTY;

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if let Some((color, piece)) = self.mailbox[idx].piece() {
                self.add_to_piece_list(color, piece, sq);
                self.bb_piece[color.index()][piece.index()].set(sq);
                self.bb_color[color.index()].set(sq);
                self.bb_all.set(sq);
            }
        }
    }

    /// Clear castling rights or the en passant file when the position no
    /// longer supports them (missing king/rook, no pawn able to capture).
    /// Called after any bulk load (FEN, builder) to keep state internally
    /// consistent even when the caller supplied contradictory input.
    pub fn validate(&mut self) -> Result<(), FenError> {
        let mut white_kings = 0;
        let mut black_kings = 0;
        for idx in 0..64 {
            if let Some((color, Piece::King)) = self.mailbox[idx].piece() {
                match color {
                    Color::White => white_kings += 1,
                    Color::Black => black_kings += 1,
                }
            }
        }
        if white_kings != 1 || black_kings != 1 {
            #[cfg(feature = "logging")]
            log::warn!(
                "invalid position: {white_kings} white king(s), {black_kings} black king(s)"
            );
            return Err(FenError::WrongKingCount {
                white: white_kings,
                black: black_kings,
            });
        }

        self.recalc_redundant();
        for color in [Color::White, Color::Black] {
            let count = self.color_occupied(color).popcount();
            if count > 16 {
                return Err(FenError::TooManyPieces {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawns_on_back_ranks =
            self.bb_piece[Color::White.index()][Piece::Pawn.index()]
                .or(self.bb_piece[Color::Black.index()][Piece::Pawn.index()])
                .and(Bitboard::ROW_0.or(Bitboard::ROW_7));
        if let Some(sq) = pawns_on_back_ranks.iter().next() {
            return Err(FenError::PawnOnBackRank { square: sq.to_string() });
        }

        for color in [Color::White, Color::Black] {
            let back_rank = if color == Color::White { 7 } else { 0 };
            let rook_kingside = Square::new(back_rank, 7);
            let rook_queenside = Square::new(back_rank, 0);
            let king_sq = Square::new(back_rank, 4);
            let king_in_place = self.mailbox[king_sq.index()] == Cell::Occupied(color, Piece::King);

            if self.castling.has(color, true)
                && (!king_in_place
                    || self.mailbox[rook_kingside.index()] != Cell::Occupied(color, Piece::Rook))
            {
                self.castling.remove(color, true);
            }
            if self.castling.has(color, false)
                && (!king_in_place
                    || self.mailbox[rook_queenside.index()] != Cell::Occupied(color, Piece::Rook))
            {
                self.castling.remove(color, false);
            }
        }

        if let Some(file) = self.ep_file {
            let capturer = self.side_to_move;
            let pawn_row = if capturer == Color::White { 3 } else { 4 };
            let has_capturing_pawn = [-1i32, 1].into_iter().any(|d| {
                let c = file as i32 + d;
                (0..8).contains(&c)
                    && self.mailbox[Square::new(pawn_row, c as usize).index()]
                        == Cell::Occupied(capturer, Piece::Pawn)
            });
            if !has_capturing_pawn {
                self.ep_file = None;
            }
        }

        let just_moved = self.side_to_move.opponent();
        let just_moved_king = self.king_square(just_moved);
        if super::attacks::is_attacked(self, self.side_to_move, just_moved_king) {
            #[cfg(feature = "logging")]
            log::warn!("invalid position: {just_moved} is left in check after moving");
            return Err(FenError::OpponentInCheck {
                color: just_moved.name(),
            });
        }

        Ok(())
    }

    /// Independently recompute piece lists/counts/bitboards from the
    /// mailbox and check they match what's cached. A debug/testing
    /// cross-check, not part of the hot path.
    #[must_use]
    pub fn board_ok(&self) -> bool {
        let mut shadow = self.clone();
        shadow.recalc_redundant();

        if shadow.bb_all != self.bb_all {
            return false;
        }
        for color in [Color::White, Color::Black] {
            if shadow.bb_color[color.index()] != self.bb_color[color.index()] {
                return false;
            }
            for &piece in &Piece::ALL {
                if shadow.bb_piece[color.index()][piece.index()]
                    != self.bb_piece[color.index()][piece.index()]
                {
                    return false;
                }
                let mut want: Vec<Square> =
                    self.piece_squares(color, piece).to_vec();
                let mut got: Vec<Square> = shadow.piece_squares(color, piece).to_vec();
                want.sort_by_key(|s| s.index());
                got.sort_by_key(|s| s.index());
                if want != got {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                write!(f, "{} ", self.mailbox[Square::new(row, col).index()])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(
            f,
            "{} to move, castling {:?}, ep file {:?}, halfmove {}",
            self.side_to_move, self.castling, self.ep_file, self.halfmove_clock
        )
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}
