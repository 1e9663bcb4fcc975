//! Make/unmake: applying a pseudo-legal move in place and reversing it
//! from a small persistence record.
//!
//! Ground: `examples/original_source/selftest/dodecahedron/moves.cpp`
//! (`make_move`, `unmake_move`). All board mutation goes through
//! [`Board::change_piece`], so the mailbox, piece lists, and bitboards
//! never drift out of lockstep.

use super::state::Board;
use super::types::{CastlingRights, Cell, Color, Move, MoveFlag, Piece, Square};

/// Everything `make_move` destroys that `unmake_move` needs back: the
/// castling rights, en passant file, and halfmove clock as they stood
/// before the move, plus the captured cell for a `Normal` move (other
/// flags don't need it — en passant always takes a pawn of the other
/// color, and castling never captures).
#[derive(Clone, Copy, Debug)]
pub struct UnmakeInfo {
    castling: CastlingRights,
    ep_file: Option<usize>,
    halfmove_clock: u32,
    captured: Cell,
}

/// Rook home squares and the square the king/rook cross, indexed by
/// `[kingside]`.
const fn rook_home(back_row: usize, kingside: bool) -> Square {
    Square::new(back_row, if kingside { 7 } else { 0 })
}

const fn rook_crossed(back_row: usize, kingside: bool) -> Square {
    Square::new(back_row, if kingside { 5 } else { 3 })
}

impl Board {
    /// Apply `mv` to the position, returning the record needed to reverse
    /// it with [`Board::unmake_move`]. `mv` must be a move this board's
    /// generator could have produced from the current position — passing
    /// an arbitrary move is a programmer error (see the crate-level
    /// persistence-record contract).
    pub fn make_move(&mut self, mv: &Move) -> UnmakeInfo {
        let castling = self.castling_rights();
        let ep_file = self.ep_file();
        let halfmove_clock = self.halfmove_clock();

        let mover = self.side_to_move();
        let (reset_clock, captured) = match mv.flag {
            MoveFlag::Normal => self.make_normal(mv, mover),
            MoveFlag::EnPassant => {
                self.make_en_passant(mv, mover);
                (true, Cell::Empty)
            }
            MoveFlag::CastleKingside => {
                self.make_castle(mv, mover, true);
                (false, Cell::Empty)
            }
            MoveFlag::CastleQueenside => {
                self.make_castle(mv, mover, false);
                (false, Cell::Empty)
            }
            MoveFlag::Null | MoveFlag::EndOfList => (false, Cell::Empty),
        };

        self.set_ep_file(if mv.is_double_push { Some(mv.to.file()) } else { None });
        self.set_side_to_move(mover.opponent());
        self.set_halfmove_clock(if reset_clock { 0 } else { halfmove_clock + 1 });

        debug_assert!(self.board_ok(), "make_move left redundant state inconsistent");

        UnmakeInfo { castling, ep_file, halfmove_clock, captured }
    }

    /// Reverse `mv`, restoring the board to exactly the state
    /// [`Board::make_move`] mutated it from. `info` must be the record
    /// that call returned; pairing a move with the wrong record is a
    /// programmer error.
    pub fn unmake_move(&mut self, mv: &Move, info: UnmakeInfo) {
        let mover = self.side_to_move().opponent();
        self.set_side_to_move(mover);

        match mv.flag {
            MoveFlag::Normal => self.unmake_normal(mv, info.captured),
            MoveFlag::EnPassant => self.unmake_en_passant(mv, mover),
            MoveFlag::CastleKingside => self.unmake_castle(mv, mover, true),
            MoveFlag::CastleQueenside => self.unmake_castle(mv, mover, false),
            MoveFlag::Null | MoveFlag::EndOfList => {}
        }

        self.set_castling_rights(info.castling);
        self.set_ep_file(info.ep_file);
        self.set_halfmove_clock(info.halfmove_clock);

        debug_assert!(self.board_ok(), "unmake_move left redundant state inconsistent");
    }

    fn make_normal(&mut self, mv: &Move, mover: Color) -> (bool, Cell) {
        let (_, moving_piece) = self
            .piece_at(mv.from)
            .piece()
            .expect("Normal move must start on an occupied square");

        let new_piece = mv.promotion.unwrap_or(moving_piece);
        let captured = self.change_piece(mv.to, Cell::Occupied(mover, new_piece));
        self.change_piece(mv.from, Cell::Empty);

        self.update_castling_rights_for_touch(mv.from);
        self.update_castling_rights_for_touch(mv.to);

        (moving_piece == Piece::Pawn || !captured.is_empty(), captured)
    }

    fn unmake_normal(&mut self, mv: &Move, captured: Cell) {
        let (mover, current_piece) = self
            .piece_at(mv.to)
            .piece()
            .expect("Normal unmake expects a piece on the destination");
        let original_piece = if mv.promotion.is_some() { Piece::Pawn } else { current_piece };
        self.change_piece(mv.from, Cell::Occupied(mover, original_piece));
        self.change_piece(mv.to, captured);
    }

    fn make_en_passant(&mut self, mv: &Move, mover: Color) {
        self.change_piece(mv.to, Cell::Occupied(mover, Piece::Pawn));
        self.change_piece(mv.from, Cell::Empty);
        let captured_sq = Square::new(mv.from.row(), mv.to.col());
        self.change_piece(captured_sq, Cell::Empty);
    }

    fn unmake_en_passant(&mut self, mv: &Move, mover: Color) {
        self.change_piece(mv.from, Cell::Occupied(mover, Piece::Pawn));
        self.change_piece(mv.to, Cell::Empty);
        let captured_sq = Square::new(mv.from.row(), mv.to.col());
        self.change_piece(captured_sq, Cell::Occupied(mover.opponent(), Piece::Pawn));
    }

    fn make_castle(&mut self, mv: &Move, mover: Color, kingside: bool) {
        let back_row = mv.from.row();
        let rook_from = rook_home(back_row, kingside);
        let rook_to = rook_crossed(back_row, kingside);

        self.change_piece(rook_to, Cell::Occupied(mover, Piece::Rook));
        self.change_piece(rook_from, Cell::Empty);
        self.change_piece(mv.to, Cell::Occupied(mover, Piece::King));
        self.change_piece(mv.from, Cell::Empty);

        let mut rights = self.castling_rights();
        rights.remove(mover, true);
        rights.remove(mover, false);
        self.set_castling_rights(rights);
    }

    fn unmake_castle(&mut self, mv: &Move, mover: Color, kingside: bool) {
        let back_row = mv.from.row();
        let rook_from = rook_home(back_row, kingside);
        let rook_to = rook_crossed(back_row, kingside);

        self.change_piece(mv.from, Cell::Occupied(mover, Piece::King));
        self.change_piece(mv.to, Cell::Empty);
        self.change_piece(rook_from, Cell::Occupied(mover, Piece::Rook));
        self.change_piece(rook_to, Cell::Empty);
    }

    /// Clear castling rights a move's source or destination square makes
    /// stale: touching a rook's home square drops that one right, touching
    /// a king's home square drops both rights for that color. Applies
    /// regardless of which piece moved, since capturing a rook on its home
    /// square strips the right just as moving it away does.
    fn update_castling_rights_for_touch(&mut self, square: Square) {
        let mut rights = self.castling_rights();
        for color in [Color::White, Color::Black] {
            let back_row = if color == Color::White { 7 } else { 0 };
            if square == Square::new(back_row, 7) {
                rights.remove(color, true);
            } else if square == Square::new(back_row, 0) {
                rights.remove(color, false);
            } else if square == Square::new(back_row, 4) {
                rights.remove(color, true);
                rights.remove(color, false);
            }
        }
        self.set_castling_rights(rights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::attacks::is_opponent_king_attacked;
    use crate::board::types::MAX_MOVES;

    fn all_moves(board: &Board) -> Vec<Move> {
        let mut buf = [Move::end_of_list(); MAX_MOVES];
        let count = crate::board::movegen::generate_moves(board, &mut buf);
        buf[..count].to_vec()
    }

    #[test]
    fn make_then_unmake_restores_the_start_position() {
        let mut board = Board::start_position();
        let before = board.to_fen();
        for mv in all_moves(&board) {
            let info = board.make_move(&mv);
            board.unmake_move(&mv, info);
            assert_eq!(board.to_fen(), before, "move {mv} did not round-trip");
        }
    }

    #[test]
    fn castling_moves_rook_and_king_and_clears_rights() {
        let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = board.parse_move("e1g1").unwrap();
        let info = board.make_move(&mv);

        assert_eq!(
            board.piece_at("f1".parse().unwrap()),
            Cell::Occupied(Color::White, Piece::Rook)
        );
        assert_eq!(
            board.piece_at("g1".parse().unwrap()),
            Cell::Occupied(Color::White, Piece::King)
        );
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::Black, true));
        assert!(board.castling_rights().has(Color::Black, false));
        assert_eq!(board.halfmove_clock(), 1);

        let before = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.unmake_move(&mv, info);
        assert_eq!(board.to_fen(), before.to_fen());
    }

    #[test]
    fn double_push_sets_the_en_passant_file_and_a_quiet_move_clears_it() {
        let mut board = Board::try_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let mv = board.parse_move("e2e4").unwrap();
        board.make_move(&mv);
        assert_eq!(board.ep_file(), Some(4));
        assert!(board.to_fen().contains(" e3 "));

        let mv2 = board.parse_move("e1d1").unwrap();
        board.make_move(&mv2);
        assert_eq!(board.ep_file(), None);
        assert!(board.to_fen().contains(" - "));
    }

    #[test]
    fn en_passant_make_removes_the_captured_pawn() {
        let mut board =
            Board::try_from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2")
                .unwrap();
        let mv = board.parse_move("e5d6").unwrap();
        assert_eq!(mv.flag, MoveFlag::EnPassant);
        let info = board.make_move(&mv);
        assert_eq!(board.piece_at("d5".parse().unwrap()), Cell::Empty);
        assert_eq!(
            board.piece_at("d6".parse().unwrap()),
            Cell::Occupied(Color::White, Piece::Pawn)
        );

        let before = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        board.unmake_move(&mv, info);
        assert_eq!(board.to_fen(), Board::try_from_fen(before).unwrap().to_fen());
    }

    #[test]
    fn promotion_make_places_the_chosen_piece_and_unmake_restores_the_pawn() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
        let mv = Move::with_promotion("a7".parse().unwrap(), "a8".parse().unwrap(), Piece::Queen);
        let info = board.make_move(&mv);
        assert_eq!(
            board.piece_at("a8".parse().unwrap()),
            Cell::Occupied(Color::White, Piece::Queen)
        );
        board.unmake_move(&mv, info);
        assert_eq!(
            board.piece_at("a7".parse().unwrap()),
            Cell::Occupied(Color::White, Piece::Pawn)
        );
        assert_eq!(board.piece_at("a8".parse().unwrap()), Cell::Empty);
    }

    #[test]
    fn pseudo_legal_but_illegal_move_is_caught_after_make() {
        let mut board = Board::try_from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = board.parse_move("e1e2").unwrap();
        let info = board.make_move(&mv);
        assert!(is_opponent_king_attacked(&board));
        board.unmake_move(&mv, info);
    }
}
