//! Move representation and the fixed-capacity move buffer sentinel.

use std::fmt;

use super::piece::Piece;
use super::square::Square;

/// What makes a move special beyond "piece moves from A to B".
///
/// Captures are not a flag here: whether a move captures is inferred from
/// whatever `Cell` sits on the destination square at generation time, the
/// same way the reference move generator treats them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveFlag {
    Normal,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// A move that changes nothing, used by search-adjacent callers to
    /// probe "what if it were the other side's turn". The core never
    /// generates one itself.
    Null,
    /// Sentinel written past the last real move in a caller-supplied
    /// buffer, mirroring the reference generator's `FLAG_END_OF_LIST`.
    EndOfList,
}

/// A single move.
///
/// Deliberately a plain tagged struct rather than a packed integer: the
/// flag taxonomy here (captures inferred from the board, not a bit) doesn't
/// fit a dense bitfield encoding, and the move buffer this feeds is sized
/// in the hundreds, not millions, so the extra bytes per move don't matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub flag: MoveFlag,
    /// True for a pawn push of two ranks from its start square. Kept
    /// alongside `flag` (rather than folded into it) since it can occur
    /// together with a `Normal` move and nothing else.
    pub is_double_push: bool,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flag: MoveFlag::Normal,
            is_double_push: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, promotion: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
            flag: MoveFlag::Normal,
            is_double_push: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn double_push(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flag: MoveFlag::Normal,
            is_double_push: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flag: MoveFlag::EnPassant,
            is_double_push: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flag: MoveFlag::CastleKingside,
            is_double_push: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            flag: MoveFlag::CastleQueenside,
            is_double_push: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: Square::from_index(0),
            to: Square::from_index(0),
            promotion: None,
            flag: MoveFlag::Null,
            is_double_push: false,
        }
    }

    /// The sentinel written at the end of a caller-provided move buffer.
    #[inline]
    #[must_use]
    pub const fn end_of_list() -> Self {
        Move {
            from: Square::from_index(0),
            to: Square::from_index(0),
            promotion: None,
            flag: MoveFlag::EndOfList,
            is_double_push: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_end_of_list(self) -> bool {
        matches!(self.flag, MoveFlag::EndOfList)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self.flag, MoveFlag::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.flag, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Upper bound on the number of pseudo-legal moves any reachable chess
/// position can have, plus one slot for the `EndOfList` sentinel.
pub const MAX_MOVES: usize = 241;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_move_has_no_promotion_or_special_flag() {
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(mv.flag, MoveFlag::Normal);
        assert_eq!(mv.promotion, None);
        assert!(!mv.is_promotion());
        assert!(!mv.is_castling());
    }

    #[test]
    fn promotion_move_carries_the_chosen_piece() {
        let mv = Move::with_promotion(Square::new(1, 0), Square::new(0, 0), Piece::Queen);
        assert_eq!(mv.promotion, Some(Piece::Queen));
        assert!(mv.is_promotion());
    }

    #[test]
    fn end_of_list_is_recognized_by_flag_alone() {
        let sentinel = Move::end_of_list();
        assert!(sentinel.is_end_of_list());
        assert!(!Move::null().is_end_of_list());
    }

    #[test]
    fn castling_moves_report_is_castling() {
        assert!(Move::castle_kingside(Square::new(7, 4), Square::new(7, 6)).is_castling());
        assert!(Move::castle_queenside(Square::new(7, 4), Square::new(7, 2)).is_castling());
        assert!(!Move::new(Square::new(7, 4), Square::new(7, 5)).is_castling());
    }

    #[test]
    fn equality_compares_all_move_fields() {
        let a = Move::new(Square::new(6, 4), Square::new(4, 4));
        let b = Move::double_push(Square::new(6, 4), Square::new(4, 4));
        assert_ne!(a, b);
    }

    #[test]
    fn display_writes_coordinate_notation() {
        let mv = Move::with_promotion(Square::new(1, 0), Square::new(0, 0), Piece::Queen);
        assert_eq!(mv.to_string(), "a7a8q");
    }
}
