//! FEN parsing and emission, plus UCI coordinate move parsing.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::movegen::generate_moves;
use super::state::Board;
use super::types::{Cell, Color, Move, Piece, Square, CastlingRights, MAX_MOVES};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is malformed. The result is run
    /// through [`Board::validate`], so castling rights or an en passant
    /// file the FEN claims but the placed pieces don't support are cleared
    /// rather than rejected.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (row, row_str) in parts[0].split('/').enumerate() {
            if row >= 8 {
                return Err(FenError::InvalidRank { rank: row });
            }
            let mut col = 0usize;
            for c in row_str.chars() {
                if c.is_ascii_digit() {
                    col += c.to_digit(10).unwrap() as usize;
                } else {
                    let color = if c.is_uppercase() { Color::White } else { Color::Black };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: row,
                            files: col + 1,
                        });
                    }
                    board.change_piece(Square::new(row, col), Cell::Occupied(color, piece));
                    col += 1;
                }
            }
        }

        board.set_side_to_move(match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        });

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.set(Color::White, true),
                    'Q' => castling.set(Color::White, false),
                    'k' => castling.set(Color::Black, true),
                    'q' => castling.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        board.set_castling_rights(castling);

        let ep_file = if parts[3] == "-" {
            None
        } else {
            let square: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(square.file())
        };
        board.set_ep_file(ep_file);

        if let Some(clock_str) = parts.get(4) {
            board.set_halfmove_clock(clock_str.parse().unwrap_or(0));
        }

        board.validate()?;

        #[cfg(feature = "logging")]
        log::debug!("parsed FEN: {fen}");

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use [`Board::try_from_fen`] for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Emit the position as a FEN string. The fullmove field is always `1`
    /// since the core does not track it.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut rank = String::new();
            let mut empty = 0u32;
            for col in 0..8 {
                match self.piece_at(Square::new(row, col)) {
                    Cell::Empty => empty += 1,
                    Cell::Occupied(color, piece) => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let active = if self.side_to_move() == Color::White { "w" } else { "b" };

        let rights = self.castling_rights();
        let mut castling = String::new();
        if rights.has(Color::White, true) {
            castling.push('K');
        }
        if rights.has(Color::White, false) {
            castling.push('Q');
        }
        if rights.has(Color::Black, true) {
            castling.push('k');
        }
        if rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match self.ep_file() {
            Some(file) => {
                let row = if self.side_to_move() == Color::White { 2 } else { 5 };
                Square::new(row, file).to_string()
            }
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} 1",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock()
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g. `e2e4`, `e7e8q`)
    /// and match it against the pseudo-legal moves available in this
    /// position.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let board = Board::start_position();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let from: Square = uci[0..2].parse().map_err(|_| MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        })?;
        let to: Square = uci[2..4].parse().map_err(|_| MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        })?;

        let promotion = if uci.len() == 5 {
            let c = uci.as_bytes()[4] as char;
            let piece = Piece::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
            Some(piece)
        } else {
            None
        };

        let mut buf = [Move::end_of_list(); MAX_MOVES];
        let count = generate_moves(self, &mut buf);
        buf[..count]
            .iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
