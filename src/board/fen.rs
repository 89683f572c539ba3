use std::str::FromStr;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Four to six fields are accepted; a missing halfmove clock reads as 0
    /// and a missing fullmove number as 1. Castling rights and the en passant
    /// field are turned into piece flags, so a right whose king or rook is
    /// not on its home square is dropped.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();
        position.parse_placement(parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let rights = CastlingRights::from_fen_field(parts[2])
            .map_err(|c| FenError::InvalidCastling { char: c })?;
        position.apply_move_flags(rights);
        position.parse_en_passant(parts[3])?;

        position.halfmove_clock = parse_counter(parts.get(4))?.unwrap_or(0);
        position.fullmove_number = parse_counter(parts.get(5))?.unwrap_or(1);
        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.repetition_key(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The first four FEN fields. Two positions with the same key are the
    /// same position for repetition purposes.
    #[must_use]
    pub fn repetition_key(&self) -> String {
        let en_passant = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!(
            "{} {} {} {}",
            self.placement(),
            side,
            self.castling_rights(),
            en_passant
        )
    }

    /// The piece placement field alone.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    fn parse_placement(&mut self, field: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    _ => {
                        let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                        if file >= 8 {
                            return Err(FenError::BadRankLength {
                                rank: rank + 1,
                                files: file + 1,
                            });
                        }
                        let color = if c.is_ascii_uppercase() {
                            Color::White
                        } else {
                            Color::Black
                        };
                        self.put(Square::at(rank, file), color, piece);
                        file += 1;
                    }
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }
        Ok(())
    }

    /// Derive `has_moved` flags from the castling field and pawn ranks.
    pub(crate) fn apply_move_flags(&mut self, rights: CastlingRights) {
        for piece in self.grid.pieces_mut() {
            let color = piece.color();
            let square = piece.square();
            let home = square.rank() == color.back_rank();
            piece.has_moved = match piece.kind() {
                Piece::Pawn => square.rank() != color.pawn_start_rank(),
                Piece::King if home && square.file() == 4 => {
                    !(rights.has(color, true) || rights.has(color, false))
                }
                Piece::Rook if home && square.file() == 7 => !rights.has(color, true),
                Piece::Rook if home && square.file() == 0 => !rights.has(color, false),
                Piece::King | Piece::Rook => true,
                _ => false,
            };
        }
    }

    fn parse_en_passant(&mut self, field: &str) -> Result<(), FenError> {
        if field == "-" {
            return Ok(());
        }
        let target: Option<Square> = field.parse().ok();
        if target.map_or(false, |target| self.flag_en_passant(target)) {
            Ok(())
        } else {
            Err(FenError::InvalidEnPassant {
                found: field.to_string(),
            })
        }
    }

    /// Mark the pawn that just passed over `target` as capturable en passant.
    /// Returns false when `target` is not an empty square directly behind a
    /// double-stepped pawn of the side not to move.
    pub(crate) fn flag_en_passant(&mut self, target: Square) -> bool {
        let pusher = self.side_to_move.opponent();
        let behind_start = pusher.pawn_start_rank() as isize + pusher.pawn_direction();
        if target.rank() as isize != behind_start || !self.is_empty(target) {
            return false;
        }
        let victim = target
            .offset(pusher.pawn_direction(), 0)
            .and_then(|square| self.grid.get_mut(square));
        match victim {
            Some(pawn) if pawn.is(pusher, Piece::Pawn) => {
                pawn.has_moved = true;
                pawn.just_double_stepped = true;
                true
            }
            _ => false,
        }
    }
}

/// Counters are plain decimal digits; `u32::from_str` alone would also take
/// a leading `+`.
fn parse_counter(field: Option<&&str>) -> Result<Option<u32>, FenError> {
    field
        .map(|s| {
            let invalid = || FenError::InvalidCounter {
                found: (*s).to_string(),
            };
            if !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            s.parse().map_err(|_| invalid())
        })
        .transpose()
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
