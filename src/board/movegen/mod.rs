//! Pseudo-legal movement rules, one function per piece kind.
//!
//! A pseudo-legal move obeys the piece's geometry and the occupancy of the
//! board but may leave the mover's own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Color, Piece, Position, Square};

pub(crate) use kings::castling_rook_squares;

impl Position {
    /// Every square the piece on `from` may move to, ignoring king safety.
    /// Empty when `from` is empty.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_pseudo_legal(from, to))
            .collect()
    }

    #[must_use]
    pub fn is_pseudo_legal(&self, from: Square, to: Square) -> bool {
        let piece = match self.piece_at(from) {
            Some(piece) => *piece,
            None => return false,
        };
        if self.same_side_occupied(piece.color(), to) {
            return false;
        }
        match piece.kind() {
            Piece::Pawn => self.pawn_can_move(from, piece.color(), to),
            Piece::Knight => knights::knight_reaches(from, to),
            Piece::Bishop => self.bishop_reaches(from, to),
            Piece::Rook => self.rook_reaches(from, to),
            Piece::Queen => self.queen_reaches(from, to),
            Piece::King => kings::king_steps(from, to) || self.can_castle_to(&piece, from, to),
        }
    }

    /// Whether the piece on `from` threatens `to`.
    ///
    /// Same geometry as [`Position::is_pseudo_legal`] except that pawns
    /// threaten their capture diagonals only and castling never attacks.
    /// Occupancy of `to` is not considered.
    pub(crate) fn attacks(&self, from: Square, to: Square) -> bool {
        let piece = match self.piece_at(from) {
            Some(piece) => piece,
            None => return false,
        };
        match piece.kind() {
            Piece::Pawn => pawns::pawn_attacks(from, piece.color(), to),
            Piece::Knight => knights::knight_reaches(from, to),
            Piece::Bishop => self.bishop_reaches(from, to),
            Piece::Rook => self.rook_reaches(from, to),
            Piece::Queen => self.queen_reaches(from, to),
            Piece::King => kings::king_steps(from, to),
        }
    }

    #[inline]
    pub(crate) fn same_side_occupied(&self, color: Color, square: Square) -> bool {
        self.piece_at(square).map_or(false, |p| p.color() == color)
    }
}
