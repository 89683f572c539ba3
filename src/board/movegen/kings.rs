use super::super::{BoardPiece, Color, Piece, Position, Square};

pub(crate) fn king_steps(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    dr.abs().max(df.abs()) == 1
}

/// (rook source, rook destination) for a castle on the given wing.
pub(crate) fn castling_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
    let back_rank = color.back_rank();
    if kingside {
        (Square::at(back_rank, 7), Square::at(back_rank, 5))
    } else {
        (Square::at(back_rank, 0), Square::at(back_rank, 3))
    }
}

impl Position {
    /// Castling is a two-file king move from the home square. The king and
    /// the corner rook must be unmoved, the squares between them empty, and
    /// the squares the king starts on, crosses and lands on unattacked.
    pub(crate) fn can_castle_to(&self, king: &BoardPiece, from: Square, to: Square) -> bool {
        let color = king.color();
        let back_rank = color.back_rank();
        if king.has_moved() || from != Square::at(back_rank, 4) || to.rank() != back_rank {
            return false;
        }
        let kingside = match to.file() {
            6 => true,
            2 => false,
            _ => return false,
        };

        let (rook_square, transit) = castling_rook_squares(color, kingside);
        let rook_ready = self
            .piece_at(rook_square)
            .map_or(false, |rook| rook.is(color, Piece::Rook) && !rook.has_moved());
        if !rook_ready || !self.grid.empty_along_rank(from, rook_square) {
            return false;
        }

        let enemy = color.opponent();
        [from, transit, to]
            .iter()
            .all(|&square| !self.is_square_attacked(square, enemy))
    }
}
