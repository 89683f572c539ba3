use super::super::{Color, Piece, Position, Square};

impl Position {
    pub(crate) fn pawn_can_move(&self, from: Square, color: Color, to: Square) -> bool {
        let dir = color.pawn_direction();
        let (dr, df) = from.delta(to);

        if df == 0 {
            if dr == dir {
                return self.is_empty(to);
            }
            if dr == 2 * dir && from.rank() == color.pawn_start_rank() {
                return self.grid.empty_along_file(from, to) && self.is_empty(to);
            }
            return false;
        }

        if !pawn_attacks(from, color, to) {
            return false;
        }
        match self.piece_at(to) {
            Some(target) => target.color() != color,
            None => self.en_passant_victim(color, to).is_some(),
        }
    }

    /// Square of the enemy pawn a `mover` pawn would remove by capturing en
    /// passant onto `to`.
    pub(crate) fn en_passant_victim(&self, mover: Color, to: Square) -> Option<Square> {
        let victim_square = to.offset(-mover.pawn_direction(), 0)?;
        let victim = self.piece_at(victim_square)?;
        (victim.is(mover.opponent(), Piece::Pawn) && victim.just_double_stepped())
            .then_some(victim_square)
    }
}

pub(crate) fn pawn_attacks(from: Square, color: Color, to: Square) -> bool {
    let (dr, df) = from.delta(to);
    dr == color.pawn_direction() && df.abs() == 1
}
