//! Check, checkmate and stalemate detection.

use super::{Color, Piece, Position, Square};

impl Position {
    /// Linear scan for the king of `color`.
    #[must_use]
    pub fn king_square_of(&self, color: Color) -> Option<Square> {
        self.grid
            .pieces()
            .find(|p| p.is(color, Piece::King))
            .map(|p| p.square())
    }

    /// Whether any piece of `by` threatens `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.grid
            .pieces()
            .filter(|p| p.color() == by)
            .any(|p| self.attacks(p.square(), square))
    }

    /// A side without a king on the board is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square_of(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Whether any piece of `color` has at least one legal move.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let sources: Vec<Square> = self
            .grid
            .pieces()
            .filter(|p| p.color() == color)
            .map(|p| p.square())
            .collect();
        sources
            .into_iter()
            .any(|from| Square::all().any(|to| self.is_legal(from, to)))
    }

    /// In check with no legal move. Searches every source and destination,
    /// so call it once per ply rather than per candidate move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, but no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }
}
