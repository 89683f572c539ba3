//! Legal move filtering.
//!
//! A move is legal when it is pseudo-legal and, once played on the grid, does
//! not leave the mover's king attacked. The check is made by a trial move that
//! is always undone before returning.

use std::ops::Deref;

use super::{BoardPiece, Move, Piece, Position, Square, PROMOTION_PIECES};

/// A move played on the grid for inspection only.
///
/// Holding the guard gives read access to the altered position. Dropping it
/// puts back the mover and every piece the move removed, on every exit path.
pub(crate) struct TrialMove<'a> {
    position: &'a mut Position,
    from: Square,
    to: Square,
    captured: Option<BoardPiece>,
    en_passant: Option<BoardPiece>,
}

impl<'a> TrialMove<'a> {
    pub(crate) fn new(position: &'a mut Position, from: Square, to: Square) -> Self {
        let mover = position.grid.place(from, None);
        let en_passant = match mover {
            Some(pawn) if pawn.kind() == Piece::Pawn && position.is_empty(to) => position
                .en_passant_victim(pawn.color(), to)
                .and_then(|victim| position.grid.place(victim, None)),
            _ => None,
        };
        let captured = position.grid.place(to, mover);
        TrialMove {
            position,
            from,
            to,
            captured,
            en_passant,
        }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        &*self.position
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        let mover = self.position.grid.place(self.to, self.captured.take());
        self.position.grid.place(self.from, mover);
        if let Some(victim) = self.en_passant.take() {
            self.position.grid.place(victim.square(), Some(victim));
        }
    }
}

impl Position {
    /// Whether the piece on `from` may legally move to `to`.
    ///
    /// Turn order is not considered. The grid is left exactly as it was.
    pub fn is_legal(&mut self, from: Square, to: Square) -> bool {
        let color = match self.piece_at(from) {
            Some(piece) => piece.color(),
            None => return false,
        };
        if !self.is_pseudo_legal(from, to) {
            return false;
        }
        let trial = TrialMove::new(self, from, to);
        !trial.is_in_check(color)
    }

    /// Squares the piece on `from` may legally move to, in index order.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        self.pseudo_legal_targets(from)
            .into_iter()
            .filter(|&to| self.is_legal(from, to))
            .collect()
    }

    /// Every legal move for the side to move. Promotions appear once per
    /// promotion kind.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let color = self.side_to_move;
        let sources: Vec<Square> = self
            .grid
            .pieces()
            .filter(|p| p.color() == color)
            .map(|p| p.square())
            .collect();

        let mut moves = Vec::new();
        for from in sources {
            for to in self.legal_destinations(from) {
                if self.needs_promotion(from, to) {
                    moves.extend(
                        PROMOTION_PIECES
                            .iter()
                            .map(|&piece| Move::with_promotion(from, to, piece)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Whether moving the piece on `from` to `to` is a pawn reaching its last
    /// rank.
    #[must_use]
    pub fn needs_promotion(&self, from: Square, to: Square) -> bool {
        self.piece_at(from).map_or(false, |p| {
            p.kind() == Piece::Pawn && to.rank() == p.color().pawn_promotion_rank()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut position: Position = "4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1".parse().unwrap();
        assert!(position.is_pseudo_legal(sq("e2"), sq("d3")));
        assert!(!position.is_legal(sq("e2"), sq("d3")));
        assert!(position.legal_destinations(sq("e2")).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut position: Position = "3r2k1/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let destinations = position.legal_destinations(sq("e1"));
        assert!(!destinations.contains(&sq("d1")));
        assert!(!destinations.contains(&sq("d2")));
        assert!(destinations.contains(&sq("f2")));
    }

    #[test]
    fn test_capture_of_checking_piece_is_legal() {
        let mut position: Position = "6k1/8/8/8/8/8/3q4/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(position.legal_destinations(sq("e1")), [sq("f1"), sq("d2")]);
    }

    #[test]
    fn test_trial_restores_grid() {
        let mut position: Position = "r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1"
            .parse()
            .unwrap();
        let before = position.clone();
        for from in Square::all() {
            for to in Square::all() {
                position.is_legal(from, to);
                assert_eq!(position, before, "is_legal({from}, {to}) mutated the grid");
            }
        }
    }

    #[test]
    fn test_en_passant_exposing_king_is_illegal() {
        // Removing both pawns from the fifth rank would open the rook's line
        let mut position: Position = "8/8/8/K2pP2r/8/8/8/7k w - d6 0 1".parse().unwrap();
        assert!(position.is_pseudo_legal(sq("e5"), sq("d6")));
        assert!(!position.is_legal(sq("e5"), sq("d6")));
        assert!(position.is_legal(sq("e5"), sq("e6")));
    }

    #[test]
    fn test_legal_moves_expand_promotions() {
        let mut position: Position = "k7/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let promotions = position
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == sq("e7"))
            .count();
        assert_eq!(promotions, 4);
        assert!(position.needs_promotion(sq("e7"), sq("e8")));
        assert!(!position.needs_promotion(sq("e1"), sq("e2")));
    }

    #[test]
    fn test_legality_ignores_turn() {
        let mut position = Position::new();
        assert_eq!(position.side_to_move(), Color::White);
        assert!(position.is_legal(sq("e7"), sq("e5")));
    }
}
