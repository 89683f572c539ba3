//! Promotion piece selection.

use crate::board::{Color, Piece, Square};

/// Supplies the piece a pawn promotes to when the move itself names none.
///
/// Returning `None` defers the choice: the game waits until
/// [`Game::promotion`](super::Game::promotion) is called.
pub trait PromotionResolver {
    fn select(&mut self, color: Color, from: Square, to: Square) -> Option<Piece>;
}

impl<F> PromotionResolver for F
where
    F: FnMut(Color, Square, Square) -> Option<Piece>,
{
    fn select(&mut self, color: Color, from: Square, to: Square) -> Option<Piece> {
        self(color, from, to)
    }
}

/// Always defers, for interfaces that ask the player before committing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deferred;

impl PromotionResolver for Deferred {
    fn select(&mut self, _color: Color, _from: Square, _to: Square) -> Option<Piece> {
        None
    }
}

/// A promotion move waiting for its piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}
