#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{History, RulesConfig};
use crate::board::{Color, Position};

/// Check, mate and draw flags for the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStatus {
    side_to_move: Color,
    in_check: [bool; 2],
    checkmated: Option<Color>,
    stalemate: bool,
    threefold_repetition: bool,
    fifty_move_rule: bool,
    insufficient_material: bool,
}

impl GameStatus {
    /// Mate and stalemate are tested for the side to move only; the other
    /// side cannot be to move in a position it has just left.
    pub(crate) fn evaluate(position: &mut Position, history: &History, config: &RulesConfig) -> Self {
        let side_to_move = position.side_to_move();
        let in_check = [
            position.is_in_check(Color::White),
            position.is_in_check(Color::Black),
        ];
        let has_move = position.has_legal_move(side_to_move);
        let checked = in_check[side_to_move.index()];

        GameStatus {
            side_to_move,
            in_check,
            checkmated: (checked && !has_move).then_some(side_to_move),
            stalemate: !checked && !has_move,
            threefold_repetition: history.repetition_count(position) >= config.repetition_limit,
            fifty_move_rule: position.halfmove_clock() >= config.fifty_move_limit,
            insufficient_material: config.detect_insufficient_material
                && position.is_insufficient_material(),
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.checkmated == Some(color)
    }

    /// The side that has been mated, if any.
    #[must_use]
    pub fn checkmate(&self) -> Option<Color> {
        self.checkmated
    }

    #[must_use]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    #[must_use]
    pub fn threefold_repetition(&self) -> bool {
        self.threefold_repetition
    }

    #[must_use]
    pub fn fifty_move_rule(&self) -> bool {
        self.fifty_move_rule
    }

    #[must_use]
    pub fn insufficient_material(&self) -> bool {
        self.insufficient_material
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.stalemate
            || self.threefold_repetition
            || self.fifty_move_rule
            || self.insufficient_material
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.checkmated.map(Color::opponent)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.checkmated.is_some() || self.is_draw()
    }
}
