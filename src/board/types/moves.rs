//! Move types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move request: source, destination and an optional promotion kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }
}

/// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_choice() => {
                    Ok(Move::with_promotion(from, to, piece))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

/// What a committed move turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle { kingside: bool },
    Promotion { piece: Piece, capture: bool },
}

/// Record of a move that was applied to a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub mv: Move,
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl AppliedMove {
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
