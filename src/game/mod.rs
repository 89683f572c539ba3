//! Game session layer: turn order, promotion selection, history and draw
//! detection on top of [`Position`](crate::board::Position).

mod config;
mod controller;
mod history;
mod promotion;
mod shared;
mod status;

use std::fmt;

use crate::board::{FenError, MoveError, MoveParseError};

pub use config::RulesConfig;
pub use controller::{Game, MoveStatus};
pub use history::{History, HistoryEntry};
pub use promotion::{Deferred, PendingPromotion, PromotionResolver};
pub use shared::SharedGame;
pub use status::GameStatus;

/// Any failure surfaced by the game layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move text is not long algebraic notation
    Parse(MoveParseError),
    /// The move was rejected
    Move(MoveError),
    /// Position text is not valid FEN
    Fen(FenError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Parse(err) => write!(f, "{err}"),
            GameError::Move(err) => write!(f, "{err}"),
            GameError::Fen(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Parse(err) => Some(err),
            GameError::Move(err) => Some(err),
            GameError::Fen(err) => Some(err),
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        GameError::Parse(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl From<FenError> for GameError {
    fn from(err: FenError) -> Self {
        GameError::Fen(err)
    }
}
