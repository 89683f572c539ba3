//! Chess rules engine: board representation, move legality, special moves,
//! check and draw detection, FEN conversion and a game session controller.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, MoveStatus};
//! use chess_rules::Square;
//!
//! let mut game = Game::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(game.legal_destinations(e2).contains(&e4));
//! let status = game.attempt_move(e2, e4, None).unwrap();
//! assert!(matches!(status, MoveStatus::Resolved(_)));
//! ```

#[macro_use]
mod logging;

pub mod board;
pub mod game;

pub use board::{Color, Move, Piece, Position, Square};
pub use game::{Game, GameStatus, SharedGame};
