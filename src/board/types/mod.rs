//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `BoardPiece` - a piece on the board with its per-game flags
//! - `Square` - checked (rank, file) coordinate
//! - `Move`, `MoveKind`, `AppliedMove` - move requests and results
//! - `CastlingRights` - castling state as read off the board

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{AppliedMove, Move, MoveKind};
pub use piece::{BoardPiece, Color, Piece, PROMOTION_PIECES};
pub use square::Square;
