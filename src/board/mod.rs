//! Chess board representation and rules.
//!
//! An 8x8 grid of owned pieces with pseudo-legal movement per piece kind, a
//! legality filter, check and mate detection, move application and FEN
//! conversion. Castling rights and the en passant target are read off the
//! pieces themselves rather than stored beside the grid.
//!
//! # Example
//! ```
//! use chess_rules::board::{Move, Position};
//!
//! let mut position = Position::new();
//! position.make_move("e2e4".parse::<Move>().unwrap()).unwrap();
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod grid;
mod legality;
mod make_move;
mod movegen;
mod perft;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use grid::Grid;
pub use state::Position;
pub use types::{
    AppliedMove, BoardPiece, CastlingRights, Color, Move, MoveKind, Piece, Square,
    PROMOTION_PIECES,
};
