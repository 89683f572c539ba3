//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have four to six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must describe exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank does not describe exactly eight files
    BadRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// En passant field is not a square on the third or sixth rank with a
    /// capturable pawn in front of it
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 4 to 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN must describe 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square addressing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected moves.
///
/// Every variant is returned before the position is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the source square
    EmptySquare { square: Square },
    /// The piece on the source square belongs to the side not on move
    NotYourTurn { square: Square, to_move: Color },
    /// The move breaks the piece's movement rules or exposes its king
    IllegalMove { from: Square, to: Square },
    /// Promotion kind is not one of queen, rook, bishop, knight, or was given
    /// for a move that does not promote
    InvalidPromotion { piece: Piece },
    /// A promotion is waiting for its piece selection
    PromotionPending { from: Square, to: Square },
    /// A selection was supplied but no promotion is waiting for one
    NoPendingPromotion { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { square, to_move } => {
                write!(f, "Piece on {square} cannot move, {to_move} to move")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            MoveError::PromotionPending { from, to } => {
                write!(f, "Promotion {from}{to} is waiting for a piece selection")
            }
            MoveError::NoPendingPromotion { from, to } => {
                write!(f, "No promotion pending for {from}{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for long algebraic move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
