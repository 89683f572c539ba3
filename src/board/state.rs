use std::fmt;

use once_cell::sync::Lazy;

use super::{BoardPiece, CastlingRights, Color, Grid, Piece, Square};

static STARTING_POSITION: Lazy<Position> = Lazy::new(|| {
    let mut position = Position::empty();
    let back_rank = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    for (file, piece) in back_rank.iter().enumerate() {
        position.put(Square::at(0, file), Color::White, *piece);
        position.put(Square::at(7, file), Color::Black, *piece);
        position.put(Square::at(1, file), Color::White, Piece::Pawn);
        position.put(Square::at(6, file), Color::Black, Piece::Pawn);
    }
    position
});

/// A full game position: the grid plus side to move and move counters.
///
/// Castling rights and the en passant target are not stored; they are read
/// off the piece flags, so they can never disagree with the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    #[must_use]
    pub fn empty() -> Self {
        Position {
            grid: Grid::empty(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place a fresh, unmoved piece.
    pub(crate) fn put(&mut self, square: Square, color: Color, piece: Piece) {
        self.grid.place(square, Some(BoardPiece::new(color, piece)));
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&BoardPiece> {
        self.grid.get(square)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Rights still available: king on its home square and the corner rook,
    /// both unmoved.
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        let mut rights = CastlingRights::none();
        for color in Color::BOTH {
            for kingside in [true, false] {
                if self.castling_pieces_unmoved(color, kingside) {
                    rights.set(color, kingside);
                }
            }
        }
        rights
    }

    pub(crate) fn castling_pieces_unmoved(&self, color: Color, kingside: bool) -> bool {
        let back_rank = color.back_rank();
        let rook_file = if kingside { 7 } else { 0 };
        let unmoved = |square: Square, kind: Piece| {
            self.piece_at(square)
                .map_or(false, |p| p.is(color, kind) && !p.has_moved())
        };
        unmoved(Square::at(back_rank, 4), Piece::King)
            && unmoved(Square::at(back_rank, rook_file), Piece::Rook)
    }

    /// Square a pawn could capture onto en passant this ply, if any.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.grid
            .pieces()
            .find(|p| p.kind() == Piece::Pawn && p.just_double_stepped())
            .and_then(|p| p.square().offset(-p.color().pawn_direction(), 0))
    }

    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.grid.is_empty(square)
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or only bishops that all stand on one shade.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishop_shades = Vec::new();
        for piece in self.grid.pieces() {
            match piece.kind() {
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
                Piece::Knight => knights += 1,
                Piece::Bishop => bishop_shades.push(piece.square().shade()),
                Piece::King => {}
            }
        }

        if knights + bishop_shades.len() <= 1 {
            return true;
        }
        knights == 0 && bishop_shades.windows(2).all(|w| w[0] == w[1])
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// ASCII diagram, rank 8 at the top.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square::at(rank, file))
                    .map_or('.', BoardPiece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
