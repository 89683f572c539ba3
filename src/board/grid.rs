//! The 8x8 grid of squares and the pieces standing on them.

use super::error::SquareError;
use super::{BoardPiece, Square};

/// Owns every piece on the board, one optional slot per square.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    squares: [[Option<BoardPiece>; 8]; 8], // [rank][file]
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    #[must_use]
    pub const fn empty() -> Self {
        Grid {
            squares: [[None; 8]; 8],
        }
    }

    /// Bounds-checked lookup by raw coordinates.
    pub fn occupant_at(&self, file: usize, rank: usize) -> Result<Option<&BoardPiece>, SquareError> {
        let square = Square::try_from((rank, file))?;
        Ok(self.get(square))
    }

    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&BoardPiece> {
        self.squares[square.rank()][square.file()].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, square: Square) -> Option<&mut BoardPiece> {
        self.squares[square.rank()][square.file()].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Replace the occupant of `square`, returning the previous one.
    ///
    /// A placed piece has its square updated to `square`. Passing `None`
    /// vacates the square. No other square is touched.
    pub fn place(&mut self, square: Square, piece: Option<BoardPiece>) -> Option<BoardPiece> {
        let piece = piece.map(|mut p| {
            p.square = square;
            p
        });
        std::mem::replace(&mut self.squares[square.rank()][square.file()], piece)
    }

    /// All pieces in square index order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> {
        self.squares.iter().flatten().flatten()
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut BoardPiece> {
        self.squares.iter_mut().flatten().flatten()
    }

    /// True when `from` and `to` share a rank and every square strictly
    /// between them is empty. False when they are not on one rank.
    #[must_use]
    pub fn empty_along_rank(&self, from: Square, to: Square) -> bool {
        from.rank() == to.rank() && from != to && self.empty_between(from, to)
    }

    /// File counterpart of [`Grid::empty_along_rank`].
    #[must_use]
    pub fn empty_along_file(&self, from: Square, to: Square) -> bool {
        from.file() == to.file() && from != to && self.empty_between(from, to)
    }

    /// Diagonal counterpart of [`Grid::empty_along_rank`].
    #[must_use]
    pub fn empty_along_diagonal(&self, from: Square, to: Square) -> bool {
        let (dr, df) = from.delta(to);
        dr != 0 && dr.abs() == df.abs() && self.empty_between(from, to)
    }

    // Callers have already checked that `from` and `to` share a line.
    fn empty_between(&self, from: Square, to: Square) -> bool {
        let (dr, df) = from.delta(to);
        let step = (dr.signum(), df.signum());
        let distance = dr.abs().max(df.abs());
        (1..distance).all(|i| {
            from.offset(step.0 * i, step.1 * i)
                .map_or(true, |sq| self.is_empty(sq))
        })
    }
}
