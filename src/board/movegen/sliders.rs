use super::super::{Position, Square};

impl Position {
    pub(crate) fn bishop_reaches(&self, from: Square, to: Square) -> bool {
        self.grid.empty_along_diagonal(from, to)
    }

    pub(crate) fn rook_reaches(&self, from: Square, to: Square) -> bool {
        self.grid.empty_along_rank(from, to) || self.grid.empty_along_file(from, to)
    }

    pub(crate) fn queen_reaches(&self, from: Square, to: Square) -> bool {
        self.bishop_reaches(from, to) || self.rook_reaches(from, to)
    }
}
