use super::Position;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Each promotion kind counts as a separate move. Used to validate move
    /// generation against published node counts.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut child = self.clone();
            if child.make_move(mv).is_ok() {
                nodes += child.perft(depth - 1);
            }
        }
        nodes
    }
}
