//! Thread-safe handle to a game.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Game, GameStatus, MoveStatus};
use crate::board::{FenError, MoveError, Piece, Square};

/// A [`Game`] behind a mutex, for a display thread polling a game that
/// another thread is playing. Each call holds the lock for its whole
/// duration, so legality queries never observe a half-played move.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.inner.lock();
        f(&mut game)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.with(|game| game.legal_destinations(from))
    }

    pub fn attempt_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveStatus, MoveError> {
        self.with(|game| game.attempt_move(from, to, promotion))
    }

    pub fn status(&self) -> GameStatus {
        self.with(Game::status)
    }

    pub fn export_position(&self) -> String {
        self.inner.lock().export_position()
    }

    pub fn import_position(&self, fen: &str) -> Result<(), FenError> {
        self.with(|game| game.import_position(fen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_moves_from_another_thread_are_visible() {
        let shared = SharedGame::new(Game::new());
        let player = shared.clone();
        let handle = thread::spawn(move || {
            for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
                player.attempt_move(sq(from), sq(to), None).unwrap();
            }
        });

        // Polling while the other thread plays never sees a torn position
        for _ in 0..50 {
            let fen = shared.export_position();
            assert!(fen.parse::<crate::board::Position>().is_ok());
            let _ = shared.legal_destinations(sq("b1"));
        }
        handle.join().unwrap();

        assert_eq!(
            shared.export_position(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        assert_eq!(shared.with(|game| game.history().len()), 3);
    }

    #[test]
    fn test_status_through_handle() {
        let shared = SharedGame::default();
        shared
            .import_position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .unwrap();
        assert!(shared.status().stalemate());
    }
}
