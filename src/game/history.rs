//! Move history and repetition counting.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{AppliedMove, Position};

#[derive(Clone, Debug)]
pub(crate) struct RepetitionTable {
    counts: HashMap<String, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: String) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub(crate) fn max(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// One played ply: the move as applied and the FEN of the position after it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub applied: AppliedMove,
    pub fen: String,
}

/// Ordered record of a game, owned by its [`Game`](super::Game).
///
/// The starting position is counted once on creation, so a position first
/// reached by a move needs two more visits to reach a count of three.
#[derive(Clone, Debug)]
pub struct History {
    initial_fen: String,
    entries: Vec<HistoryEntry>,
    repetitions: RepetitionTable,
}

impl History {
    #[must_use]
    pub fn new(start: &Position) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(start.repetition_key());
        History {
            initial_fen: start.to_fen(),
            entries: Vec::new(),
            repetitions,
        }
    }

    /// Record a move and the position it produced. Returns how often that
    /// position has now occurred.
    pub fn record(&mut self, applied: AppliedMove, after: &Position) -> u32 {
        self.entries.push(HistoryEntry {
            applied,
            fen: after.to_fen(),
        });
        self.repetitions.increment(after.repetition_key())
    }

    /// How often `position` has occurred in this game.
    #[must_use]
    pub fn repetition_count(&self, position: &Position) -> u32 {
        self.repetitions.get(&position.repetition_key())
    }

    /// Highest occurrence count of any position in this game.
    #[must_use]
    pub fn max_repetitions(&self) -> u32 {
        self.repetitions.max()
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// FEN after `ply` plies; ply 0 is the starting position.
    #[must_use]
    pub fn fen_at(&self, ply: usize) -> Option<&str> {
        match ply {
            0 => Some(&self.initial_fen),
            _ => self.entries.get(ply - 1).map(|e| e.fen.as_str()),
        }
    }

    /// Number of plies played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn play(position: &mut Position, history: &mut History, uci: &str) -> u32 {
        let mv: Move = uci.parse().unwrap();
        let applied = position.make_move(mv).unwrap();
        history.record(applied, position)
    }

    #[test]
    fn test_repetition_table() {
        let mut table = RepetitionTable::new();
        assert_eq!(table.get("a"), 0);
        assert_eq!(table.increment("a".to_string()), 1);
        assert_eq!(table.increment("a".to_string()), 2);
        assert_eq!(table.increment("b".to_string()), 1);
        assert_eq!(table.max(), 2);
    }

    #[test]
    fn test_start_position_counted_once() {
        let position = Position::new();
        let history = History::new(&position);
        assert!(history.is_empty());
        assert_eq!(history.repetition_count(&position), 1);
        assert_eq!(history.fen_at(0), Some(position.to_fen().as_str()));
        assert_eq!(history.fen_at(1), None);
    }

    #[test]
    fn test_knight_shuffle_counts() {
        let mut position = Position::new();
        let mut history = History::new(&position);
        let mut counts = Vec::new();
        for _ in 0..2 {
            for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                counts.push(play(&mut position, &mut history, uci));
            }
        }
        assert_eq!(counts, [1, 1, 1, 2, 2, 2, 2, 3]);
        assert_eq!(history.max_repetitions(), 3);
        assert_eq!(history.len(), 8);
    }

    #[test]
    fn test_fen_at_tracks_plies() {
        let mut position = Position::new();
        let mut history = History::new(&position);
        play(&mut position, &mut history, "e2e4");
        play(&mut position, &mut history, "c7c5");
        assert_eq!(
            history.fen_at(1),
            Some("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
        );
        assert_eq!(history.fen_at(2), Some(position.to_fen().as_str()));
        assert_eq!(history.last().unwrap().applied.mv.to_string(), "c7c5");
    }
}
