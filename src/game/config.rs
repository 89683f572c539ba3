#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Draw rules applied by a [`Game`](super::Game).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    /// Occurrences of one position that make a repetition draw
    pub repetition_limit: u32,
    /// Halfmove clock value (plies) that makes a fifty-move draw
    pub fifty_move_limit: u32,
    /// Report positions where neither side can mate
    pub detect_insufficient_material: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            repetition_limit: 3,
            fifty_move_limit: 100,
            detect_insufficient_material: true,
        }
    }
}
