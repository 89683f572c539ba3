//! Game session controller.

use std::fmt;

use super::promotion::{PendingPromotion, PromotionResolver};
use super::{GameError, GameStatus, History, RulesConfig};
use crate::board::{FenError, Move, MoveError, Piece, Position, Square};

/// Outcome of [`Game::attempt_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    /// The move was played; the status of the resulting position.
    Resolved(GameStatus),
    /// A promotion is waiting for [`Game::promotion`].
    AwaitingSelection,
}

/// A game in progress: the live position, its history and draw rules.
pub struct Game {
    position: Position,
    history: History,
    config: RulesConfig,
    resolver: Option<Box<dyn PromotionResolver + Send>>,
    pending: Option<PendingPromotion>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.position.to_fen())
            .field("plies", &self.history.len())
            .field("config", &self.config)
            .field("resolver", &self.resolver.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}

impl Game {
    /// A game from the standard initial position with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_position(Position::new(), config)
    }

    /// A game starting from an arbitrary position. That position is the
    /// first entry of the repetition count.
    #[must_use]
    pub fn from_position(position: Position, config: RulesConfig) -> Self {
        Game {
            history: History::new(&position),
            position,
            config,
            resolver: None,
            pending: None,
        }
    }

    /// Set up `fen` and play `moves`, given in long algebraic notation.
    /// Stops at the first position or move error.
    pub fn replay(fen: &str, moves: &[&str], config: RulesConfig) -> Result<Self, GameError> {
        let mut game = Self::from_position(Position::try_from_fen(fen)?, config);
        for uci in moves {
            game.attempt_uci(uci)?;
        }
        Ok(game)
    }

    /// Reset to the initial position with a fresh history. The rules and
    /// promotion resolver are kept.
    pub fn new_game(&mut self) {
        self.position = Position::new();
        self.history = History::new(&self.position);
        self.pending = None;
        log_info!("new game started");
    }

    /// Register the source of promotion choices for moves that name none.
    pub fn set_promotion_resolver<R>(&mut self, resolver: R)
    where
        R: PromotionResolver + Send + 'static,
    {
        self.resolver = Some(Box::new(resolver));
    }

    pub fn clear_promotion_resolver(&mut self) {
        self.resolver = None;
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending
    }

    /// Squares the piece on `from` may move to. Empty for empty squares, for
    /// the opponent's pieces and while a promotion is pending.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        if self.pending.is_some() {
            return Vec::new();
        }
        let to_move = self.position.side_to_move();
        if self.position.piece_at(from).map_or(true, |p| p.color() != to_move) {
            return Vec::new();
        }
        self.position.legal_destinations(from)
    }

    /// Play `from` to `to` for the side to move.
    ///
    /// A promotion without an explicit piece asks the registered resolver.
    /// If the resolver defers, the move waits for [`Game::promotion`]; with
    /// no resolver the pawn becomes a queen.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveStatus, MoveError> {
        if let Some(pending) = self.pending {
            return Err(MoveError::PromotionPending {
                from: pending.from,
                to: pending.to,
            });
        }
        let piece = self.position.validate_move(from, to)?;

        let choice = match promotion {
            None if self.position.needs_promotion(from, to) => {
                let selected = match self.resolver.as_mut() {
                    Some(resolver) => resolver.select(piece.color(), from, to),
                    None => {
                        log_debug!("no promotion selection registered, promoting to queen");
                        Some(Piece::Queen)
                    }
                };
                if selected.is_none() {
                    log_debug!("promotion {from}{to} awaiting selection");
                    self.pending = Some(PendingPromotion {
                        from,
                        to,
                        color: piece.color(),
                    });
                    return Ok(MoveStatus::AwaitingSelection);
                }
                selected
            }
            other => other,
        };

        let mv = match choice {
            Some(kind) => Move::with_promotion(from, to, kind),
            None => Move::new(from, to),
        };
        self.commit(mv).map(MoveStatus::Resolved)
    }

    /// Complete the pending promotion on `from` to `to` with `kind`.
    ///
    /// An invalid kind is rejected and the promotion stays pending.
    pub fn promotion(&mut self, from: Square, to: Square, kind: Piece) -> Result<GameStatus, MoveError> {
        match self.pending {
            Some(pending) if pending.from == from && pending.to == to => {
                let status = self.commit(Move::with_promotion(from, to, kind))?;
                self.pending = None;
                Ok(status)
            }
            _ => Err(MoveError::NoPendingPromotion { from, to }),
        }
    }

    /// Abandon a pending promotion. The pawn stays where it was.
    pub fn cancel_promotion(&mut self) -> Option<PendingPromotion> {
        self.pending.take()
    }

    /// Play a move given in long algebraic notation, such as `e2e4` or
    /// `e7e8q`.
    pub fn attempt_uci(&mut self, uci: &str) -> Result<MoveStatus, GameError> {
        let mv: Move = uci.parse()?;
        Ok(self.attempt_move(mv.from(), mv.to(), mv.promotion())?)
    }

    fn commit(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        let applied = self.position.make_move(mv)?;
        let occurrences = self.history.record(applied, &self.position);
        let status = self.status();

        if occurrences > 1 {
            log_debug!("position repeated {occurrences} times");
        }
        if let Some(loser) = status.checkmate() {
            log_info!("{loser} is checkmated after {}", applied.mv);
        } else if status.is_draw() {
            log_info!("draw after {}: {status:?}", applied.mv);
        }
        Ok(status)
    }

    /// Check, mate and draw flags for the current position.
    pub fn status(&mut self) -> GameStatus {
        GameStatus::evaluate(&mut self.position, &self.history, &self.config)
    }

    /// FEN of the current position.
    #[must_use]
    pub fn export_position(&self) -> String {
        self.position.to_fen()
    }

    /// Replace the game with the position in `fen` and a fresh history. On
    /// error the game is left unchanged.
    pub fn import_position(&mut self, fen: &str) -> Result<(), FenError> {
        let position = Position::try_from_fen(fen).map_err(|err| {
            log_warn!("rejected position import: {err}");
            err
        })?;
        self.history = History::new(&position);
        self.position = position;
        self.pending = None;
        log_info!("imported position {fen}");
        Ok(())
    }

    /// The position after `ply` plies of this game, for review. Ply 0 is the
    /// starting position. The live game is not affected.
    #[must_use]
    pub fn position_at(&self, ply: usize) -> Option<Position> {
        self.history.fen_at(ply).and_then(|fen| fen.parse().ok())
    }
}
