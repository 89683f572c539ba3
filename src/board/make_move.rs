//! Committing moves, including castling, en passant and promotion.

use super::error::MoveError;
use super::movegen::castling_rook_squares;
use super::{AppliedMove, BoardPiece, Color, Move, MoveKind, Piece, Position, Square};

impl Position {
    /// Check that `from` holds a piece of the side to move that may legally
    /// go to `to`. Returns that piece.
    pub(crate) fn validate_move(&mut self, from: Square, to: Square) -> Result<BoardPiece, MoveError> {
        let piece = *self
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                square: from,
                to_move: self.side_to_move,
            });
        }
        if !self.is_legal(from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }

    /// Play a legal move for the side to move.
    ///
    /// A pawn reaching its last rank becomes `mv.promotion()`, or a queen when
    /// no kind is given. Nothing changes when an error is returned.
    pub fn make_move(&mut self, mv: Move) -> Result<AppliedMove, MoveError> {
        let (from, to) = (mv.from(), mv.to());
        let piece = self.validate_move(from, to)?;

        let promotion = match (self.needs_promotion(from, to), mv.promotion()) {
            (true, None) => Some(Piece::Queen),
            (true, Some(kind)) if kind.is_promotion_choice() => Some(kind),
            (_, Some(kind)) => return Err(MoveError::InvalidPromotion { piece: kind }),
            (false, None) => None,
        };
        Ok(self.apply(piece, from, to, promotion))
    }

    fn apply(
        &mut self,
        piece: BoardPiece,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> AppliedMove {
        let color = piece.color();
        let (dr, df) = from.delta(to);

        let mut captured = self.grid.place(to, None).map(|p| p.kind());
        let mut kind = if captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };

        match piece.kind() {
            Piece::Pawn if df != 0 && captured.is_none() => {
                if let Some(victim) = self.en_passant_victim(color, to) {
                    captured = self.grid.place(victim, None).map(|p| p.kind());
                    kind = MoveKind::EnPassant;
                }
            }
            Piece::Pawn if dr.abs() == 2 => kind = MoveKind::DoublePawnPush,
            Piece::King if df.abs() == 2 => {
                let kingside = df > 0;
                self.relocate_castling_rook(color, kingside);
                kind = MoveKind::Castle { kingside };
            }
            _ => {}
        }

        let mut mover = self.grid.place(from, None).unwrap_or(piece);
        mover.has_moved = true;
        mover.just_double_stepped = kind == MoveKind::DoublePawnPush;
        if let Some(new_kind) = promotion {
            kind = MoveKind::Promotion {
                piece: new_kind,
                capture: captured.is_some(),
            };
            mover = BoardPiece::new(color, new_kind);
            mover.has_moved = true;
        }
        self.grid.place(to, Some(mover));

        // En passant rights last one ply
        for pawn in self.grid.pieces_mut() {
            if pawn.square() != to {
                pawn.just_double_stepped = false;
            }
        }

        let mv = match promotion {
            Some(new_kind) => Move::with_promotion(from, to, new_kind),
            None => Move::new(from, to),
        };
        let applied = AppliedMove {
            mv,
            color,
            piece: piece.kind(),
            captured,
            kind,
        };

        // Counters saturate rather than overflow on imported extremes
        if applied.piece == Piece::Pawn || applied.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        log_debug!("{color} played {mv} ({kind:?})");
        applied
    }

    fn relocate_castling_rook(&mut self, color: Color, kingside: bool) {
        let (rook_from, rook_to) = castling_rook_squares(color, kingside);
        let mut rook = self.grid.place(rook_from, None);
        if let Some(rook) = rook.as_mut() {
            rook.has_moved = true;
        }
        self.grid.place(rook_to, rook);
    }
}
