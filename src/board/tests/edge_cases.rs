//! Edge case tests for special chess positions and moves.

use crate::board::{Color, Move, MoveError, MoveKind, Piece, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(position: &mut Position, uci: &str) {
    let mv: Move = uci.parse().unwrap();
    position.make_move(mv).unwrap();
}

#[test]
fn test_stalemate_position() {
    let mut board: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_fools_mate() {
    let mut board = Position::new();
    for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play(&mut board, uci);
    }
    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    for square in Square::all() {
        if board.piece_at(square).map_or(false, |p| p.color() == Color::White) {
            assert!(board.legal_destinations(square).is_empty(), "{square}");
        }
    }
}

#[test]
fn test_kingside_castle_moves_both_pieces() {
    let mut board: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
    let applied = board.make_move(Move::new(sq("e1"), sq("g1"))).unwrap();
    assert_eq!(applied.kind, MoveKind::Castle { kingside: true });

    let king = board.piece_at(sq("g1")).unwrap();
    let rook = board.piece_at(sq("f1")).unwrap();
    assert!(king.is(Color::White, Piece::King) && king.has_moved());
    assert!(rook.is(Color::White, Piece::Rook) && rook.has_moved());
    assert!(board.piece_at(sq("h1")).is_none());
    assert!(board.piece_at(sq("e1")).is_none());
    assert_eq!(board.castling_rights().to_string(), "kq");
}

#[test]
fn test_castle_through_attack_rejected_without_change() {
    let mut board: Position = "r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1".parse().unwrap();
    let before = board.clone();
    let result = board.make_move(Move::new(sq("e1"), sq("g1")));
    assert_eq!(
        result,
        Err(MoveError::IllegalMove {
            from: sq("e1"),
            to: sq("g1")
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_castle_after_rook_returns_home_is_rejected() {
    let mut board: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
    for uci in ["h1h2", "a8a7", "h2h1", "a7a8"] {
        play(&mut board, uci);
    }
    assert!(!board.is_legal(sq("e1"), sq("g1")));
    assert!(board.is_legal(sq("e1"), sq("c1")));
    assert!(!board.is_legal(sq("e8"), sq("c8")));
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut board: Position = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1"
        .parse()
        .unwrap();
    let applied = board.make_move(Move::new(sq("e5"), sq("d6"))).unwrap();
    assert_eq!(applied.kind, MoveKind::EnPassant);
    assert_eq!(applied.captured, Some(Piece::Pawn));
    assert!(board.piece_at(sq("d5")).is_none());
    assert!(board.piece_at(sq("d6")).unwrap().is(Color::White, Piece::Pawn));
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_en_passant_only_on_next_ply() {
    let mut board: Position = "4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1".parse().unwrap();
    play(&mut board, "d7d5");
    assert!(board.is_legal(sq("e5"), sq("d6")));

    let mut delayed = board.clone();
    play(&mut delayed, "e1e2");
    play(&mut delayed, "e8e7");
    assert!(!delayed.is_legal(sq("e5"), sq("d6")));
    assert_eq!(delayed.en_passant_target(), None);
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board: Position = "8/P7/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
    let moves = board.legal_moves();
    let knight_promo = moves
        .iter()
        .find(|m| m.promotion() == Some(Piece::Knight))
        .copied();
    assert!(knight_promo.is_some(), "Knight promotion should be available");

    board.make_move(knight_promo.unwrap()).unwrap();
    assert!(board.piece_at(sq("a8")).unwrap().is(Color::White, Piece::Knight));
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut board: Position = "8/P7/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
    let applied = board.make_move(Move::new(sq("a7"), sq("a8"))).unwrap();
    assert_eq!(applied.mv.promotion(), Some(Piece::Queen));
    assert!(board.piece_at(sq("a8")).unwrap().is(Color::White, Piece::Queen));
}

#[test]
fn test_promotion_to_king_or_pawn_rejected() {
    let mut board: Position = "8/P7/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
    for piece in [Piece::King, Piece::Pawn] {
        let result = board.make_move(Move::with_promotion(sq("a7"), sq("a8"), piece));
        assert_eq!(result, Err(MoveError::InvalidPromotion { piece }));
    }
    assert!(board.piece_at(sq("a7")).is_some());
}

#[test]
fn test_engine_usable_after_rejections() {
    let mut board = Position::new();
    assert!(board.make_move(Move::new(sq("e2"), sq("e5"))).is_err());
    assert!(board.make_move(Move::new(sq("d7"), sq("d5"))).is_err());
    play(&mut board, "e2e4");
    assert_eq!(board.side_to_move(), Color::Black);
}
