//! Whole games played through the public session interface.

use chess_rules::game::{Game, MoveStatus};
use chess_rules::{Color, GameStatus, Piece, SharedGame, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play_line(game: &mut Game, line: &[&str]) -> GameStatus {
    let mut last = game.status();
    for uci in line {
        match game.attempt_uci(uci) {
            Ok(MoveStatus::Resolved(status)) => last = status,
            Ok(MoveStatus::AwaitingSelection) => panic!("{uci} awaits a promotion choice"),
            Err(err) => panic!("{uci} rejected: {err}"),
        }
    }
    last
}

#[test]
fn fools_mate_leaves_white_without_moves() {
    let mut game = Game::new();
    let status = play_line(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(status.is_checkmate(Color::White));
    assert!(status.in_check(Color::White));
    assert_eq!(status.winner(), Some(Color::Black));
    for square in Square::all() {
        assert!(game.legal_destinations(square).is_empty(), "{square}");
    }
}

#[test]
fn threefold_repetition_after_two_knight_cycles() {
    let mut game = Game::new();
    let cycle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    let status = play_line(&mut game, &cycle);
    assert!(!status.threefold_repetition());
    assert_eq!(game.history().repetition_count(game.position()), 2);

    let status = play_line(&mut game, &cycle);
    assert!(status.threefold_repetition());
    assert_eq!(game.history().repetition_count(game.position()), 3);
    assert_eq!(game.history().len(), 8);
}

#[test]
fn stalemate_is_a_draw_not_a_loss() {
    let mut game = Game::new();
    game.import_position("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").unwrap();
    let status = play_line(&mut game, &["f1f7"]);

    assert!(status.stalemate());
    assert!(!status.in_check(Color::Black));
    assert_eq!(status.checkmate(), None);
    assert!(status.is_draw());
    assert!(status.is_over());
}

#[test]
fn castling_through_attack_changes_nothing() {
    let mut game = Game::new();
    game.import_position("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1").unwrap();
    let before = game.export_position();

    assert!(!game.legal_destinations(sq("e1")).contains(&sq("g1")));
    assert!(game.attempt_move(sq("e1"), sq("g1"), None).is_err());
    assert_eq!(game.export_position(), before);
    assert!(game.history().is_empty());

    play_line(&mut game, &["e1c1"]);
    assert!(game.position().piece_at(sq("d1")).is_some());
}

#[test]
fn en_passant_window_is_one_ply() {
    let mut game = Game::new();
    play_line(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert!(game.legal_destinations(sq("e5")).contains(&sq("d6")));

    play_line(&mut game, &["h2h3", "h7h6"]);
    assert!(!game.legal_destinations(sq("e5")).contains(&sq("d6")));
}

#[test]
fn promotion_choice_from_bot_reply() {
    let mut game = Game::new();
    game.import_position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    play_line(&mut game, &["e7e8r"]);
    let rook = game.position().piece_at(sq("e8")).unwrap();
    assert_eq!(rook.kind(), Piece::Rook);
    assert_eq!(game.export_position(), "4R3/8/8/8/8/8/k7/4K3 b - - 0 1");
}

#[test]
fn shared_game_serves_a_polling_reader() {
    let shared = SharedGame::new(Game::new());
    let writer = shared.clone();
    let handle = std::thread::spawn(move || {
        writer.with(|game| play_line(game, &["d2d4", "d7d5", "c2c4"]));
    });
    handle.join().unwrap();

    assert_eq!(shared.status().side_to_move(), Color::Black);
    assert!(shared.legal_destinations(sq("d5")).contains(&sq("c4")));
}
