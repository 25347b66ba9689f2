use super::*;
use draughts_core::Piece;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::default();

    let result = engine.search(&board, Color::Black, 1);

    let best = result.best_move.expect("opening has moves");
    assert!(legal_moves(&board, Color::Black).contains(&best));
}

#[test]
fn random_engine_handles_terminal_positions() {
    let mut engine = RandomEngine::new();
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::White)).unwrap();

    let result = engine.search(&board, Color::Black, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_obeys_mandatory_captures() {
    let mut engine = RandomEngine::new();
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();

    for _ in 0..10 {
        let result = engine.search(&board, Color::Black, 1);
        let best = result.best_move.expect("a capture is available");
        assert_eq!(best.capture_count(), 1);
        assert_eq!(best.board().get(4, 4).unwrap(), None);
    }
}
