use super::*;
use crate::types::Piece;

#[test]
fn standard_setup_is_balanced() {
    let board = Board::standard(10);
    assert_eq!(score(&board, Color::White), 0);
    assert_eq!(score(&board, Color::Black), 0);
}

#[test]
fn material_weighs_kings_three_to_one() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    board.set(5, 3, Piece::man(Color::White)).unwrap();
    board.set(6, 6, Piece::king(Color::Black)).unwrap();
    assert_eq!(score(&board, Color::White), -1);
    assert_eq!(score(&board, Color::Black), 1);
}

#[test]
fn material_scores_negate_between_perspectives() {
    let mut board = Board::new(10);
    board.set(2, 2, Piece::king(Color::White)).unwrap();
    board.set(4, 2, Piece::man(Color::White)).unwrap();
    board.set(7, 7, Piece::man(Color::Black)).unwrap();
    assert_eq!(score(&board, Color::White), 3);
    assert_eq!(score(&board, Color::Black), -3);
}

#[test]
fn eliminated_side_scores_the_loss_sentinel() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    assert_eq!(score(&board, Color::Black), LOSS);
    assert_eq!(score(&board, Color::White), WIN);
}

#[test]
fn loss_takes_precedence_when_neither_side_can_move() {
    let board = Board::new(10);
    assert_eq!(score(&board, Color::White), LOSS);
    assert_eq!(score(&board, Color::Black), LOSS);
}

#[test]
fn terminal_sentinels_override_material() {
    let mut board = Board::new(10);
    // Black holds the stronger material but is completely blocked in the
    // corner it moves toward.
    board.set(1, 1, Piece::king(Color::Black)).unwrap();
    board.set(2, 2, Piece::man(Color::White)).unwrap();
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    assert!(legal_moves(&board, Color::Black).is_empty());
    assert_eq!(score(&board, Color::Black), LOSS);
    assert_eq!(score(&board, Color::White), WIN);
}
