use super::*;

fn tile(board: &Board, col: u8, row: u8) -> Tile {
    board.try_tile(col, row).expect("valid dark square")
}

fn steps_of(mv: &Move) -> Vec<(u8, u8)> {
    mv.steps().iter().map(|t| (t.col(), t.row())).collect()
}

#[test]
fn standard_opening_has_nine_moves_per_side() {
    let board = Board::standard(10);
    assert_eq!(legal_moves(&board, Color::White).len(), 9);
    assert_eq!(legal_moves(&board, Color::Black).len(), 9);
}

#[test]
fn generation_order_is_stable() {
    let board = Board::standard(10);
    assert_eq!(
        legal_moves(&board, Color::White),
        legal_moves(&board, Color::White)
    );
}

#[test]
fn man_steps_diagonally_forward_only() {
    let mut board = Board::new(10);
    board.set(5, 5, Piece::man(Color::White)).unwrap();
    board.set(1, 9, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    let landings: Vec<_> = moves.iter().map(steps_of).collect();
    assert_eq!(landings, vec![vec![(4, 6)], vec![(6, 6)]]);

    let moves = legal_moves(&board, Color::Black);
    let landings: Vec<_> = moves.iter().map(steps_of).collect();
    assert_eq!(landings, vec![vec![(2, 8)]]);
}

#[test]
fn man_steps_are_blocked_by_any_piece() {
    let mut board = Board::new(10);
    board.set(5, 5, Piece::man(Color::White)).unwrap();
    board.set(4, 6, Piece::man(Color::White)).unwrap();
    board.set(1, 9, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    // (5,5) can only go right; (4,6) still has both steps.
    assert!(moves.contains(&Move::new(tile(&board, 5, 5), vec![tile(&board, 6, 6)], &board).unwrap()));
    assert!(!moves.iter().any(|m| m.start() == tile(&board, 5, 5) && steps_of(m) == [(4, 6)]));
}

#[test]
fn simple_jump_is_found_and_mandatory() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    let moves = legal_moves(&board, Color::Black);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].start(), tile(&board, 3, 3));
    assert_eq!(steps_of(&moves[0]), [(5, 5)]);
    assert_eq!(moves[0].board().get(4, 4).unwrap(), None);
}

#[test]
fn forced_double_jump_is_one_chained_move() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    board.set(6, 6, Piece::man(Color::White)).unwrap();
    let moves = legal_moves(&board, Color::Black);
    assert_eq!(moves.len(), 1);
    assert_eq!(steps_of(&moves[0]), [(5, 5), (7, 7)]);
    assert_eq!(moves[0].capture_count(), 2);
    assert_eq!(moves[0].board().get(4, 4).unwrap(), None);
    assert_eq!(moves[0].board().get(6, 6).unwrap(), None);
}

#[test]
fn majority_capture_discards_shorter_chains() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    // One single capture to the left, a double chain to the right.
    board.set(2, 4, Piece::man(Color::White)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    board.set(6, 6, Piece::man(Color::White)).unwrap();
    let moves = legal_moves(&board, Color::Black);
    assert_eq!(moves.len(), 1);
    assert_eq!(steps_of(&moves[0]), [(5, 5), (7, 7)]);
    assert!(moves.iter().all(|m| m.capture_count() == 2));
}

#[test]
fn equal_length_chains_are_all_returned() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    // From (5,5) the chain may continue over either enemy.
    board.set(4, 6, Piece::man(Color::White)).unwrap();
    board.set(6, 6, Piece::man(Color::White)).unwrap();
    let moves = legal_moves(&board, Color::Black);
    let mut landings: Vec<_> = moves.iter().map(steps_of).collect();
    landings.sort();
    assert_eq!(landings, vec![vec![(5, 5), (3, 7)], vec![(5, 5), (7, 7)]]);
}

#[test]
fn man_chain_may_turn_corners() {
    let mut board = Board::new(10);
    board.set(5, 5, Piece::man(Color::Black)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    board.set(2, 4, Piece::man(Color::White)).unwrap();
    let moves = legal_moves(&board, Color::Black);
    assert_eq!(moves.len(), 1);
    assert_eq!(steps_of(&moves[0]), [(3, 3), (1, 5)]);
}

#[test]
fn chain_stops_when_the_man_is_crowned() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    board.set(2, 2, Piece::man(Color::White)).unwrap();
    // A king landing on (1,1) could slide-capture (4,4), but the freshly
    // crowned man must stop.
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    let moves = legal_moves(&board, Color::Black);
    assert!(moves.iter().all(|m| m.capture_count() == 1));
    let crowning: Vec<_> = moves
        .iter()
        .filter(|m| steps_of(m) == [(1, 1)])
        .collect();
    assert_eq!(crowning.len(), 1);
    assert_eq!(
        crowning[0].board().get(1, 1).unwrap(),
        Some(Piece::king(Color::Black))
    );
}

#[test]
fn king_slides_any_distance_on_an_open_board() {
    let mut board = Board::new(10);
    board.set(5, 5, Piece::king(Color::White)).unwrap();
    board.set(10, 2, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    // 5 + 4 + 4 + 4 destinations along the four diagonals.
    assert_eq!(moves.len(), 17);
    assert!(moves.iter().all(|m| m.steps().len() == 1));
}

#[test]
fn king_slides_stop_at_the_first_blocker() {
    let mut board = Board::new(10);
    board.set(1, 1, Piece::king(Color::White)).unwrap();
    board.set(4, 4, Piece::man(Color::White)).unwrap();
    board.set(10, 10, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    let white_king_moves: Vec<_> = moves
        .iter()
        .filter(|m| m.start() == tile(&board, 1, 1))
        .map(steps_of)
        .collect();
    assert_eq!(white_king_moves, vec![vec![(2, 2)], vec![(3, 3)]]);
}

#[test]
fn king_capture_offers_every_landing_beyond_the_enemy() {
    let mut board = Board::new(10);
    board.set(1, 1, Piece::king(Color::White)).unwrap();
    board.set(4, 4, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    let mut landings: Vec<_> = moves.iter().map(steps_of).collect();
    landings.sort();
    assert_eq!(
        landings,
        vec![
            vec![(5, 5)],
            vec![(6, 6)],
            vec![(7, 7)],
            vec![(8, 8)],
            vec![(9, 9)],
            vec![(10, 10)],
        ]
    );
    for mv in &moves {
        assert_eq!(mv.board().get(4, 4).unwrap(), None);
    }
}

#[test]
fn king_chain_continues_from_the_chosen_landing() {
    let mut board = Board::new(10);
    board.set(1, 1, Piece::king(Color::White)).unwrap();
    board.set(4, 4, Piece::man(Color::Black)).unwrap();
    board.set(6, 6, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    // Only (5,5) lands before the second enemy; from there the chain
    // continues over (6,6) to any of the four squares beyond.
    assert_eq!(moves.len(), 4);
    for mv in &moves {
        assert_eq!(mv.capture_count(), 2);
        assert_eq!(mv.steps()[0], tile(&board, 5, 5));
        assert_eq!(mv.board().get(4, 4).unwrap(), None);
        assert_eq!(mv.board().get(6, 6).unwrap(), None);
    }
}

#[test]
fn king_cannot_hop_two_adjacent_enemies() {
    let mut board = Board::new(10);
    board.set(1, 1, Piece::king(Color::White)).unwrap();
    board.set(2, 2, Piece::man(Color::Black)).unwrap();
    board.set(3, 3, Piece::man(Color::Black)).unwrap();
    // No landing square between the enemies: the direction is dead, and
    // the king has nowhere else to go.
    assert!(legal_moves(&board, Color::White).is_empty());
}

#[test]
fn king_capture_is_blocked_by_a_friendly_piece_first() {
    let mut board = Board::new(10);
    board.set(1, 1, Piece::king(Color::White)).unwrap();
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    board.set(5, 5, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    let king_moves: Vec<_> = moves
        .iter()
        .filter(|m| m.start() == tile(&board, 1, 1))
        .map(steps_of)
        .collect();
    assert_eq!(king_moves, vec![vec![(2, 2)]]);
}

#[test]
fn captures_suppress_all_single_steps() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    board.set(8, 2, Piece::man(Color::White)).unwrap();
    board.set(4, 4, Piece::man(Color::Black)).unwrap();
    let moves = legal_moves(&board, Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(steps_of(&moves[0]), [(5, 5)]);
}

#[test]
fn side_with_no_pieces_has_no_moves() {
    let mut board = Board::new(10);
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    assert!(legal_moves(&board, Color::Black).is_empty());
    assert!(!legal_moves(&board, Color::White).is_empty());
}

#[test]
fn fully_blocked_side_has_no_moves() {
    let mut board = Board::new(10);
    // Black man in the corner it moves toward, jump landing occupied.
    board.set(1, 1, Piece::man(Color::Black)).unwrap();
    board.set(2, 2, Piece::man(Color::White)).unwrap();
    board.set(3, 3, Piece::man(Color::White)).unwrap();
    assert!(legal_moves(&board, Color::Black).is_empty());
}

#[test]
fn resulting_boards_keep_pieces_on_dark_squares() {
    let mut board = Board::standard(10);
    board.set(5, 5, Piece::king(Color::White)).unwrap();
    for color in [Color::White, Color::Black] {
        for mv in legal_moves(&board, color) {
            for (t, _) in mv.board().pieces() {
                assert_eq!((t.col() + t.row()) % 2, 0);
            }
        }
    }
}
