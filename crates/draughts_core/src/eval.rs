use crate::board::Board;
use crate::movegen::legal_moves;
use crate::types::{Color, Rank};

/// Terminal sentinel for a position already won: the opponent has no legal
/// move. Perspective-absolute, never produced by material counting.
pub const WIN: i32 = 100;
/// Terminal sentinel for a position already lost: `color` has no legal
/// move.
pub const LOSS: i32 = -100;

/// Scores `board` from `color`'s perspective.
///
/// Terminal states are checked first: no legal move for `color` is an
/// immediate loss, no legal move for the opponent an immediate win. A side
/// with no pieces also has no moves, so elimination is covered by the same
/// check. Otherwise the score is the material differential: 1 per man and
/// 3 per king, own pieces positive.
pub fn score(board: &Board, color: Color) -> i32 {
    if legal_moves(board, color).is_empty() {
        return LOSS;
    }
    if legal_moves(board, color.other()).is_empty() {
        return WIN;
    }
    material(board, color)
}

fn material(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = match piece.rank {
                Rank::Man => 1,
                Rank::King => 3,
            };
            if piece.color == color {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
