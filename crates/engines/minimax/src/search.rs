use draughts_core::{eval, legal_moves, Board, Color, Move};
use rand::Rng;

/// Picks the best immediate move for `color` on `board`, looking `depth`
/// plies ahead.
///
/// Returns `None` when the side has no legal move (a terminal position the
/// caller detects via the evaluator). A single legal move is returned
/// directly without searching. Otherwise every candidate's resulting board
/// is valued by a depth-limited minimax in which `color`'s turns maximize
/// and the opponent's minimize, and equal-valued candidates are settled by
/// a fair coin per tie rather than first-wins.
///
/// The returned move is always the move to play now; the deeper simulation
/// only supplies its value, which is returned alongside it.
pub fn select_best<R: Rng>(
    board: &Board,
    depth: u8,
    color: Color,
    rng: &mut R,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut moves = legal_moves(board, color);
    if moves.is_empty() {
        return None;
    }
    if moves.len() == 1 {
        let only = moves.remove(0);
        *nodes += 1;
        let value = eval::score(only.board(), color);
        return Some((only, value));
    }

    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let value = branch_value(mv.board(), depth.saturating_sub(1), color.other(), color, nodes);
        best = match best {
            None => Some((mv, value)),
            Some((_, incumbent)) if value > incumbent => Some((mv, value)),
            Some((_, incumbent)) if value == incumbent && rng.gen_bool(0.5) => Some((mv, value)),
            keep => keep,
        };
    }
    best
}

/// Value of `board` with `to_move` to play, from `color`'s perspective.
/// Leaves are exhausted depth, a side with no reply (the evaluator turns
/// that into a win/loss sentinel), or a single forced reply, which is
/// followed without costing a ply of branching. Ties between equal
/// subtree values collapse to the same number, so only the root needs the
/// coin.
fn branch_value(board: &Board, depth: u8, to_move: Color, color: Color, nodes: &mut u64) -> i32 {
    let moves = legal_moves(board, to_move);
    if moves.is_empty() || depth == 0 {
        *nodes += 1;
        return eval::score(board, color);
    }
    if moves.len() == 1 {
        *nodes += 1;
        return eval::score(moves[0].board(), color);
    }

    let maximizing = to_move == color;
    let mut best: Option<i32> = None;
    for mv in &moves {
        let value = branch_value(mv.board(), depth - 1, to_move.other(), color, nodes);
        best = Some(match best {
            None => value,
            Some(b) if maximizing => b.max(value),
            Some(b) => b.min(value),
        });
    }
    best.expect("non-empty move list produced a value")
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
