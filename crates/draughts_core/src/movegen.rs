use crate::board::Board;
use crate::moves::{apply_step, Move};
use crate::types::{Color, Piece, Rank, Tile};

const DIAGONALS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Generates the full legal move list for `color`.
///
/// Captures are mandatory: if any jump exists, only jumps are returned,
/// trimmed to the maximal capture count (majority-capture rule). Otherwise
/// every single-step move is returned. An empty result is the terminal
/// condition for that side, not an error.
///
/// Order is stable for a given position: pieces are visited row-major and
/// directions in a fixed order, so tests can rely on deterministic output.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let jumps = jump_moves(board, color);
    if !jumps.is_empty() {
        return trim_to_majority(jumps);
    }
    step_moves(board, color)
}

/// Every maximal jump chain available to `color`, before the majority
/// trim. Each discovered single jump is extended recursively on its own
/// resulting board; only the fully extended chains are kept.
fn jump_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    for (tile, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for landing in jump_landings(board, tile, piece) {
            let mut next = board.clone();
            apply_step(&mut next, tile, landing).expect("jump starts from an occupied tile");
            let crowned = was_crowned(piece, &next, landing);
            extend_chain(tile, vec![landing], next, crowned, &mut out);
        }
    }
    out
}

/// Probes the chain's resulting board for a further jump from the landed
/// tile. A chain that was just crowned stops immediately: a newly crowned
/// piece does not continue jumping in the same turn. When no extension
/// exists the chain is finalized as a move.
fn extend_chain(start: Tile, steps: Vec<Tile>, board: Board, crowned: bool, out: &mut Vec<Move>) {
    let from = *steps.last().expect("a chain has at least one landing");
    let piece = board
        .piece_at(from)
        .expect("the jumping piece sits on its landing tile");
    let continuations = if crowned {
        Vec::new()
    } else {
        jump_landings(&board, from, piece)
    };
    if continuations.is_empty() {
        out.push(Move::from_parts(start, steps, board));
        return;
    }
    for landing in continuations {
        let mut next = board.clone();
        apply_step(&mut next, from, landing).expect("jump starts from an occupied tile");
        let now_crowned = was_crowned(piece, &next, landing);
        let mut chain = steps.clone();
        chain.push(landing);
        extend_chain(start, chain, next, now_crowned, out);
    }
}

fn was_crowned(before: Piece, board: &Board, landing: Tile) -> bool {
    before.rank == Rank::Man
        && matches!(board.piece_at(landing), Some(p) if p.rank == Rank::King)
}

/// All landing tiles for a capture by the piece on `from`, across the four
/// diagonal directions.
///
/// A man captures an adjacent enemy when the square directly beyond it is
/// empty. A king slides: the first piece met in a direction must be an
/// enemy, and every empty square beyond it up to the next blocker is a
/// legal landing; a friendly piece first, or a second enemy before an
/// empty square, invalidates the direction.
fn jump_landings(board: &Board, from: Tile, piece: Piece) -> Vec<Tile> {
    let mut landings = Vec::new();
    let (c, r) = (from.col() as i16, from.row() as i16);
    for (dc, dr) in DIAGONALS {
        match piece.rank {
            Rank::Man => {
                let over = board.tile(c + dc, r + dr);
                let land = board.tile(c + 2 * dc, r + 2 * dr);
                if let (Some(over), Some(land)) = (over, land) {
                    let enemy =
                        matches!(board.piece_at(over), Some(p) if p.color != piece.color);
                    if enemy && board.piece_at(land).is_none() {
                        landings.push(land);
                    }
                }
            }
            Rank::King => {
                let mut step = 1;
                let enemy_step = loop {
                    match board.tile(c + dc * step, r + dr * step) {
                        None => break None,
                        Some(t) => match board.piece_at(t) {
                            None => step += 1,
                            Some(p) if p.color != piece.color => break Some(step),
                            Some(_) => break None,
                        },
                    }
                };
                if let Some(enemy_step) = enemy_step {
                    let mut s = enemy_step + 1;
                    while let Some(t) = board.tile(c + dc * s, r + dr * s) {
                        if board.piece_at(t).is_some() {
                            break;
                        }
                        landings.push(t);
                        s += 1;
                    }
                }
            }
        }
    }
    landings
}

fn trim_to_majority(mut jumps: Vec<Move>) -> Vec<Move> {
    let max = jumps
        .iter()
        .map(Move::capture_count)
        .max()
        .unwrap_or(0);
    jumps.retain(|m| m.capture_count() == max);
    jumps
}

/// Non-capturing moves: men one square diagonally toward the opponent's
/// edge, kings any unobstructed distance along all four diagonals.
fn step_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    for (tile, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        let (c, r) = (tile.col() as i16, tile.row() as i16);
        match piece.rank {
            Rank::Man => {
                for dc in [-1, 1] {
                    if let Some(to) = board.tile(c + dc, r + color.forward()) {
                        if board.piece_at(to).is_none() {
                            let mv = Move::new(tile, vec![to], board)
                                .expect("step from an occupied tile");
                            out.push(mv);
                        }
                    }
                }
            }
            Rank::King => {
                for (dc, dr) in DIAGONALS {
                    let mut s = 1;
                    while let Some(to) = board.tile(c + dc * s, r + dr * s) {
                        if board.piece_at(to).is_some() {
                            break;
                        }
                        let mv = Move::new(tile, vec![to], board)
                            .expect("step from an occupied tile");
                        out.push(mv);
                        s += 1;
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
