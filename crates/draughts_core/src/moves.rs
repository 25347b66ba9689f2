use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::Tile;

/// A self-contained board transition: a starting tile, one or more
/// destination steps (one per hop of a jump chain), and the board that
/// results from applying those steps to the board supplied at
/// construction. The resulting board is computed once and never
/// re-derived.
///
/// Equality looks at the start tile and step sequence only, so a move
/// submitted by a player compares equal to the generated legal move it
/// names even though the two were built from different board clones.
#[derive(Clone, Debug)]
pub struct Move {
    start: Tile,
    steps: Vec<Tile>,
    board: Board,
}

impl Move {
    /// Builds a move by applying `steps` in order to a clone of `prior`:
    /// each hop relocates the occupant, crowns it if it reached the far
    /// row, and removes the jumped-over pieces when the hop spans two or
    /// more squares on both axes.
    ///
    /// Fails with [`Error::IllegalMove`] for an empty step list or a hop
    /// that starts from an empty square; it performs no rules check beyond
    /// that (legality is decided by comparing against the generated move
    /// list).
    pub fn new(start: Tile, steps: Vec<Tile>, prior: &Board) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::IllegalMove);
        }
        let mut board = prior.clone();
        let mut current = start;
        for &next in &steps {
            apply_step(&mut board, current, next)?;
            current = next;
        }
        Ok(Self {
            start,
            steps,
            board,
        })
    }

    /// Assembles a move whose resulting board was already materialized
    /// hop-by-hop during chain discovery.
    pub(crate) fn from_parts(start: Tile, steps: Vec<Tile>, board: Board) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            start,
            steps,
            board,
        }
    }

    pub fn start(&self) -> Tile {
        self.start
    }

    pub fn steps(&self) -> &[Tile] {
        &self.steps
    }

    /// The final landing tile, used when extending a jump chain.
    pub fn last_destination(&self) -> Tile {
        *self.steps.last().expect("a move has at least one step")
    }

    /// Number of steps: the ranking key for the majority-capture rule. For
    /// a jump chain this equals the number of captured pieces; for a
    /// single step it is 1 even though nothing was captured, so jump lists
    /// and step lists are never compared against each other.
    pub fn capture_count(&self) -> usize {
        self.steps.len()
    }

    /// The position after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the move, yielding the resulting board. The game loop uses
    /// this to adopt a chosen move as the new live position.
    pub fn into_board(self) -> Board {
        self.board
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.steps == other.steps
    }
}

impl Eq for Move {}

impl std::fmt::Display for Move {
    /// Prints in the console notation `move <a,3> to <c,5><e,7>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "move {} to ", self.start)?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Applies a single hop: relocate, crown, and clear the jumped-over path
/// on a capture. Shared by `Move::new` and chain discovery so a stored
/// resulting board always matches a manual re-application of the steps.
pub(crate) fn apply_step(board: &mut Board, from: Tile, to: Tile) -> Result<()> {
    let piece = board.piece_at(from).ok_or(Error::IllegalMove)?;
    board.set_piece(from, None);
    board.set_piece(to, Some(piece));
    board.crown();
    let spans_col = (to.col() as i16 - from.col() as i16).abs() >= 2;
    let spans_row = (to.row() as i16 - from.row() as i16).abs() >= 2;
    if spans_col && spans_row {
        board.remove_captured(from, to);
    }
    Ok(())
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
