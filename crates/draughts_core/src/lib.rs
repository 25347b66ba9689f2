pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod moves;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::{Board, DEFAULT_SIZE};
pub use error::{Error, Result};
pub use movegen::legal_moves;
pub use moves::Move;
pub use types::{Color, Piece, Rank, Tile};

// =============================================================================
// Engine trait, implemented by the automated opponents (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen branch, from the searching side's
    /// perspective; `eval::WIN`/`eval::LOSS` mark terminal outcomes
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of positions scored (for stats)
    pub nodes: u64,
}

/// Trait implemented by every automated opponent.
///
/// Engines are stateless over the position: the caller owns the board and
/// the turn, and hands both in on every call.
pub trait Engine {
    /// Pick a move for `color` on `board`, looking ahead `depth` plies.
    fn search(&mut self, board: &Board, color: Color, depth: u8) -> SearchResult;

    /// The engine's display name for the console driver.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
