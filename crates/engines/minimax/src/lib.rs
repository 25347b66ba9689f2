//! Minimax Draughts Engine
//!
//! Depth-limited minimax over full board snapshots with material
//! evaluation. This is the automated opponent of the console game.

mod search;

use draughts_core::{eval, Board, Color, Engine, SearchResult};
use rand::thread_rng;

pub use search::select_best;


/// Draughts engine using plain minimax.
///
/// This engine uses:
/// - Fixed-depth minimax over owned board snapshots per branch
/// - Material evaluation with win/loss sentinels
/// - A fair coin per tie between equal candidates
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, color: Color, depth: u8) -> SearchResult {
        self.nodes = 0;
        // Depth 0 would have nothing to select from; look at least one ply.
        let depth = depth.max(1);

        match search::select_best(board, depth, color, &mut thread_rng(), &mut self.nodes) {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score,
                depth,
                nodes: self.nodes,
            },
            None => SearchResult {
                best_move: None,
                score: eval::LOSS,
                depth,
                nodes: self.nodes,
            },
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
