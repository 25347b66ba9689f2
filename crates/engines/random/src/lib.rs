//! Random Move Draughts Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - A beginner-level opponent in the console game
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use draughts_core::{legal_moves, Board, Color, Engine, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// A draughts engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. Mandatory captures still come out of
/// the generator, so it follows the rules, just not a plan.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, color: Color, _depth: u8) -> SearchResult {
        let moves = legal_moves(board, color);
        let best_move = moves.choose(&mut thread_rng()).cloned();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
