//! Minimax Engine
//!
//! Exhaustive depth-limited minimax over the full game tree.
//! This is the baseline the alpha-beta engine is measured against.

mod search;

use checkers_core::{Decision, Engine, Position};

/// Minimax engine without pruning.
///
/// Every position down to the depth limit is visited, so `nodes` after a
/// search is the full tree size.
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
    fn search(&mut self, pos: &Position, depth_limit: u8) -> Decision {
        self.nodes = 0;
        search::pick_best_move(pos, depth_limit, &mut self.nodes)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}

pub use search::pick_best_move;
