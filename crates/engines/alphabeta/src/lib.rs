//! Alpha-Beta Engine
//!
//! Minimax with alpha-beta pruning. Picks the same move and values as the
//! plain minimax engine while visiting no more nodes.

mod search;

use checkers_core::{Decision, Engine, Position};

/// Minimax engine with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, pos: &Position, depth_limit: u8) -> Decision {
        self.nodes = 0;
        search::pick_best_move(pos, depth_limit, &mut self.nodes)
    }

    fn name(&self) -> &str {
        "Alpha-Beta"
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}

pub use search::pick_best_move;
