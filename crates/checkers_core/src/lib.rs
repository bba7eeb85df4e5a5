pub mod board;
pub mod config;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use eval::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use search::*;
pub use types::*;

use serde::{Deserialize, Serialize};

// =============================================================================
// Engine trait, implemented by the minimax and alpha-beta engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen root move (`Pass` when the side to move is stuck or the game is over)
    pub best_move: Move,
    /// Utility of the position right after `best_move`
    pub myopic: i32,
    /// Backed-up value of `best_move` after the depth-limited search
    pub farsighted: i32,
    /// Number of tree nodes visited
    pub nodes: u64,
}

/// Trait that all search engines must implement.
///
/// Values are always reported from the point of view of the side to move
/// at the root.
pub trait Engine: Send {
    /// Search the position down to `depth_limit` plies.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth_limit` - Maximum search depth in plies
    ///
    /// # Returns
    /// Decision containing the chosen move, its values and the node count
    fn search(&mut self, pos: &Position, depth_limit: u8) -> Decision;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Nodes visited by the most recent search
    fn nodes(&self) -> u64;
}
