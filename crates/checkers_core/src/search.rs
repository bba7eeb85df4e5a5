//! Root policy shared by every engine

use crate::{board::Position, types::Move, Decision};

/// Node count reported when the root has pieces of only one side.
pub const ELIMINATION_ROOT_NODES: u64 = 1;

/// Node count reported when the root is over because nobody can move.
pub const STALEMATE_ROOT_NODES: u64 = 3;

/// Score bounds; every real evaluation lies strictly between them (see [`crate::eval::MAX_UTILITY`]).
pub const NEG_INFINITY: i32 = i32::MIN;
pub const INFINITY: i32 = i32::MAX;

/// Decision for a root that is already over, or `None` if there is a game to search.
///
/// The engine passes and both values are the root utility for the side to move.
pub fn terminal_decision(pos: &Position) -> Option<Decision> {
    let nodes = if pos.is_single_side() {
        ELIMINATION_ROOT_NODES
    } else if pos.is_terminal() || pos.is_stalemated() {
        STALEMATE_ROOT_NODES
    } else {
        return None;
    };

    let value = pos.utility_for(pos.side_to_move());
    Some(Decision {
        best_move: Move::Pass,
        myopic: value,
        farsighted: value,
        nodes,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
