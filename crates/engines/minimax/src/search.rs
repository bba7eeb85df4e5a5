//! Depth-limited minimax

use checkers_core::{
    legal_moves_into, terminal_decision, Decision, Position, Side, INFINITY, NEG_INFINITY,
};
use tracing::{debug, trace};

/// Searches the position and returns the best root move with its values.
///
/// # Arguments
/// * `pos` - The position to search; its side to move is the maximizer
/// * `depth_limit` - Plies below the root at which positions are evaluated
/// * `nodes` - Counter for nodes visited, the root included
///
/// Ties keep the earliest move in generation order.
pub fn pick_best_move(pos: &Position, depth_limit: u8, nodes: &mut u64) -> Decision {
    if let Some(decision) = terminal_decision(pos) {
        *nodes = decision.nodes;
        debug!(nodes = *nodes, value = decision.farsighted, "root is already over");
        return decision;
    }

    let root = pos.side_to_move();
    *nodes = 1;

    let mut moves = Vec::with_capacity(16);
    legal_moves_into(pos, &mut moves);

    let mut best = moves[0];
    let mut best_score = NEG_INFINITY;
    let mut best_myopic = 0;

    for mv in moves {
        let child = pos.apply(mv);
        let score = min_value(&child, 1, depth_limit, root, nodes);
        trace!(?mv, score, "root move");

        if score > best_score {
            best_score = score;
            best = mv;
            best_myopic = child.utility_for(root);
        }
    }

    debug!(?best, best_score, nodes = *nodes, "minimax finished");
    Decision {
        best_move: best,
        myopic: best_myopic,
        farsighted: best_score,
        nodes: *nodes,
    }
}

fn max_value(pos: &Position, depth: u8, limit: u8, root: Side, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if depth >= limit || pos.is_terminal() {
        return pos.utility_for(root);
    }

    let mut moves = Vec::with_capacity(16);
    legal_moves_into(pos, &mut moves);

    let mut best = NEG_INFINITY;
    for mv in moves {
        best = best.max(min_value(&pos.apply(mv), depth + 1, limit, root, nodes));
    }
    best
}

fn min_value(pos: &Position, depth: u8, limit: u8, root: Side, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if depth >= limit || pos.is_terminal() {
        return pos.utility_for(root);
    }

    let mut moves = Vec::with_capacity(16);
    legal_moves_into(pos, &mut moves);

    let mut best = INFINITY;
    for mv in moves {
        best = best.min(max_value(&pos.apply(mv), depth + 1, limit, root, nodes));
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
