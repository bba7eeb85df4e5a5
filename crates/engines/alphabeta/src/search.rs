//! Minimax search with alpha-beta pruning
//!
//! Terminal positions reached below the root are scored without being
//! counted as visited; every other position entered is counted, including
//! those evaluated at the depth limit.

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
/// # Returns
/// The same decision plain minimax would make. Ties keep the earliest move.
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
        // The root is a MAX node: the best score so far is its alpha
        let score = min_value(&child, best_score, INFINITY, 1, depth_limit, root, nodes);
        trace!(?mv, score, "root move");

        if score > best_score {
            best_score = score;
            best = mv;
            best_myopic = child.utility_for(root);
        }
    }

    debug!(?best, best_score, nodes = *nodes, "alpha-beta finished");
    Decision {
        best_move: best,
        myopic: best_myopic,
        farsighted: best_score,
        nodes: *nodes,
    }
}

fn max_value(
    pos: &Position,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    limit: u8,
    root: Side,
    nodes: &mut u64,
) -> i32 {
    if pos.is_terminal() {
        return pos.utility_for(root);
    }
    *nodes += 1;
    if depth >= limit {
        return pos.utility_for(root);
    }

    let mut moves = Vec::with_capacity(16);
    legal_moves_into(pos, &mut moves);

    let mut v = NEG_INFINITY;
    for mv in moves {
        v = v.max(min_value(&pos.apply(mv), alpha, beta, depth + 1, limit, root, nodes));
        if v >= beta {
            return v; // Beta cutoff
        }
        alpha = alpha.max(v);
    }
    v
}

fn min_value(
    pos: &Position,
    alpha: i32,
    mut beta: i32,
    depth: u8,
    limit: u8,
    root: Side,
    nodes: &mut u64,
) -> i32 {
    if pos.is_terminal() {
        return pos.utility_for(root);
    }
    *nodes += 1;
    if depth >= limit {
        return pos.utility_for(root);
    }

    let mut moves = Vec::with_capacity(16);
    legal_moves_into(pos, &mut moves);

    let mut v = INFINITY;
    for mv in moves {
        v = v.min(max_value(&pos.apply(mv), alpha, beta, depth + 1, limit, root, nodes));
        if v <= alpha {
            return v; // Alpha cutoff
        }
        beta = beta.min(v);
    }
    v
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
