use crate::{types::*, Decision};

/// Board label of a square: column letter `A`..`H`, then rank `8 - row`,
/// so the top row of the configuration file is rank 8.
pub fn square_label(sq: Square) -> String {
    let file = (b'A' + sq.col) as char;
    let rank = (b'0' + (BOARD_SIZE - sq.row)) as char;
    format!("{file}{rank}")
}

pub fn move_label(mv: Move) -> String {
    match mv {
        Move::Pass => "pass".to_string(),
        Move::Step { from, to } => format!("{}-{}", square_label(from), square_label(to)),
    }
}

/// Four-line output: move, myopic value, farsighted value, node count.
pub fn format_decision(decision: &Decision) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        move_label(decision.best_move),
        decision.myopic,
        decision.farsighted,
        decision.nodes
    )
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
