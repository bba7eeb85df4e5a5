//! Row-weighted position evaluation

use crate::types::{Piece, Side, BOARD_SIZE};

/// Evaluations of an accepted configuration stay within `±MAX_UTILITY`,
/// strictly inside the search bounds.
pub const MAX_UTILITY: i32 = i32::MAX / 2;

/// Largest `|evaluate|` any placement of `pieces` pieces can reach under `row_weights`.
pub fn utility_bound(pieces: u64, row_weights: &[i32; 8]) -> u64 {
    let heaviest = row_weights
        .iter()
        .map(|w| w.unsigned_abs())
        .max()
        .unwrap_or(0);
    pieces.saturating_mul(u64::from(heaviest))
}

/// Raw value of a single piece.
///
/// A Star piece on row `r` is worth `row_weights[7 - r]`, a Circle piece
/// `row_weights[r]`, so a piece gains value as it nears the edge it scores on.
#[inline]
pub fn piece_value(piece: &Piece, row_weights: &[i32; 8]) -> i32 {
    let row = piece.square.row as usize;
    match piece.side {
        Side::Star => row_weights[BOARD_SIZE as usize - 1 - row],
        Side::Circle => row_weights[row],
    }
}

/// Evaluates a piece set from `perspective`'s point of view.
///
/// Pieces of `perspective` add their value, all others subtract it. Stacked
/// pieces are counted individually.
pub fn evaluate(pieces: &[Piece], perspective: Side, row_weights: &[i32; 8]) -> i32 {
    pieces
        .iter()
        .map(|p| {
            let v = piece_value(p, row_weights);
            if p.side == perspective {
                v
            } else {
                -v
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
