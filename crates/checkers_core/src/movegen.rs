use crate::{board::Position, types::*};

/// Column deltas in generation order: left-forward, then right-forward.
const DIAGONALS: [i8; 2] = [-1, 1];

/// Generate all legal moves for the side to move, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Pieces are visited in the position's piece order; for each piece the
/// candidates are left step, right step, left jump, right jump. When nothing
/// is legal the buffer holds a single [`Move::Pass`].
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    let grid = pos.occupancy();
    let side = pos.side_to_move();
    for piece in pos.pieces_of(side) {
        piece_moves(&grid, piece, |mv| {
            out.push(mv);
            true
        });
    }
    if out.is_empty() {
        out.push(Move::Pass);
    }
}

/// Whether `side` has at least one step or jump, regardless of whose turn it is.
pub fn has_any_move(pos: &Position, side: Side) -> bool {
    let grid = pos.occupancy();
    let mut found = false;
    for piece in pos.pieces_of(side) {
        piece_moves(&grid, piece, |_| {
            found = true;
            false
        });
        if found {
            return true;
        }
    }
    false
}

/// Feeds the moves of one piece to `emit`; stops early once `emit` returns false.
fn piece_moves(grid: &[[Option<Side>; 8]; 8], piece: &Piece, mut emit: impl FnMut(Move) -> bool) {
    let side = piece.side;
    let from = piece.square;
    let dr = side.forward();

    for dc in DIAGONALS {
        if let Some(to) = from.offset(dr, dc) {
            if can_land(grid, side, to) && !emit(Move::step(from, to)) {
                return;
            }
        }
    }

    for dc in DIAGONALS {
        let over = match from.offset(dr, dc) {
            Some(sq) => sq,
            None => continue,
        };
        if occupant(grid, over) != Some(side.other()) {
            continue;
        }
        if let Some(to) = from.offset(2 * dr, 2 * dc) {
            if can_land(grid, side, to) && !emit(Move::step(from, to)) {
                return;
            }
        }
    }
}

/// An on-board destination is open when empty, or when it lies on the mover's
/// scoring edge and only holds the mover's own pieces.
fn can_land(grid: &[[Option<Side>; 8]; 8], side: Side, to: Square) -> bool {
    match occupant(grid, to) {
        None => true,
        Some(owner) => to.row == side.goal_row() && owner == side,
    }
}

#[inline]
fn occupant(grid: &[[Option<Side>; 8]; 8], sq: Square) -> Option<Side> {
    grid[sq.row as usize][sq.col as usize]
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
