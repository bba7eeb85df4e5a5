use crate::{eval::evaluate, movegen::has_any_move, types::*};

/// One ply of the game.
///
/// Positions are values: [`Position::apply`] builds an independent successor
/// and never touches `self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    side_to_move: Side,
    perspective: Side,
    pieces: Vec<Piece>,
    row_weights: [i32; 8],
    utility: i32,
    passed: [bool; 2],
}

impl Position {
    /// Builds a position and caches its utility from `perspective`'s view.
    pub fn new(
        side_to_move: Side,
        perspective: Side,
        pieces: Vec<Piece>,
        row_weights: [i32; 8],
    ) -> Self {
        let utility = evaluate(&pieces, perspective, &row_weights);
        Self {
            side_to_move,
            perspective,
            pieces,
            row_weights,
            utility,
            passed: [false; 2],
        }
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The side the cached utility is computed for.
    pub fn perspective(&self) -> Side {
        self.perspective
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn row_weights(&self) -> &[i32; 8] {
        &self.row_weights
    }

    /// Cached evaluation of the current pieces from [`Position::perspective`].
    pub fn utility(&self) -> i32 {
        self.utility
    }

    /// Cached utility re-expressed for `side`.
    pub fn utility_for(&self, side: Side) -> i32 {
        if side == self.perspective {
            self.utility
        } else {
            -self.utility
        }
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    /// Side of the piece(s) on `sq`. Stacks only ever hold one side.
    pub fn occupant(&self, sq: Square) -> Option<Side> {
        self.pieces.iter().find(|p| p.square == sq).map(|p| p.side)
    }

    /// Occupancy grid indexed `[row][col]`.
    pub fn occupancy(&self) -> [[Option<Side>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for p in &self.pieces {
            let cell = &mut grid[p.square.row as usize][p.square.col as usize];
            if cell.is_none() {
                *cell = Some(p.side);
            }
        }
        grid
    }

    /// Whether `side` had no legal move on its last turn.
    pub fn has_passed(&self, side: Side) -> bool {
        self.passed[side.idx()]
    }

    /// True when every remaining piece belongs to one side.
    pub fn is_single_side(&self) -> bool {
        match self.pieces.first() {
            Some(first) => self.pieces.iter().all(|p| p.side == first.side),
            None => true,
        }
    }

    /// One side eliminated, or both sides passed in succession.
    pub fn is_terminal(&self) -> bool {
        self.is_single_side() || (self.passed[0] && self.passed[1])
    }

    /// Neither side has a step or jump available.
    pub fn is_stalemated(&self) -> bool {
        !has_any_move(self, self.side_to_move) && !has_any_move(self, self.side_to_move.other())
    }

    /// Returns the successor reached by playing `mv` for the side to move.
    ///
    /// # Panics
    /// If `mv` moves a piece the side to move does not have on `from`, or a
    /// jump has no enemy on its midpoint. Generated moves never do either.
    pub fn apply(&self, mv: Move) -> Position {
        let mover = self.side_to_move;
        let (from, to) = match mv {
            Move::Pass => {
                let mut next = self.clone();
                next.passed[mover.idx()] = true;
                next.side_to_move = mover.other();
                return next;
            }
            Move::Step { from, to } => (from, to),
        };

        let mut pieces = self.pieces.clone();
        let moving = pieces
            .iter()
            .position(|p| p.side == mover && p.square == from)
            .unwrap_or_else(|| panic!("no {:?} piece on {:?} for move {:?}", mover, from, mv));
        pieces[moving].square = to;

        if let Some(mid) = mv.captured_square() {
            let captured = pieces
                .iter()
                .position(|p| p.side != mover && p.square == mid)
                .unwrap_or_else(|| panic!("jump {:?} has nothing to capture on {:?}", mv, mid));
            pieces.remove(captured);
        }

        let mut passed = self.passed;
        passed[mover.idx()] = false;
        let utility = evaluate(&pieces, self.perspective, &self.row_weights);

        Position {
            side_to_move: mover.other(),
            perspective: self.perspective,
            pieces,
            row_weights: self.row_weights,
            utility,
            passed,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
