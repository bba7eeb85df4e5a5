use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// `S`: advances toward row 0.
    Star,
    /// `C`: advances toward row 7.
    Circle,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Star => Side::Circle,
            Side::Circle => Side::Star,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Star => 0,
            Side::Circle => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Side::Star => 'S',
            Side::Circle => 'C',
        }
    }
    pub fn from_symbol(ch: char) -> Option<Side> {
        match ch.to_ascii_uppercase() {
            'S' => Some(Side::Star),
            'C' => Some(Side::Circle),
            _ => None,
        }
    }
    /// Row delta of a single forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::Star => -1,
            Side::Circle => 1,
        }
    }
    /// The edge this side scores on.
    pub fn goal_row(self) -> u8 {
        match self {
            Side::Star => 0,
            Side::Circle => BOARD_SIZE - 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8, // 0..7, top to bottom
    pub col: u8, // 0..7, left to right
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// The square `(dr, dc)` away, or `None` when that falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn midpoint(self, other: Square) -> Square {
        Square::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub square: Square,
}

impl Piece {
    pub fn new(side: Side, row: u8, col: u8) -> Self {
        Self {
            side,
            square: Square::new(row, col),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// The side to move had no legal step or jump.
    Pass,
    Step { from: Square, to: Square },
}

impl Move {
    pub fn step(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    pub fn is_jump(self) -> bool {
        match self {
            Move::Pass => false,
            Move::Step { from, to } => from.row.abs_diff(to.row) == 2,
        }
    }

    /// Square of the piece removed by this move, if it is a jump.
    pub fn captured_square(self) -> Option<Square> {
        match self {
            Move::Step { from, to } if self.is_jump() => Some(from.midpoint(to)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
