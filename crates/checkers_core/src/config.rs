//! Game configuration: who acts, which search to run, and the starting board.
//!
//! The text format is twelve lines:
//!
//! ```text
//! Star                      acting player, first letter S or C
//! MINIMAX                   MINIMAX or ALPHABETA
//! 2                         depth limit
//! 0,S1,0,0,0,0,0,0          eight board rows, top (row 0) first;
//! ...                       `0` is empty, `S3` is three stacked Star pieces
//! 10,20,30,40,50,60,70,80   row weights, index 0 = top row
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::Position,
    eval::{utility_bound, MAX_UTILITY},
    types::*,
};

const BOARD_LINES: usize = BOARD_SIZE as usize;
const TOTAL_LINES: usize = 3 + BOARD_LINES + 1;

/// Errors raised while reading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration ends early: line {line} ({what}) is missing")]
    MissingLine { line: usize, what: &'static str },

    #[error("unknown player {0:?} (expected a name starting with S or C)")]
    UnknownPlayer(String),

    #[error("unknown algorithm {0:?} (expected MINIMAX or ALPHABETA)")]
    UnknownAlgorithm(String),

    #[error("invalid depth limit {0:?} (expected an integer from 1 to 255)")]
    InvalidDepth(String),

    #[error("board row {row} has {found} cells, expected 8")]
    WrongColumnCount { row: usize, found: usize },

    #[error("invalid cell {text:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, text: String },

    #[error("expected 8 row weights, found {0}")]
    WrongWeightCount(usize),

    #[error("invalid row weight {0:?}")]
    InvalidWeight(String),

    #[error("{pieces} pieces under these row weights can score up to {bound}, above the limit {}", MAX_UTILITY)]
    UtilityOutOfRange { pieces: u64, bound: u64 },
}

/// Search algorithm named by the configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("MINIMAX") {
            Ok(Algorithm::Minimax)
        } else if name.eq_ignore_ascii_case("ALPHABETA") {
            Ok(Algorithm::AlphaBeta)
        } else {
            Err(ConfigError::UnknownAlgorithm(name.to_string()))
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "MINIMAX"),
            Algorithm::AlphaBeta => write!(f, "ALPHABETA"),
        }
    }
}

/// Contents of one board square in the starting layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// `count` pieces of `side` sharing the square.
    Stack { side: Side, count: u32 },
}

impl Cell {
    fn parse(text: &str, row: usize, col: usize) -> Result<Cell, ConfigError> {
        let invalid = || ConfigError::InvalidCell {
            row,
            col,
            text: text.to_string(),
        };
        if text.is_empty() || text == "0" {
            return Ok(Cell::Empty);
        }
        let mut chars = text.chars();
        let side = match chars.next() {
            Some('S') => Side::Star,
            Some('C') => Side::Circle,
            _ => return Err(invalid()),
        };
        let count: u32 = chars.as_str().parse().map_err(|_| invalid())?;
        if count == 0 {
            return Ok(Cell::Empty);
        }
        Ok(Cell::Stack { side, count })
    }
}

/// A fully validated game configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub acting_player: Side,
    pub algorithm: Algorithm,
    pub depth_limit: u8,
    pub layout: [[Cell; 8]; 8],
    pub row_weights: [i32; 8],
}

impl Configuration {
    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses the twelve-line text format. Trailing blank lines are ignored.
    ///
    /// Rejects layouts whose evaluation could leave `±MAX_UTILITY`.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let player = nth_line(&lines, 0, "acting player")?;
        let acting_player = player
            .chars()
            .next()
            .and_then(Side::from_symbol)
            .ok_or_else(|| ConfigError::UnknownPlayer(player.to_string()))?;

        let algorithm: Algorithm = nth_line(&lines, 1, "algorithm")?.parse()?;

        let depth_text = nth_line(&lines, 2, "depth limit")?;
        let depth_limit = depth_text
            .parse::<u8>()
            .ok()
            .filter(|&d| d > 0)
            .ok_or_else(|| ConfigError::InvalidDepth(depth_text.to_string()))?;

        let mut layout = [[Cell::Empty; 8]; 8];
        for (row, cells) in layout.iter_mut().enumerate() {
            let row_text = nth_line(&lines, 3 + row, "board row")?;
            let parts: Vec<&str> = row_text.split(',').map(str::trim).collect();
            if parts.len() != BOARD_LINES {
                return Err(ConfigError::WrongColumnCount {
                    row,
                    found: parts.len(),
                });
            }
            for (col, part) in parts.iter().enumerate() {
                cells[col] = Cell::parse(part, row, col)?;
            }
        }

        let weights_text = nth_line(&lines, TOTAL_LINES - 1, "row weights")?;
        let weights = weights_text
            .split(',')
            .map(str::trim)
            .map(|w| {
                w.parse::<i32>()
                    .map_err(|_| ConfigError::InvalidWeight(w.to_string()))
            })
            .collect::<Result<Vec<i32>, ConfigError>>()?;
        let row_weights: [i32; 8] = weights
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::WrongWeightCount(weights.len()))?;

        let pieces: u64 = layout
            .iter()
            .flatten()
            .map(|cell| match *cell {
                Cell::Stack { count, .. } => u64::from(count),
                Cell::Empty => 0,
            })
            .sum();
        let bound = utility_bound(pieces, &row_weights);
        if bound > MAX_UTILITY as u64 {
            return Err(ConfigError::UtilityOutOfRange { pieces, bound });
        }

        Ok(Self {
            acting_player,
            algorithm,
            depth_limit,
            layout,
            row_weights,
        })
    }

    /// Expands the layout row-major, one piece per stacked unit.
    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for (row, cells) in self.layout.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Cell::Stack { side, count } = *cell {
                    for _ in 0..count {
                        pieces.push(Piece::new(side, row as u8, col as u8));
                    }
                }
            }
        }
        pieces
    }

    /// Root position: the acting player moves and utilities are from its view.
    pub fn initial_position(&self) -> Position {
        Position::new(
            self.acting_player,
            self.acting_player,
            self.pieces(),
            self.row_weights,
        )
    }
}

fn nth_line<'a>(lines: &[&'a str], idx: usize, what: &'static str) -> Result<&'a str, ConfigError> {
    lines.get(idx).copied().ok_or(ConfigError::MissingLine {
        line: idx + 1,
        what,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
