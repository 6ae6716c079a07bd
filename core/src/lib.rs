// SPDX-License-Identifier: MIT OR Apache-2.0

//! Linear Domination Core - Board, Lines and Play Validation
//!
//! This crate provides the core game functionality including:
//! - Parametric lines anchored at grid cells
//! - Board representation and grid traversal of lines
//! - Validity rules over a trailing window of plays
//! - Input parsing and report output for whole games

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod line;
pub mod observer;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub use board::{Board, Score};
pub use config::{Comparison, GameConfig};
pub use game::{Game, Outcome, Verdict};
pub use line::ParametricLine;
pub use observer::{NullObserver, PlayEvent, PlayObserver};
pub use rules::{PlayValidator, Rejection, RejectionReason};

/// Player color (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player, plays every even-indexed move
    Black,
    /// White player
    White,
}

impl Color {
    /// Color of the play at `index`; turns alternate strictly by parity
    pub fn for_play(index: usize) -> Self {
        if index % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Character used for this color in boards and reports
    pub fn symbol(&self) -> char {
        match self {
            Color::Black => BLACK_CELL,
            Color::White => WHITE_CELL,
        }
    }
}

/// Character for an empty cell
pub const EMPTY_CELL: char = '.';
/// Character for a black cell
pub const BLACK_CELL: char = 'X';
/// Character for a white cell
pub const WHITE_CELL: char = 'O';

/// Character for a cell state
pub fn cell_symbol(cell: Option<Color>) -> char {
    cell.map_or(EMPTY_CELL, |color| color.symbol())
}

/// Board coordinate, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row
    pub row: usize,
    /// Column
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a 1-indexed (row, column) pair as found in input files.
    ///
    /// Returns `None` when either component is zero.
    pub fn from_one_indexed(row: usize, col: usize) -> Option<Self> {
        Some(Self::new(row.checked_sub(1)?, col.checked_sub(1)?))
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors that abort a game
#[derive(Debug, Error)]
pub enum GameError {
    /// The input file could not be read or the output file written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A header value is missing from the input
    #[error("Missing {0} in input")]
    MissingHeader(&'static str),

    /// A header value is not a non-negative integer
    #[error("Invalid {field} in input: {token:?}")]
    InvalidHeader {
        /// Name of the header field
        field: &'static str,
        /// Offending token
        token: String,
    },

    /// A board must be at least one cell wide
    #[error("Board width must be greater than zero")]
    ZeroWidth,

    /// The board's cells do not fit in memory
    #[error("Board width {size} is too large")]
    BoardTooLarge {
        /// Requested width
        size: usize,
    },

    /// Input coordinates start at 1
    #[error("Play {play} uses a zero coordinate (input is 1-indexed)")]
    ZeroCoordinate {
        /// Index of the play in input order
        play: usize,
    },

    /// A cell access fell outside the board
    #[error("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Row of the access
        row: i64,
        /// Column of the access
        col: i64,
        /// Board width
        size: usize,
    },

    /// The traversal walked past the head cell without reaching it
    #[error("Traversal from {tail} missed its head cell {head}")]
    TraversalDiverged {
        /// Tail cell of the line
        tail: Coord,
        /// Head cell the walk never reached
        head: Coord,
    },

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
