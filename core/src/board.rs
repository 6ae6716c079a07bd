// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and line drawing

use crate::config::DEFAULT_TOLERANCE;
use crate::line::ParametricLine;
use crate::{cell_symbol, Color, Coord, GameError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square board of cells, each empty or colored by a player
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Width (and height) of the board
    size: usize,
    /// Cells in row-major order
    positions: Vec<Option<Color>>,
    /// Tie-break tolerance for line traversal
    tolerance: f64,
}

impl Board {
    /// Create a new empty board with the specified width
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_tolerance(size, DEFAULT_TOLERANCE)
    }

    /// Create a new empty board whose traversal uses `tolerance` for ties
    pub fn with_tolerance(size: usize, tolerance: f64) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::ZeroWidth);
        }

        let cells = size
            .checked_mul(size)
            .ok_or(GameError::BoardTooLarge { size })?;
        let mut positions = Vec::new();
        positions
            .try_reserve_exact(cells)
            .map_err(|_| GameError::BoardTooLarge { size })?;
        positions.resize(cells, None);

        Ok(Self {
            size,
            positions,
            tolerance,
        })
    }

    /// Get the size of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at the specified coordinate
    pub fn get(&self, coord: Coord) -> Result<Option<Color>, GameError> {
        let idx = self.coord_to_index(coord)?;
        Ok(self.positions[idx])
    }

    /// Set the cell at the specified coordinate
    pub fn set(&mut self, cell: Option<Color>, coord: Coord) -> Result<(), GameError> {
        let idx = self.coord_to_index(coord)?;
        self.positions[idx] = cell;
        Ok(())
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> Result<usize, GameError> {
        if !coord.is_valid(self.size) {
            return Err(self.out_of_bounds(clamp_i64(coord.row), clamp_i64(coord.col)));
        }
        Ok(coord.row * self.size + coord.col)
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> GameError {
        GameError::OutOfBounds {
            row,
            col,
            size: self.size,
        }
    }

    /// Cells a line passes through, in traversal order, without drawing.
    ///
    /// Fails if the walk leaves the board or misses the head cell.
    pub fn trace(&self, line: &ParametricLine) -> Result<Vec<Coord>, GameError> {
        // Both ends on the board keeps every step within i64 range
        self.coord_to_index(line.tail_cell())?;
        self.coord_to_index(line.head_cell())?;

        let mut walk = Traversal::new(line, self.tolerance);
        let mut cells = Vec::new();

        for (row, col) in walk.by_ref() {
            if row < 0 || col < 0 {
                return Err(self.out_of_bounds(row, col));
            }
            let coord = Coord::new(row as usize, col as usize);
            if !coord.is_valid(self.size) {
                return Err(self.out_of_bounds(row, col));
            }
            cells.push(coord);
        }

        if walk.diverged {
            return Err(GameError::TraversalDiverged {
                tail: line.tail_cell(),
                head: line.head_cell(),
            });
        }

        Ok(cells)
    }

    /// Color every cell the line passes through.
    ///
    /// The board is left untouched if the traversal fails. Returns the
    /// number of cells visited.
    pub fn plot_line(&mut self, line: &ParametricLine, color: Color) -> Result<usize, GameError> {
        let cells = self.trace(line)?;
        for &coord in &cells {
            self.set(Some(color), coord)?;
        }
        Ok(cells.len())
    }

    /// Number of cells in the given state
    pub fn count(&self, cell: Option<Color>) -> usize {
        self.positions.iter().filter(|c| **c == cell).count()
    }

    /// Cells held by each player
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Some(Color::Black)),
            white: self.count(Some(Color::White)),
        }
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> + '_ {
        self.positions.chunks(self.size)
    }

    /// Text form of the grid: one line per row, cells separated by spaces
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.size * self.size * 2);
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| cell_symbol(*c).to_string()).collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        }
        output
    }
}

/// Cells held by each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Black cells
    pub black: usize,
    /// White cells
    pub white: usize,
}

impl Score {
    /// The player with more cells, `None` on a tie
    pub fn winner(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {}: {} cells; Player {}: {} cells",
            Color::Black.symbol(),
            self.black,
            Color::White.symbol(),
            self.white
        )
    }
}

/// Cell-by-cell walk along a line (Amanatides & Woo voxel traversal).
///
/// Yields the tail cell first, then one cell per crossing until the head
/// cell. On a crossing where both axes are within tolerance of each other
/// the walk steps diagonally. Drift accumulates in `t_max`, so lines much
/// longer than ~1000 cells may not land on their head; the walk then stops
/// and sets `diverged`.
#[derive(Debug, Clone)]
pub struct Traversal {
    row: i64,
    col: i64,
    head: (i64, i64),
    row_step: i64,
    col_step: i64,
    t_delta_row: f64,
    t_delta_col: f64,
    t_max_row: f64,
    t_max_col: f64,
    tolerance: f64,
    /// Steps left before the walk must have reached the head
    remaining: usize,
    started: bool,
    done: bool,
    /// Set when the step budget ran out before reaching the head
    pub diverged: bool,
}

impl Traversal {
    /// Start a walk at the line's tail cell
    pub fn new(line: &ParametricLine, tolerance: f64) -> Self {
        let tail = line.tail_cell();
        let head = line.head_cell();
        let direction = line.direction();
        let normalized = line.direction_normalized();

        // 1/0 is infinite: that axis is never crossed
        let t_delta_row = (1.0 / normalized.x).abs();
        let t_delta_col = (1.0 / normalized.y).abs();

        let row_distance = head.row.abs_diff(tail.row);
        let col_distance = head.col.abs_diff(tail.col);

        Self {
            row: tail.row as i64,
            col: tail.col as i64,
            head: (head.row as i64, head.col as i64),
            row_step: step_of(direction.x),
            col_step: step_of(direction.y),
            t_delta_row,
            t_delta_col,
            t_max_row: 0.5 * t_delta_row,
            t_max_col: 0.5 * t_delta_col,
            tolerance,
            remaining: row_distance + col_distance,
            started: false,
            done: false,
            diverged: false,
        }
    }

    fn advance(&mut self) {
        if self.t_max_row < self.t_max_col - self.tolerance {
            self.t_max_row += self.t_delta_row;
            self.row += self.row_step;
        } else if self.t_max_row > self.t_max_col + self.tolerance {
            self.t_max_col += self.t_delta_col;
            self.col += self.col_step;
        } else {
            self.t_max_row += self.t_delta_row;
            self.t_max_col += self.t_delta_col;
            self.row += self.row_step;
            self.col += self.col_step;
        }
    }

    fn at_head(&self) -> bool {
        (self.row, self.col) == self.head
    }
}

impl Iterator for Traversal {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.done = self.at_head();
            return Some((self.row, self.col));
        }

        if self.done {
            return None;
        }

        if self.remaining == 0 {
            self.diverged = true;
            self.done = true;
            return None;
        }

        self.remaining -= 1;
        self.advance();
        self.done = self.at_head();
        Some((self.row, self.col))
    }
}

fn clamp_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn step_of(component: f64) -> i64 {
    if component > 0.0 {
        1
    } else if component < 0.0 {
        -1
    } else {
        0
    }
}
