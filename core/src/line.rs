// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parametric lines between the centers of two grid cells

use crate::Coord;
use nalgebra::{Point2, Vector2};

/// Barycentric coordinate of the midpoint of any line
const MIDPOINT_T: f64 = 0.5;
/// Offset of a cell's center from its corner, on both axes
const CELL_CENTER: f64 = 0.5;

/// A play, drawn as a segment from the center of the tail cell to the
/// center of the head cell.
///
/// All derived quantities are computed once in [`ParametricLine::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricLine {
    tail_cell: Coord,
    head_cell: Coord,
    tail_point: Point2<f64>,
    head_point: Point2<f64>,
    direction: Vector2<f64>,
    direction_normalized: Vector2<f64>,
    midpoint: Point2<f64>,
}

impl ParametricLine {
    /// Create a line between two 0-indexed cells.
    ///
    /// `tail == head` is allowed and yields a zero direction.
    pub fn new(tail_cell: Coord, head_cell: Coord) -> Self {
        let tail_point = cell_center(tail_cell);
        let head_point = cell_center(head_cell);
        let direction = head_point - tail_point;
        let direction_normalized = direction
            .try_normalize(0.0)
            .unwrap_or_else(Vector2::zeros);

        let mut line = Self {
            tail_cell,
            head_cell,
            tail_point,
            head_point,
            direction,
            direction_normalized,
            midpoint: tail_point,
        };
        line.midpoint = line.barycentric(MIDPOINT_T);
        line
    }

    /// Create a line from 1-indexed input coordinates.
    ///
    /// Returns `None` if any coordinate is zero.
    pub fn from_one_indexed(
        tail_row: usize,
        tail_col: usize,
        head_row: usize,
        head_col: usize,
    ) -> Option<Self> {
        Some(Self::new(
            Coord::from_one_indexed(tail_row, tail_col)?,
            Coord::from_one_indexed(head_row, head_col)?,
        ))
    }

    /// Cell containing the tail point
    pub fn tail_cell(&self) -> Coord {
        self.tail_cell
    }

    /// Cell containing the head point
    pub fn head_cell(&self) -> Coord {
        self.head_cell
    }

    /// Center of the tail cell
    pub fn tail_point(&self) -> Point2<f64> {
        self.tail_point
    }

    /// Center of the head cell
    pub fn head_point(&self) -> Point2<f64> {
        self.head_point
    }

    /// Vector from the tail point to the head point
    pub fn direction(&self) -> Vector2<f64> {
        self.direction
    }

    /// Unit direction, or zero for a single-cell line
    pub fn direction_normalized(&self) -> Vector2<f64> {
        self.direction_normalized
    }

    /// Midpoint of the segment
    pub fn midpoint(&self) -> Point2<f64> {
        self.midpoint
    }

    /// True when tail and head are the same cell
    pub fn is_degenerate(&self) -> bool {
        self.tail_cell == self.head_cell
    }

    /// Dot product of the two directions
    pub fn dot(&self, other: &ParametricLine) -> f64 {
        self.direction.dot(&other.direction)
    }

    /// Point at barycentric coordinate `t` (0 at the tail, 1 at the head)
    pub fn barycentric(&self, t: f64) -> Point2<f64> {
        Point2::from(self.tail_point.coords * (1.0 - t) + self.head_point.coords * t)
    }
}

fn cell_center(cell: Coord) -> Point2<f64> {
    Point2::new(cell.row as f64 + CELL_CENTER, cell.col as f64 + CELL_CENTER)
}
