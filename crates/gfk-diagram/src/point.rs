use std::fmt;

use serde::{Deserialize, Serialize};

/// Lattice point on the doubled `2n x 2n` torus.
///
/// Equality and ordering are lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: u8,
    /// Vertical coordinate.
    pub y: u8,
}

impl Point {
    /// Creates a point from raw doubled coordinates.
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Generator point for `column` sitting on `row`.
    pub const fn even(column: u8, row: u8) -> Self {
        Self::new(2 * column, 2 * row)
    }

    /// Marked point in the cell at (`column`, `row`).
    pub const fn odd(column: u8, row: u8) -> Self {
        Self::new(2 * column + 1, 2 * row + 1)
    }

    /// Strict product order: both coordinates of `self` are smaller than those of `q`.
    pub fn is_southwest_of(&self, q: &Point) -> bool {
        self.x < q.x && self.y < q.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Generator points `(2i, 2 seq[i])` of a row sequence.
pub fn even_points(seq: &[u8]) -> Vec<Point> {
    seq.iter()
        .enumerate()
        .map(|(i, &row)| Point::even(i as u8, row))
        .collect()
}

/// Marked points `(2i + 1, 2 seq[i] + 1)` of a row sequence.
pub fn odd_points(seq: &[u8]) -> Vec<Point> {
    seq.iter()
        .enumerate()
        .map(|(i, &row)| Point::odd(i as u8, row))
        .collect()
}
