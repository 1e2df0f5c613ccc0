use std::collections::BTreeSet;

use gfk_core::{ErrorInfo, GfkError};
use serde::{Deserialize, Serialize};

use crate::point::{odd_points, Point};

/// Largest supported grid number; generator codes must fit in 64 bits.
pub const MAX_GRID_NUMBER: u8 = 16;

/// Name given to diagrams constructed without one.
pub const DEFAULT_NAME: &str = "G";

/// The two kinds of marked points of a grid diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// O markings.
    O,
    /// X markings.
    X,
}

/// Immutable grid diagram: one O and one X in every column and every row.
///
/// Both marker arrays are sorted by x, so index `i` of [`GridDiagram::os`]
/// is the O marking of column `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDiagram")]
pub struct GridDiagram {
    name: String,
    os: Vec<Point>,
    xs: Vec<Point>,
}

#[derive(Deserialize)]
struct RawDiagram {
    #[serde(default = "default_name")]
    name: String,
    os: Vec<Point>,
    xs: Vec<Point>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl TryFrom<RawDiagram> for GridDiagram {
    type Error = GfkError;

    fn try_from(raw: RawDiagram) -> Result<Self, Self::Error> {
        GridDiagram::new(raw.name, raw.os, raw.xs)
    }
}

impl GridDiagram {
    /// Validates and builds a diagram from odd-coordinate marker points.
    pub fn new(name: impl Into<String>, os: Vec<Point>, xs: Vec<Point>) -> Result<Self, GfkError> {
        if os.len() != xs.len() {
            return Err(GfkError::Diagram(
                ErrorInfo::new("marker-count-mismatch", "O and X arrays differ in length")
                    .with_context("os", os.len())
                    .with_context("xs", xs.len()),
            ));
        }
        check_grid_number(os.len())?;
        let grid_size = 2 * os.len() as u8;
        validate_markers(Marker::O, &os, grid_size)?;
        validate_markers(Marker::X, &xs, grid_size)?;
        Ok(Self::from_validated(name.into(), os, xs))
    }

    /// Builds a diagram from the row of the O and X marking in every column.
    pub fn from_sequences(
        name: impl Into<String>,
        o_rows: &[u8],
        x_rows: &[u8],
    ) -> Result<Self, GfkError> {
        check_grid_number(o_rows.len().max(x_rows.len()))?;
        let n = o_rows.len();
        if let Some(&row) = o_rows.iter().chain(x_rows).find(|&&row| usize::from(row) >= n) {
            return Err(GfkError::Diagram(
                ErrorInfo::new("marker-out-of-range", "row index outside the grid")
                    .with_context("row", row)
                    .with_context("grid_number", n),
            ));
        }
        Self::new(name, odd_points(o_rows), odd_points(x_rows))
    }

    /// Builds a diagram from an arc presentation.
    ///
    /// `code` lists, row by row from the bottom, the 1-indexed columns of the
    /// O and the X marking of that row.
    pub fn from_arc_presentation(name: impl Into<String>, code: &[u8]) -> Result<Self, GfkError> {
        if code.len() % 2 != 0 {
            return Err(GfkError::Diagram(
                ErrorInfo::new("odd-arc-presentation", "arc presentation needs column pairs")
                    .with_context("len", code.len()),
            ));
        }
        let grid_number = code.len() / 2;
        check_grid_number(grid_number)?;
        let mut os = Vec::with_capacity(grid_number);
        let mut xs = Vec::with_capacity(grid_number);
        for (row, pair) in code.chunks(2).enumerate() {
            if pair
                .iter()
                .any(|&column| column == 0 || usize::from(column) > grid_number)
            {
                return Err(GfkError::Diagram(
                    ErrorInfo::new("arc-column-out-of-range", "arc columns run from 1 to n")
                        .with_context("row", row)
                        .with_context("grid_number", grid_number),
                ));
            }
            let y = 2 * row as u8 + 1;
            os.push(Point::new(2 * pair[0] - 1, y));
            xs.push(Point::new(2 * pair[1] - 1, y));
        }
        Self::new(name, os, xs)
    }

    fn from_validated(name: String, mut os: Vec<Point>, mut xs: Vec<Point>) -> Self {
        os.sort_by_key(|p| p.x);
        xs.sort_by_key(|p| p.x);
        Self { name, os, xs }
    }

    /// Diagram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// O markings, indexed by column.
    pub fn os(&self) -> &[Point] {
        &self.os
    }

    /// X markings, indexed by column.
    pub fn xs(&self) -> &[Point] {
        &self.xs
    }

    /// Markings of the requested kind, indexed by column.
    pub fn markers(&self, marker: Marker) -> &[Point] {
        match marker {
            Marker::O => &self.os,
            Marker::X => &self.xs,
        }
    }

    /// Number of columns `n`.
    pub fn grid_number(&self) -> u8 {
        self.os.len() as u8
    }

    /// Side length `2n` of the doubled torus.
    pub fn grid_size(&self) -> u8 {
        2 * self.grid_number()
    }

    /// Quarter-turn rotation, presenting the mirror image.
    pub fn rotate90(&self) -> Self {
        let l = self.grid_size();
        let turn = |p: &Point| Point::new(l - p.y, p.x);
        Self::from_validated(
            format!("{}m", self.name),
            self.os.iter().map(turn).collect(),
            self.xs.iter().map(turn).collect(),
        )
    }
}

fn check_grid_number(grid_number: usize) -> Result<(), GfkError> {
    if grid_number > usize::from(MAX_GRID_NUMBER) {
        return Err(GfkError::Diagram(
            ErrorInfo::new("grid-number-limit", "grid number exceeds the encoding width")
                .with_context("grid_number", grid_number)
                .with_context("max", MAX_GRID_NUMBER)
                .with_hint("generator codes are packed into 64 bits"),
        ));
    }
    Ok(())
}

fn validate_markers(marker: Marker, points: &[Point], grid_size: u8) -> Result<(), GfkError> {
    let mut columns = BTreeSet::new();
    let mut rows = BTreeSet::new();
    for (index, p) in points.iter().enumerate() {
        let fail = |code: &str, message: &str| {
            GfkError::Diagram(
                ErrorInfo::new(code, message)
                    .with_context("marker", format!("{marker:?}"))
                    .with_context("index", index)
                    .with_context("point", p),
            )
        };
        if p.x >= grid_size || p.y >= grid_size {
            return Err(fail("marker-out-of-range", "marker lies outside the grid"));
        }
        if p.x % 2 == 0 || p.y % 2 == 0 {
            return Err(fail("marker-not-centered", "markers sit on odd coordinates"));
        }
        if !columns.insert(p.x) {
            return Err(fail("duplicate-column", "two markers share a column"));
        }
        if !rows.insert(p.y) {
            return Err(fail("duplicate-row", "two markers share a row"));
        }
    }
    Ok(())
}
