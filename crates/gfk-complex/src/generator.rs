use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use gfk_core::{Bidegree, ErrorInfo, GfkError};
use gfk_diagram::{even_points, GridDiagram, Point};
use serde::{Deserialize, Serialize};

use crate::codec;

/// A generator of the grid complex: a permutation stored as its code, plus gradings.
///
/// Equality, hashing and ordering look at the code only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Generator {
    code: u64,
    grid_number: u8,
    maslov: i32,
    alexander: i32,
}

impl Generator {
    pub(crate) fn from_parts(code: u64, grid_number: u8, maslov: i32, alexander: i32) -> Self {
        Self {
            code,
            grid_number,
            maslov,
            alexander,
        }
    }

    /// Builds the generator for `seq`, grading it from the definition.
    pub fn from_sequence(diagram: &GridDiagram, seq: &[u8]) -> Result<Self, GfkError> {
        if seq.len() != usize::from(diagram.grid_number()) || !codec::is_permutation(seq) {
            return Err(GfkError::Complex(
                ErrorInfo::new("sequence-not-permutation", "sequence is not a permutation of the columns")
                    .with_context("sequence", format!("{seq:?}"))
                    .with_context("grid_number", diagram.grid_number()),
            ));
        }
        let pts = even_points(seq);
        Ok(Self::from_parts(
            codec::encode(seq),
            diagram.grid_number(),
            maslov_degree(diagram, &pts),
            alexander_degree(diagram, &pts),
        ))
    }

    /// Permutation code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Grid number of the diagram the generator belongs to.
    pub fn grid_number(&self) -> u8 {
        self.grid_number
    }

    /// Maslov grading.
    pub fn maslov(&self) -> i32 {
        self.maslov
    }

    /// Alexander grading.
    pub fn alexander(&self) -> i32 {
        self.alexander
    }

    /// Homological degree; the Maslov grading.
    pub fn degree(&self) -> i32 {
        self.maslov
    }

    /// `(maslov, alexander)`.
    pub fn bidegree(&self) -> Bidegree {
        Bidegree::new(self.maslov, self.alexander)
    }

    /// Row of the generator point in every column.
    pub fn sequence(&self) -> Vec<u8> {
        codec::decode(self.code, usize::from(self.grid_number))
    }

    /// Generator points `(2i, 2σ(i))`.
    pub fn points(&self) -> Vec<Point> {
        even_points(&self.sequence())
    }

    /// Whether the two sequences differ by a single transposition.
    pub fn is_adjacent_to(&self, other: &Generator) -> bool {
        self.grid_number == other.grid_number
            && self
                .sequence()
                .iter()
                .zip(other.sequence())
                .filter(|(a, b)| **a != *b)
                .count()
                == 2
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Generator {}

impl Hash for Generator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Generator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Generator {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.sequence())
    }
}

// I(x, y): pairs with p in x strictly south-west of q in y.
fn southwest_pairs(xs: &[Point], ys: &[Point]) -> i32 {
    xs.iter()
        .map(|p| ys.iter().filter(|q| p.is_southwest_of(q)).count() as i32)
        .sum()
}

fn symmetric_pairs(xs: &[Point], ys: &[Point]) -> i32 {
    southwest_pairs(xs, ys) + southwest_pairs(ys, xs)
}

fn relative_maslov(reference: &[Point], pts: &[Point]) -> i32 {
    (symmetric_pairs(pts, pts) - 2 * symmetric_pairs(pts, reference)
        + symmetric_pairs(reference, reference))
        / 2
        + 1
}

/// Maslov grading of the generator with points `pts`, from the definition.
pub fn maslov_degree(diagram: &GridDiagram, pts: &[Point]) -> i32 {
    relative_maslov(diagram.os(), pts)
}

/// Alexander grading of the generator with points `pts`, from the definition.
///
/// Rounds toward negative infinity, which only matters for links.
pub fn alexander_degree(diagram: &GridDiagram, pts: &[Point]) -> i32 {
    let n = i32::from(diagram.grid_number());
    (relative_maslov(diagram.os(), pts) - relative_maslov(diagram.xs(), pts) - n + 1).div_euclid(2)
}
