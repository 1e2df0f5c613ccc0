#![deny(missing_docs)]
#![doc = "Core error, grading and consumer-facing traits shared by the GFK grid Floer crates."]

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
/// Canonical JSON and YAML helpers.
#[path = "serde.rs"]
pub mod serde_io;

pub use errors::{ErrorInfo, GfkError};
pub use provenance::SchemaVersion;

/// Pair of (Maslov, Alexander) gradings used to bucket generators.
///
/// Ordering is lexicographic on `(maslov, alexander)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bidegree {
    /// Maslov (homological) grading.
    pub maslov: i32,
    /// Alexander grading.
    pub alexander: i32,
}

impl Bidegree {
    /// Creates a bidegree from its two components.
    pub const fn new(maslov: i32, alexander: i32) -> Self {
        Self { maslov, alexander }
    }
}

impl From<(i32, i32)> for Bidegree {
    fn from((maslov, alexander): (i32, i32)) -> Self {
        Self::new(maslov, alexander)
    }
}

impl fmt::Display for Bidegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.maslov, self.alexander)
    }
}

/// Graded generator universe consumed by an external chain-complex builder.
pub trait BigradedBasis: Send + Sync {
    /// Basis element type.
    type Generator;

    /// Returns every populated bidegree in ascending order.
    fn bidegrees(&self) -> Vec<Bidegree>;

    /// Returns the generators at `bidegree`, sorted by their code.
    fn generators_at(&self, bidegree: Bidegree) -> &[Self::Generator];

    /// Inclusive range of populated Maslov degrees.
    fn maslov_range(&self) -> RangeInclusive<i32>;

    /// Inclusive range of populated Alexander degrees.
    fn alexander_range(&self) -> RangeInclusive<i32>;

    /// Number of generators at `bidegree`.
    fn rank_at(&self, bidegree: Bidegree) -> usize {
        self.generators_at(bidegree).len()
    }
}

/// Boundary map on a [`BigradedBasis`], expressed generator by generator.
pub trait BoundaryOperator: Send + Sync {
    /// Basis element type the operator acts on.
    type Generator;
    /// Single term of the image of a generator.
    type Term;

    /// Shift applied to the Maslov degree.
    fn degree(&self) -> i32 {
        -1
    }

    /// Returns the terms of the boundary of `x`.
    fn boundary(&self, x: &Self::Generator) -> Vec<Self::Term>;
}
