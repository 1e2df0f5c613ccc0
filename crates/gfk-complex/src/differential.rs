use gfk_core::BoundaryOperator;
use gfk_diagram::{Marker, Rect};
use serde::{Deserialize, Serialize};

use crate::construction::Construction;
use crate::generator::Generator;
use crate::variant::Variant;

/// One term `U^exponents · target` of a boundary, with the rectangle that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferentialTerm {
    /// Generator the rectangle leads to.
    pub target: Generator,
    /// Empty rectangle from the source generator to `target`.
    pub rect: Rect,
    /// Multiplicity of each O marking inside `rect`, one entry per indeterminate.
    pub exponents: Vec<u8>,
}

/// A grid complex of one [`Variant`] over a [`Construction`].
///
/// Coefficients live in `F2[U_0, .., U_k]`; computing homology is left to the caller.
#[derive(Debug, Clone)]
pub struct GridComplex {
    variant: Variant,
    construction: Construction,
}

impl GridComplex {
    /// Wraps a construction.
    pub fn new(variant: Variant, construction: Construction) -> Self {
        Self {
            variant,
            construction,
        }
    }

    /// Complex variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Underlying generator table.
    pub fn construction(&self) -> &Construction {
        &self.construction
    }

    /// Number of `U` indeterminates of the coefficient ring.
    pub fn number_of_indeterminates(&self) -> usize {
        self.variant
            .number_of_indeterminates(self.construction.grid_number())
    }

    /// Whether the variant counts `rect`.
    pub fn admits(&self, rect: &Rect) -> bool {
        self.variant.admits(
            self.construction.intersection_info(rect),
            self.construction.grid_number(),
        )
    }

    /// Boundary of `x`, one term per admissible empty rectangle.
    pub fn differentiate(&self, x: &Generator) -> Vec<DifferentialTerm> {
        let k = self.number_of_indeterminates();
        self.construction
            .adjacents(x, |rect| self.admits(rect))
            .into_iter()
            .map(|(target, rect)| {
                let mut exponents = self
                    .construction
                    .intersection_info(&rect)
                    .intersections(Marker::O);
                exponents.truncate(k);
                DifferentialTerm {
                    target,
                    rect,
                    exponents,
                }
            })
            .collect()
    }

    /// Same variant over the bidegrees passing `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(i32, i32) -> bool,
    {
        Self::new(self.variant, self.construction.filter(predicate))
    }
}

impl BoundaryOperator for GridComplex {
    type Generator = Generator;
    type Term = DifferentialTerm;

    fn boundary(&self, x: &Generator) -> Vec<DifferentialTerm> {
        self.differentiate(x)
    }
}
