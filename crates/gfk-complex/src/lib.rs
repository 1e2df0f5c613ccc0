#![deny(missing_docs)]
#![doc = "Generator enumeration, gradings and rectangle differentials of grid complexes."]

//! A generator of the grid complex of an `n x n` diagram is a permutation of
//! the columns, stored as its factorial-number-system code. [`Construction`]
//! enumerates all `n!` of them with incrementally maintained gradings and
//! answers adjacency queries; [`GridComplex`] turns those into boundary terms
//! for one of the four complex variants.

pub mod codec;
mod config;
mod construction;
mod differential;
mod generator;
mod producer;
mod report;
mod variant;

pub use config::{BuildOpts, DegreeWindow};
pub use construction::Construction;
pub use differential::{DifferentialTerm, GridComplex};
pub use generator::{alexander_degree, maslov_degree, Generator};
pub use producer::{GeneratorTable, HeapTranspositions};
pub use report::{BucketCount, ConstructionSummary};
pub use variant::Variant;
