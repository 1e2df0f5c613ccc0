#![deny(missing_docs)]
#![doc = "Toroidal grid diagrams, rectangles and O/X intersection tables for grid Floer complexes."]

//! Marked points (O and X) live on odd coordinates of a `2n x 2n` torus while
//! generator points live on even coordinates, so a closed rectangle spanned by
//! generator points never has a marked point on its boundary.

mod diagram;
mod generators;
mod hash;
mod intersections;
mod point;
mod rect;
mod serialization;

pub use diagram::{GridDiagram, Marker, DEFAULT_NAME, MAX_GRID_NUMBER};
pub use generators::{gen_random_diagram, gen_torus_diagram};
pub use hash::canonical_hash;
pub use intersections::{Info, IntersectionTable};
pub use point::{even_points, odd_points, Point};
pub use rect::Rect;
pub use serialization::{diagram_from_bytes, diagram_from_json, diagram_to_bytes, diagram_to_json};
