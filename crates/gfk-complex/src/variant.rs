use std::fmt;

use gfk_diagram::{Info, Marker};
use serde::{Deserialize, Serialize};

/// Flavour of the grid complex; decides which empty rectangles count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Rectangles avoid every marking.
    Tilde,
    /// Rectangles avoid the X markings and the O marking of the last column.
    Hat,
    /// Rectangles avoid the X markings.
    Minus,
    /// Every empty rectangle counts.
    Filtered,
}

impl Variant {
    /// All variants, in increasing order of permissiveness.
    pub const ALL: [Variant; 4] = [Variant::Tilde, Variant::Hat, Variant::Minus, Variant::Filtered];

    /// Admissibility of a rectangle with the given markings on a grid with `grid_number` columns.
    pub fn admits(self, info: &Info, grid_number: u8) -> bool {
        match self {
            Variant::Tilde => !info.intersects(Marker::X) && !info.intersects(Marker::O),
            Variant::Hat => {
                !info.intersects(Marker::X)
                    && !(grid_number > 0
                        && info.intersects_at(Marker::O, usize::from(grid_number) - 1))
            }
            Variant::Minus => !info.intersects(Marker::X),
            Variant::Filtered => true,
        }
    }

    /// Number of `U` indeterminates the coefficients of this variant use.
    pub fn number_of_indeterminates(self, grid_number: u8) -> usize {
        let n = usize::from(grid_number);
        match self {
            Variant::Tilde => 0,
            Variant::Hat => n.saturating_sub(1),
            Variant::Minus | Variant::Filtered => n,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Tilde => "tilde",
            Variant::Hat => "hat",
            Variant::Minus => "minus",
            Variant::Filtered => "filtered",
        };
        f.write_str(name)
    }
}
