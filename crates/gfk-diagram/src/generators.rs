use gfk_core::{ErrorInfo, GfkError};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::diagram::{GridDiagram, MAX_GRID_NUMBER};

/// Generates a random grid diagram of the given grid number.
///
/// The O rows are a uniform permutation; the X rows are reshuffled until no
/// column puts its X in the same cell as its O. The result may present a link.
pub fn gen_random_diagram<R: Rng + ?Sized>(
    grid_number: u8,
    rng: &mut R,
) -> Result<GridDiagram, GfkError> {
    if !(2..=MAX_GRID_NUMBER).contains(&grid_number) {
        return Err(GfkError::Diagram(
            ErrorInfo::new(
                "grid-number-range",
                "random diagrams need between 2 and 16 columns",
            )
            .with_context("grid_number", grid_number),
        ));
    }
    let mut o_rows: Vec<u8> = (0..grid_number).collect();
    o_rows.shuffle(rng);

    let mut x_rows = o_rows.clone();
    let max_attempts = usize::from(grid_number) * 16;
    let mut separated = false;
    for _ in 0..max_attempts {
        x_rows.shuffle(rng);
        if x_rows.iter().zip(&o_rows).all(|(x, o)| x != o) {
            separated = true;
            break;
        }
    }
    if !separated {
        // cyclic shift of the O rows never lands on an O cell
        x_rows = o_rows.clone();
        x_rows.rotate_left(1);
    }

    GridDiagram::from_sequences(format!("random-{grid_number}"), &o_rows, &x_rows)
}

/// Grid presentation of the `(p, q)` torus link, up to mirror image.
///
/// O markings sit on the diagonal and each X is `p` rows above its O, giving
/// grid number `p + q`. The result is a knot iff `gcd(p, q) == 1`.
pub fn gen_torus_diagram(p: u8, q: u8) -> Result<GridDiagram, GfkError> {
    if p == 0 || q == 0 || usize::from(p) + usize::from(q) > usize::from(MAX_GRID_NUMBER) {
        return Err(GfkError::Diagram(
            ErrorInfo::new("torus-parameters", "torus parameters must be positive and fit the grid")
                .with_context("p", p)
                .with_context("q", q),
        ));
    }
    let n = p + q;
    let o_rows: Vec<u8> = (0..n).collect();
    let x_rows: Vec<u8> = (0..n).map(|i| (i + p) % n).collect();
    GridDiagram::from_sequences(format!("T({p},{q})"), &o_rows, &x_rows)
}
