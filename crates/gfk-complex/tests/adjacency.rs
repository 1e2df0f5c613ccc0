use gfk_complex::{Construction, DegreeWindow, Generator, GridComplex, Variant};
use gfk_core::GfkError;
use gfk_diagram::{gen_torus_diagram, GridDiagram, Point, Rect};
use itertools::Itertools;

fn unknot() -> GridDiagram {
    GridDiagram::new(
        "unknot",
        vec![Point::new(1, 1), Point::new(3, 3)],
        vec![Point::new(1, 3), Point::new(3, 1)],
    )
    .unwrap()
}

// every diagram of grid number `n` with no O and X sharing a cell
fn all_diagrams(n: u8) -> Vec<GridDiagram> {
    (0..n)
        .permutations(usize::from(n))
        .cartesian_product((0..n).permutations(usize::from(n)).collect::<Vec<_>>())
        .filter(|(os, xs)| os.iter().zip(xs).all(|(o, x)| o != x))
        .map(|(os, xs)| GridDiagram::from_sequences("small", &os, &xs).unwrap())
        .collect()
}

#[test]
fn unknot_generators_are_connected() {
    let construction = Construction::build(unknot(), |_, _| true);
    let top = construction.generator_for_sequence(&[1, 0]).unwrap();
    let bottom = construction.generator_for_sequence(&[0, 1]).unwrap();

    let down = construction.adjacents(&top, |_| true);
    assert!(!down.is_empty());
    assert!(down.iter().all(|(y, _)| *y == bottom));

    let up = construction.adjacents(&bottom, |_| true);
    assert!(up.iter().any(|(y, _)| *y == top));
}

#[test]
fn unknot_tilde_differential_vanishes() {
    let complex = GridComplex::new(Variant::Tilde, Construction::build(unknot(), |_, _| true));
    for x in complex.construction().generators_where(|_, _| true) {
        assert!(complex.differentiate(&x).is_empty());
    }
}

#[test]
fn adjacency_is_symmetric_on_small_grids() {
    for n in 2..=3 {
        for diagram in all_diagrams(n) {
            let construction = Construction::build(diagram, |_, _| true);
            for x in construction.generators_where(|_, _| true) {
                for (y, rect) in construction.adjacents(&x, |_| true) {
                    assert!(
                        construction
                            .adjacents(&y, |_| true)
                            .iter()
                            .any(|(z, _)| *z == x),
                        "{y} does not lead back to {x} (via {rect})"
                    );
                }
            }
        }
    }
}

#[test]
fn targets_carry_their_defined_gradings() -> Result<(), GfkError> {
    let diagram = gen_torus_diagram(2, 3)?;
    let construction = Construction::build(diagram.clone(), |_, _| true);
    for x in construction.generators_of_maslov_degree(-2) {
        for (y, rect) in construction.adjacents(&x, |_| true) {
            assert!(x.is_adjacent_to(&y));
            let direct = Generator::from_sequence(&diagram, &y.sequence())?;
            assert_eq!(direct.bidegree(), y.bidegree());
            assert!(!rect.intersects(&x.points(), true));
        }
    }
    Ok(())
}

#[test]
fn admissibility_predicate_restricts_rectangles() -> Result<(), GfkError> {
    let construction = Construction::build(gen_torus_diagram(2, 3)?, |_, _| true);
    let x = construction.generator_for_sequence(&[4, 2, 0, 3, 1]).unwrap_or_else(|| {
        construction.generators_where(|_, _| true)[0]
    });
    let all = construction.adjacents(&x, |_| true);
    let narrow = |rect: &Rect| rect.size().x == 2;
    let some = construction.adjacents(&x, narrow);
    assert!(some.len() <= all.len());
    assert!(some.iter().all(|(_, rect)| rect.size().x == 2));
    assert!(construction.adjacents(&x, |_| false).is_empty());
    Ok(())
}

#[test]
fn truncated_tables_drop_missing_targets() -> Result<(), GfkError> {
    let diagram = gen_torus_diagram(2, 3)?;
    let full = Construction::build(diagram.clone(), |_, _| true);
    let window = DegreeWindow::maslov(-2, 0);
    let truncated = Construction::build(diagram, |m, a| window.contains(m, a));

    for x in truncated.generators_where(|_, _| true) {
        let expected: Vec<_> = full
            .adjacents(&x, |_| true)
            .into_iter()
            .filter(|(y, _)| window.contains(y.maslov(), y.alexander()))
            .collect();
        assert_eq!(truncated.adjacents(&x, |_| true), expected);
    }

    let unknot_top = Construction::build(unknot(), |m, _| m == 0);
    let top = unknot_top.generator_for_sequence(&[1, 0]).unwrap();
    assert!(unknot_top.adjacents(&top, |_| true).is_empty());
    Ok(())
}
