use gfk_core::GfkError;
use gfk_diagram::{
    gen_random_diagram, gen_torus_diagram, GridDiagram, IntersectionTable, Marker, Point, Rect,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn check_against_direct_counts(diagram: &GridDiagram) {
    let table = IntersectionTable::build(diagram);
    assert_eq!(table.len(), usize::from(diagram.grid_number()).pow(4));
    for rect in Rect::all_rects(diagram.grid_number()) {
        let info = table[&rect];
        for marker in [Marker::O, Marker::X] {
            let points = diagram.markers(marker);
            assert_eq!(info.count(marker), rect.count_intersections(points, false));
            for (i, p) in points.iter().enumerate() {
                assert_eq!(info.intersects_at(marker, i), rect.contains(p));
            }
            assert_eq!(
                info.code(marker).count_ones() as usize,
                info.count(marker),
                "popcount cache out of sync for {rect}"
            );
        }
    }
}

#[test]
fn unknot_table_matches_hand_counts() -> Result<(), GfkError> {
    let diagram = GridDiagram::from_sequences("0_1", &[0, 1], &[1, 0])?;
    let table = IntersectionTable::build(&diagram);
    assert_eq!(table.len(), 16);

    // the whole torus minus one row/column strip: origin (0,0), size (2,2)
    let rect = Rect::new(Point::even(0, 0), Point::even(1, 1), 4);
    let info = table.get(&rect).expect("lattice rect");
    assert_eq!(info.code(Marker::O), 0b01);
    assert_eq!(info.count(Marker::X), 0);
    assert_eq!(info.intersections(Marker::O), vec![1, 0]);
    assert!(info.intersects(Marker::O));
    assert!(!info.intersects(Marker::X));

    // the wrapped square starting at (2,2) holds the other O
    let wrapped = Rect::new(Point::even(1, 1), Point::even(1, 1), 4);
    assert_eq!(table[&wrapped].code(Marker::O), 0b10);

    // degenerate rectangles are segments and never hold a marking
    let segment = Rect::new(Point::even(1, 0), Point::even(0, 1), 4);
    assert_eq!(table[&segment].count(Marker::O), 0);
    Ok(())
}

#[test]
fn off_lattice_rects_are_absent() -> Result<(), GfkError> {
    let diagram = gen_torus_diagram(2, 3)?;
    let table = IntersectionTable::build(&diagram);
    assert!(table
        .get(&Rect::new(Point::new(1, 0), Point::even(1, 1), 10))
        .is_none());
    assert!(table
        .get(&Rect::new(Point::even(0, 0), Point::even(5, 1), 10))
        .is_none());
    assert!(table
        .get(&Rect::new(Point::even(0, 0), Point::even(1, 1), 12))
        .is_none());
    Ok(())
}

#[test]
fn empty_diagram_has_empty_table() -> Result<(), GfkError> {
    let diagram = GridDiagram::new("empty", Vec::new(), Vec::new())?;
    let table = IntersectionTable::build(&diagram);
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn torus_table_matches_direct_counts() -> Result<(), GfkError> {
    check_against_direct_counts(&gen_torus_diagram(2, 3)?);
    check_against_direct_counts(&gen_torus_diagram(3, 4)?);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_tables_match_direct_counts(seed in any::<u64>(), n in 2u8..7) {
        let mut rng = StdRng::seed_from_u64(seed);
        let diagram = gen_random_diagram(n, &mut rng).unwrap();
        check_against_direct_counts(&diagram);
    }
}
