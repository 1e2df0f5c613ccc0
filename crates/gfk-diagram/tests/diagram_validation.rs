use gfk_core::GfkError;
use gfk_diagram::{GridDiagram, Marker, Point};

fn error_code(result: Result<GridDiagram, GfkError>) -> String {
    match result {
        Err(GfkError::Diagram(info)) => info.code,
        other => panic!("expected diagram error, got {other:?}"),
    }
}

#[test]
fn unknot_from_points() -> Result<(), GfkError> {
    let diagram = GridDiagram::new(
        "0_1",
        vec![Point::new(3, 3), Point::new(1, 1)],
        vec![Point::new(1, 3), Point::new(3, 1)],
    )?;
    assert_eq!(diagram.grid_number(), 2);
    assert_eq!(diagram.grid_size(), 4);
    // sorted by column
    assert_eq!(diagram.os(), &[Point::new(1, 1), Point::new(3, 3)]);
    assert_eq!(diagram.markers(Marker::X), diagram.xs());
    Ok(())
}

#[test]
fn arc_presentation_places_markers_by_row() -> Result<(), GfkError> {
    let diagram = GridDiagram::from_arc_presentation("twisted", &[1, 2, 3, 1, 2, 3])?;
    assert_eq!(
        diagram.os(),
        &[Point::new(1, 1), Point::new(3, 5), Point::new(5, 3)]
    );
    assert_eq!(
        diagram.xs(),
        &[Point::new(1, 3), Point::new(3, 1), Point::new(5, 5)]
    );
    Ok(())
}

#[test]
fn sequences_match_odd_points() -> Result<(), GfkError> {
    let a = GridDiagram::from_sequences("a", &[0, 1], &[1, 0])?;
    let b = GridDiagram::new(
        "a",
        vec![Point::new(1, 1), Point::new(3, 3)],
        vec![Point::new(1, 3), Point::new(3, 1)],
    )?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn rotation_is_a_valid_mirror() -> Result<(), GfkError> {
    let diagram = GridDiagram::from_arc_presentation("t", &[1, 2, 3, 1, 2, 3])?;
    let mirror = diagram.rotate90();
    assert_eq!(mirror.name(), "tm");
    assert_eq!(mirror.grid_number(), 3);
    let revalidated = GridDiagram::new("tm", mirror.os().to_vec(), mirror.xs().to_vec())?;
    assert_eq!(revalidated, mirror);
    // four quarter turns are the identity on markings
    let full = mirror.rotate90().rotate90().rotate90();
    assert_eq!(full.os(), diagram.os());
    assert_eq!(full.xs(), diagram.xs());
    Ok(())
}

#[test]
fn rejects_malformed_markings() {
    assert_eq!(
        error_code(GridDiagram::new("x", vec![Point::new(1, 1)], vec![])),
        "marker-count-mismatch"
    );
    assert_eq!(
        error_code(GridDiagram::new(
            "x",
            vec![Point::new(1, 1), Point::new(1, 3)],
            vec![Point::new(1, 3), Point::new(3, 1)],
        )),
        "duplicate-column"
    );
    assert_eq!(
        error_code(GridDiagram::new(
            "x",
            vec![Point::new(1, 1), Point::new(3, 3)],
            vec![Point::new(1, 3), Point::new(3, 3)],
        )),
        "duplicate-row"
    );
    assert_eq!(
        error_code(GridDiagram::new(
            "x",
            vec![Point::new(1, 1), Point::new(3, 5)],
            vec![Point::new(1, 3), Point::new(3, 1)],
        )),
        "marker-out-of-range"
    );
    assert_eq!(
        error_code(GridDiagram::new(
            "x",
            vec![Point::new(0, 1), Point::new(3, 3)],
            vec![Point::new(1, 3), Point::new(3, 1)],
        )),
        "marker-not-centered"
    );
    assert_eq!(
        error_code(GridDiagram::from_arc_presentation("x", &[1, 2, 3])),
        "odd-arc-presentation"
    );
    assert_eq!(
        error_code(GridDiagram::from_arc_presentation("x", &[0, 1, 2, 1])),
        "arc-column-out-of-range"
    );
    assert_eq!(
        error_code(GridDiagram::from_sequences("x", &[0, 2], &[1, 0])),
        "marker-out-of-range"
    );
}

#[test]
fn rejects_grids_wider_than_the_code() {
    let rows: Vec<u8> = (0..17).collect();
    let shifted: Vec<u8> = (0..17).map(|i| (i + 1) % 17).collect();
    let err = GridDiagram::from_sequences("wide", &rows, &shifted).unwrap_err();
    assert_eq!(err.info().code, "grid-number-limit");
    assert_eq!(err.info().context.get("max"), Some(&"16".to_string()));
}
