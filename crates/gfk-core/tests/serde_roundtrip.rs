use gfk_core::serde_io::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
use gfk_core::{Bidegree, ErrorInfo, GfkError, SchemaVersion};

#[test]
fn errors_round_trip_through_json() -> Result<(), GfkError> {
    let err = GfkError::Diagram(ErrorInfo::new("marker-out-of-range", "outside").with_context("x", 9));
    let bytes = to_canonical_json_bytes(&err)?;
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.starts_with(r#"{"detail":"#));
    assert!(text.contains(r#""family":"Diagram""#));
    let restored: GfkError = from_json_slice(&bytes)?;
    assert_eq!(restored, err);
    Ok(())
}

#[test]
fn canonical_json_orders_keys() -> Result<(), GfkError> {
    let bytes = to_canonical_json_bytes(&Bidegree::new(-2, 1))?;
    assert_eq!(bytes, br#"{"alexander":1,"maslov":-2}"#.to_vec());
    Ok(())
}

#[test]
fn yaml_round_trip() -> Result<(), GfkError> {
    let version = SchemaVersion::new(1, 2, 0);
    let yaml = to_yaml_string(&version)?;
    let restored: SchemaVersion = from_yaml_slice(yaml.as_bytes())?;
    assert_eq!(restored, version);
    Ok(())
}

#[test]
fn schema_compatibility() {
    let current = SchemaVersion::new(1, 2, 0);
    assert!(current.is_compatible_with(&SchemaVersion::new(1, 1, 7)));
    assert!(!current.is_compatible_with(&SchemaVersion::new(1, 3, 0)));
    assert!(!current.is_compatible_with(&SchemaVersion::new(2, 0, 0)));
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}

#[test]
fn bidegree_helpers() {
    let b: Bidegree = (-1, 0).into();
    assert_eq!(b, Bidegree::new(-1, 0));
    assert_eq!(b.to_string(), "(-1, 0)");
    assert!(Bidegree::new(-1, 5) < Bidegree::new(0, -5));
}
