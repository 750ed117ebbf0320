//! Path parsing tests

use std::str::FromStr;

use arbor::path::{Index, Path, PathError, Segment, normalize_path};

#[test]
fn test_parse_plain_and_indexed_segments() {
    let path = Path::from_str("colors.Color(0).name").unwrap();

    assert_eq!(path.len(), 3);
    assert_eq!(path.segments()[0], Segment::named("colors"));
    assert_eq!(path.segments()[1], Segment::indexed("Color", 0));
    assert_eq!(path.last().name(), "name");
    assert!(!path.has_append());
}

#[test]
fn test_parse_append_sentinel() {
    let path = Path::from_str("colors.Color(-1)").unwrap();

    assert_eq!(path.last(), &Segment::append("Color"));
    assert_eq!(path.last().index(), Some(Index::Append));
    assert!(path.has_append());
}

#[test]
fn test_normalization_drops_empty_components() {
    assert_eq!(normalize_path("a..b."), "a.b");
    assert_eq!(Path::from_str("..a..b.").unwrap(), Path::from_str("a.b").unwrap());
}

#[test]
fn test_empty_path_is_rejected() {
    assert_eq!(Path::from_str(""), Err(PathError::Empty));
    assert_eq!(Path::from_str("..."), Err(PathError::Empty));
}

#[test]
fn test_invalid_indexes_are_rejected() {
    let err = Path::from_str("colors.Color(-2)").unwrap_err();
    assert!(matches!(err, PathError::InvalidSegment { ref segment, .. } if segment == "Color(-2)"));

    assert!(Path::from_str("colors.Color(one)").is_err());
    assert!(Path::from_str("colors.Color(1").is_err());
}

#[test]
fn test_display_matches_input() {
    for input in ["name", "colors.Color(1).name", "a.Thing(-1).b"] {
        assert_eq!(Path::from_str(input).unwrap().to_string(), input);
    }
}

#[test]
fn test_path_built_from_segments() {
    let path = Path::from(Segment::named("colors")).push(Segment::append("Color"));
    assert_eq!(path.to_string(), "colors.Color(-1)");
    assert_eq!(Path::new(Vec::new()), Err(PathError::Empty));
}
