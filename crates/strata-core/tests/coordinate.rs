use strata_core::coordinate::ModuleCoordinate;

#[test]
fn coordinate_parse_valid() {
    let coord = ModuleCoordinate::parse("com.example:my-lib:1.0.0").unwrap();
    assert_eq!(coord.group, "com.example");
    assert_eq!(coord.name, "my-lib");
    assert_eq!(coord.version, "1.0.0");
}

#[test]
fn coordinate_parse_two_parts_fails() {
    assert!(ModuleCoordinate::parse("group:name").is_err());
}

#[test]
fn coordinate_parse_four_parts_fails() {
    assert!(ModuleCoordinate::parse("group:name:version:extra").is_err());
}

#[test]
fn coordinate_parse_empty_string_fails() {
    assert!(ModuleCoordinate::parse("").is_err());
}

#[test]
fn coordinate_parse_empty_part_fails() {
    assert!(ModuleCoordinate::parse("group::1.0").is_err());
}

#[test]
fn coordinate_parse_error_names_the_input() {
    let err = ModuleCoordinate::parse("nonsense").unwrap_err();
    assert!(err.to_string().contains("nonsense"));
}

#[test]
fn coordinate_display_roundtrip() {
    let s = "com.example:my-lib:1.0.0";
    let coord = ModuleCoordinate::parse(s).unwrap();
    assert_eq!(coord.to_string(), s);
}

#[test]
fn coordinate_id_drops_version() {
    let coord = ModuleCoordinate::new("org.example", "lib", "2.0");
    let id = coord.id();
    assert_eq!(id.group, "org.example");
    assert_eq!(id.name, "lib");
    assert_eq!(id.to_string(), "org.example:lib");
}

#[test]
fn coordinate_matches_id() {
    let coord = ModuleCoordinate::new("org.example", "lib", "2.0");
    assert!(coord.matches_id("org.example", "lib"));
    assert!(!coord.matches_id("org.example", "other"));
    assert!(!coord.matches_id("org.other", "lib"));
}
