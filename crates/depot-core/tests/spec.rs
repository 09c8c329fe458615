use depot_core::spec::PackageSpec;
use depot_util::errors::DepotError;

#[test]
fn parse_bare_name() {
    let spec = PackageSpec::parse("requests").unwrap();
    assert_eq!(spec.name, "requests");
    assert_eq!(spec.version, None);
    assert!(!spec.is_pinned());
}

#[test]
fn parse_pinned() {
    let spec: PackageSpec = "C==1.0".parse().unwrap();
    assert_eq!(spec, PackageSpec::pinned("C", "1.0"));
    assert!(spec.is_pinned());
}

#[test]
fn parse_trims_whitespace() {
    let spec = PackageSpec::parse(" C == 2.0 ").unwrap();
    assert_eq!(spec, PackageSpec::pinned("C", "2.0"));
}

#[test]
fn parse_empty_name_fails() {
    let err = PackageSpec::parse("==1.0").unwrap_err();
    assert!(matches!(err, DepotError::InvalidSpec { .. }));
}

#[test]
fn parse_empty_version_fails() {
    let err = PackageSpec::parse("C==").unwrap_err();
    assert!(matches!(err, DepotError::InvalidSpec { .. }));
}

#[test]
fn display_roundtrip() {
    for s in ["C", "C==1.0"] {
        assert_eq!(PackageSpec::parse(s).unwrap().to_string(), s);
    }
}

#[test]
fn parse_double_pin_fails() {
    let err = PackageSpec::parse("C==1.0==2.0").unwrap_err();
    assert!(matches!(err, DepotError::InvalidSpec { .. }));
}
