use depot_core::catalog::{Catalog, CatalogFile};
use depot_core::spec::PackageSpec;
use depot_util::errors::DepotError;

fn sample() -> Catalog {
    let mut c = Catalog::new();
    c.add_version("C", "1.0", &[] as &[&str]).unwrap();
    c.add_version("C", "2.0", &[] as &[&str]).unwrap();
    c.add_version("C", "1.10", &[] as &[&str]).unwrap();
    c.add_version("B", "1.0", &["C==1.0"]).unwrap();
    c
}

#[test]
fn best_available_uses_version_order() {
    let c = sample();
    assert_eq!(c.best_available("C"), Some("2.0"));
    assert_eq!(c.best_available("B"), Some("1.0"));
}

#[test]
fn best_available_unknown_package() {
    assert_eq!(sample().best_available("Z"), None);
}

#[test]
fn versions_sorted_by_version_order() {
    assert_eq!(sample().versions("C"), vec!["1.0", "1.10", "2.0"]);
}

#[test]
fn dependencies_of_known_and_unknown() {
    let c = sample();
    assert_eq!(c.dependencies_of("B", "1.0"), &[PackageSpec::pinned("C", "1.0")]);
    assert!(c.dependencies_of("B", "9.9").is_empty());
    assert!(c.dependencies_of("Z", "1.0").is_empty());
}

#[test]
fn add_version_is_idempotent_upsert() {
    let mut c = sample();
    c.add_version("B", "1.0", &["C"]).unwrap();
    assert_eq!(c.dependencies_of("B", "1.0"), &[PackageSpec::any("C")]);
    assert_eq!(c.versions("B").len(), 1);
}

#[test]
fn add_version_rejects_malformed_dependency() {
    let mut c = Catalog::new();
    let err = c.add_version("A", "1.0", &["B=="]).unwrap_err();
    assert!(matches!(err, DepotError::InvalidSpec { .. }));
    assert!(!c.contains_package("A"));
}

#[test]
fn catalog_file_parses_packages_and_groups() {
    let toml = r#"
[[package]]
name = "C"
version = "1.0"

[[package]]
name = "B"
version = "1.0"
dependencies = ["C==1.0"]

[[group]]
name = "base"
members = ["B", "C==1.0"]
"#;
    let catalog = CatalogFile::parse(toml).unwrap().into_catalog().unwrap();
    assert!(catalog.contains("C", "1.0"));
    assert_eq!(catalog.dependencies_of("B", "1.0").len(), 1);
    assert_eq!(
        catalog.group("base").unwrap(),
        &["B".to_string(), "C==1.0".to_string()]
    );
}

#[test]
fn catalog_file_load_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("catalog.toml");
    std::fs::write(&path, "[[package]]\nname = \"A\"\nversion = \"0.1\"\n").unwrap();
    let catalog = depot_core::catalog::load(&path).unwrap();
    assert_eq!(catalog.best_available("A"), Some("0.1"));
}

#[test]
fn catalog_file_missing_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(CatalogFile::from_path(&tmp.path().join("nope.toml")).is_err());
}
