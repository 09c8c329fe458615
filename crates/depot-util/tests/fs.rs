use depot_util::fs::{find_project_root, write_atomic};
use tempfile::TempDir;

#[test]
fn test_find_project_root_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("depot.toml"), "").unwrap();
    let result = find_project_root(tmp.path(), "depot.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_project_root_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("depot.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_project_root(&nested, "depot.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_project_root_ignores_directories() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("depot.toml")).unwrap();
    assert_eq!(find_project_root(tmp.path(), "depot.toml.missing"), None);
    assert_ne!(
        find_project_root(tmp.path(), "depot.toml"),
        Some(tmp.path().to_path_buf())
    );
}

#[test]
fn test_write_atomic_creates_parent_and_replaces() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".depot").join("state.json");
    write_atomic(&path, "first").unwrap();
    write_atomic(&path, "second").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    assert!(!tmp.path().join(".depot").join("state.json.tmp").exists());
}
