//! Operation: list installed packages.

use depot_resolver::graph::{self, InstalledEntry};
use depot_resolver::Engine;

use crate::CommandResult;

/// The installed set sorted by name. An empty set is reported as `Info`.
pub fn list(engine: &Engine) -> CommandResult<Vec<InstalledEntry>> {
    let entries = graph::list_installed(engine);
    if entries.is_empty() {
        CommandResult::Info(entries)
    } else {
        CommandResult::Success(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::catalog::Catalog;
    use depot_core::spec::PackageSpec;

    #[test]
    fn lists_sorted_with_dependents() {
        let mut c = Catalog::new();
        c.add_version("Z", "1.0", &["A"]).unwrap();
        c.add_version("A", "1.0", &[] as &[&str]).unwrap();
        let mut engine = Engine::new(c);
        assert!(list(&engine).is_info());

        engine.install(&PackageSpec::any("Z")).unwrap();
        let result = list(&engine);
        let entries = result.value().unwrap();
        assert_eq!(entries[0].name, "A");
        assert_eq!(entries[0].dependents, vec!["Z".to_string()]);
        assert_eq!(entries[1].dependencies, vec![PackageSpec::any("A")]);
    }
}
