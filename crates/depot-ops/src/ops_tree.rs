//! Operation: render the dependency tree.

use depot_resolver::graph::DependencyGraph;
use depot_resolver::Engine;
use depot_util::errors::DepotError;

use crate::CommandResult;

/// Options for `depot tree`.
#[derive(Default)]
pub struct TreeOptions {
    /// Root package; every installed package when `None`.
    pub root: Option<String>,
    /// Show who depends on `root` instead of what it depends on.
    pub inverted: bool,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
}

/// Render the tree as text. Nothing installed is reported as `Info`.
pub fn tree(engine: &Engine, opts: &TreeOptions) -> CommandResult<String> {
    let graph = DependencyGraph::from_engine(engine);
    if graph.is_empty() && opts.root.is_none() {
        return CommandResult::Info(String::new());
    }

    if opts.inverted {
        return match &opts.root {
            Some(name) => CommandResult::Success(graph.print_inverted_tree(name)),
            None => CommandResult::Error(DepotError::Generic {
                message: "--inverted needs a package name".to_string(),
            }),
        };
    }
    CommandResult::Success(graph.print_tree(opts.root.as_deref(), opts.depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::catalog::Catalog;
    use depot_core::spec::PackageSpec;

    fn engine() -> Engine {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["B"]).unwrap();
        c.add_version("B", "1.0", &[] as &[&str]).unwrap();
        let mut engine = Engine::new(c);
        engine.install(&PackageSpec::any("A")).unwrap();
        engine
    }

    #[test]
    fn renders_whole_forest() {
        let result = tree(&engine(), &TreeOptions::default());
        assert_eq!(
            result.value().map(String::as_str),
            Some("A==1.0\n└── B==1.0\nB==1.0\n")
        );
    }

    #[test]
    fn inverted_needs_root() {
        let opts = TreeOptions {
            inverted: true,
            ..Default::default()
        };
        assert!(tree(&engine(), &opts).is_error());
    }

    #[test]
    fn inverted_lists_dependents() {
        let opts = TreeOptions {
            root: Some("B".to_string()),
            inverted: true,
            depth: None,
        };
        assert_eq!(
            tree(&engine(), &opts).value().map(String::as_str),
            Some("B==1.0\n└── A==1.0\n")
        );
    }

    #[test]
    fn empty_engine_is_info() {
        let engine = Engine::new(Catalog::new());
        assert!(tree(&engine, &TreeOptions::default()).is_info());
    }
}
