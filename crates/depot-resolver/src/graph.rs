//! Read-only views of the installed state: the sorted listing and the
//! dependency tree.

use std::collections::{HashMap, HashSet};
use std::fmt;

use depot_core::spec::PackageSpec;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::engine::Engine;

/// One row of [`list_installed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledEntry {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<PackageSpec>,
    pub dependents: Vec<String>,
}

/// The installed set sorted by name, with each package's declared
/// dependencies and current dependents.
pub fn list_installed(engine: &Engine) -> Vec<InstalledEntry> {
    engine
        .installed()
        .iter()
        .map(|(name, version)| InstalledEntry {
            name: name.clone(),
            version: version.clone(),
            dependencies: engine.catalog().dependencies_of(name, version).to_vec(),
            dependents: engine.dependents_of(name),
        })
        .collect()
}

/// A node in the installed dependency graph.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TreeNode {
    pub name: String,
    /// `None` for a declared dependency that is not installed.
    pub version: Option<String>,
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}=={v}", self.name),
            None => write!(f, "{} (not installed)", self.name),
        }
    }
}

/// The installed packages and their declared dependencies, backed by petgraph.
pub struct DependencyGraph {
    graph: DiGraph<TreeNode, ()>,
    /// Lookup from package name to node index.
    index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Build the graph of everything currently installed.
    pub fn from_engine(engine: &Engine) -> Self {
        let mut g = Self::new();
        for (name, version) in engine.installed() {
            g.add_node(TreeNode {
                name: name.clone(),
                version: Some(version.clone()),
            });
        }
        for (name, version) in engine.installed() {
            let from = g.add_node(TreeNode {
                name: name.clone(),
                version: Some(version.clone()),
            });
            for dep in engine.catalog().dependencies_of(name, version) {
                let to = g.add_node(TreeNode {
                    name: dep.name.clone(),
                    version: None,
                });
                g.add_edge(from, to);
            }
        }
        g
    }

    /// Add or retrieve a node. If the name already exists, returns the existing index.
    pub fn add_node(&mut self, node: TreeNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.name) {
            return idx;
        }
        let name = node.name.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(name, idx);
        idx
    }

    /// Add a dependency edge from `from` to `to`.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Direct dependencies of a node, in declaration order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph yields the most recently added edge first
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect();
        deps.reverse();
        deps
    }

    /// Reverse dependencies (who depends on this node), sorted by name.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut dependents: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect();
        dependents.sort_by(|a, b| self.graph[*a].name.cmp(&self.graph[*b].name));
        dependents
    }

    /// Render the tree below `root`, or below every installed package in
    /// name order when `root` is `None`.
    ///
    /// A dependency already on the current branch is printed with a
    /// `(cyclic)` marker instead of being expanded again.
    pub fn print_tree(&self, root: Option<&str>, max_depth: Option<usize>) -> String {
        let mut output = String::new();

        let roots: Vec<NodeIndex> = match root {
            Some(name) => match self.find(name) {
                Some(idx) => vec![idx],
                None => {
                    output.push_str(&format!("{name} (not installed)\n"));
                    return output;
                }
            },
            None => {
                let mut roots: Vec<NodeIndex> = self
                    .graph
                    .node_indices()
                    .filter(|&idx| self.graph[idx].version.is_some())
                    .collect();
                roots.sort_by(|a, b| self.graph[*a].name.cmp(&self.graph[*b].name));
                roots
            }
        };

        for idx in roots {
            output.push_str(&format!("{}\n", self.graph[idx]));
            let mut visited = HashSet::new();
            visited.insert(idx);
            let deps = self.dependencies_of(idx);
            let count = deps.len();
            for (i, child) in deps.into_iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, child, "", is_last, 1, max_depth, &mut visited);
            }
        }

        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];

        if visited.contains(&idx) {
            output.push_str(&format!("{prefix}{connector}{node} (cyclic)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if node.version.is_none() {
            return;
        }
        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        visited.insert(idx);
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, child) in deps.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }
        visited.remove(&idx);
    }

    /// Render who depends on `name`, transitively.
    pub fn print_inverted_tree(&self, name: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.find(name) else {
            output.push_str(&format!("{name} (not installed)\n"));
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut visited = HashSet::new();
        visited.insert(idx);

        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep_idx) in dependents.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(&mut output, dep_idx, "", is_last, &mut visited);
        }

        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];

        if !visited.insert(idx) {
            output.push_str(&format!("{prefix}{connector}{node} (cyclic)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep_idx) in dependents.into_iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(output, dep_idx, &child_prefix, is_last, visited);
        }

        visited.remove(&idx);
    }

    /// True when nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the dependency tree of the engine's installed packages.
pub fn show_tree(engine: &Engine, root: Option<&str>) -> String {
    DependencyGraph::from_engine(engine).print_tree(root, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EngineState;
    use depot_core::catalog::Catalog;

    fn engine_with(installed: &[(&str, &str)], catalog: Catalog) -> Engine {
        let mut state = EngineState::default();
        for (name, version) in installed {
            state.installed.insert(name.to_string(), version.to_string());
        }
        Engine::from_state(catalog, state)
    }

    #[test]
    fn tree_for_chain() {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["B==1.0"]).unwrap();
        c.add_version("B", "1.0", &["C==1.0"]).unwrap();
        c.add_version("C", "1.0", &[] as &[&str]).unwrap();
        let engine = engine_with(&[("A", "1.0"), ("B", "1.0"), ("C", "1.0")], c);

        let tree = show_tree(&engine, Some("A"));
        assert_eq!(tree, "A==1.0\n└── B==1.0\n    └── C==1.0\n");
    }

    #[test]
    fn tree_marks_cycles() {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["B"]).unwrap();
        c.add_version("B", "1.0", &["A"]).unwrap();
        let engine = engine_with(&[("A", "1.0"), ("B", "1.0")], c);

        let tree = show_tree(&engine, Some("A"));
        assert_eq!(tree, "A==1.0\n└── B==1.0\n    └── A==1.0 (cyclic)\n");
    }

    #[test]
    fn tree_marks_missing_dependency() {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["Z"]).unwrap();
        let engine = engine_with(&[("A", "1.0")], c);

        let tree = show_tree(&engine, None);
        assert_eq!(tree, "A==1.0\n└── Z (not installed)\n");
    }

    #[test]
    fn shared_dependency_is_not_cyclic() {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["B", "C"]).unwrap();
        c.add_version("B", "1.0", &["C"]).unwrap();
        c.add_version("C", "1.0", &[] as &[&str]).unwrap();
        let engine = engine_with(&[("A", "1.0"), ("B", "1.0"), ("C", "1.0")], c);

        let tree = show_tree(&engine, Some("A"));
        assert!(!tree.contains("cyclic"), "got:\n{tree}");
        assert_eq!(tree.matches("C==1.0").count(), 2);
    }

    #[test]
    fn depth_limit() {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["B"]).unwrap();
        c.add_version("B", "1.0", &["C"]).unwrap();
        c.add_version("C", "1.0", &[] as &[&str]).unwrap();
        let engine = engine_with(&[("A", "1.0"), ("B", "1.0"), ("C", "1.0")], c);

        let tree = DependencyGraph::from_engine(&engine).print_tree(Some("A"), Some(1));
        assert!(tree.contains("B==1.0"));
        assert!(!tree.contains("C==1.0"));
    }

    #[test]
    fn inverted_tree() {
        let mut c = Catalog::new();
        c.add_version("A", "1.0", &["C"]).unwrap();
        c.add_version("B", "1.0", &["C"]).unwrap();
        c.add_version("C", "1.0", &[] as &[&str]).unwrap();
        let engine = engine_with(&[("A", "1.0"), ("B", "1.0"), ("C", "1.0")], c);

        let inv = DependencyGraph::from_engine(&engine).print_inverted_tree("C");
        assert_eq!(inv, "C==1.0\n├── A==1.0\n└── B==1.0\n");
    }
}
