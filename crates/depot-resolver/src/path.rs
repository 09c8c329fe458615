//! The chain of packages currently being resolved.
//!
//! Recursive installation pushes each package onto the path before walking
//! its dependencies and pops it afterwards. Seeing a name that is already on
//! the path means the catalog describes a dependency cycle.

use std::collections::HashMap;

/// Packages under resolution, in descent order, with their pending versions.
#[derive(Debug, Default)]
pub struct ResolutionPath {
    stack: Vec<(String, String)>,
    pending: HashMap<String, String>,
}

impl ResolutionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `name` at `version`. Returns `false` if it is already on the path.
    pub fn enter(&mut self, name: &str, version: &str) -> bool {
        if self.pending.contains_key(name) {
            return false;
        }
        self.pending.insert(name.to_string(), version.to_string());
        self.stack.push((name.to_string(), version.to_string()));
        true
    }

    /// Pop the innermost package.
    pub fn leave(&mut self) {
        if let Some((name, _)) = self.stack.pop() {
            self.pending.remove(&name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pending.contains_key(name)
    }

    /// The version `name` is being installed at, if it is on the path.
    pub fn pending_version(&self, name: &str) -> Option<&str> {
        self.pending.get(name).map(String::as_str)
    }

    /// Names on the path, outermost first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stack.iter().map(|(name, _)| name.as_str())
    }

    /// The path from the first occurrence of `name` to the top, closed with
    /// `name` again, e.g. `A -> B -> A`.
    pub fn cycle_through(&self, name: &str) -> Vec<String> {
        let start = self
            .stack
            .iter()
            .position(|(n, _)| n == name)
            .unwrap_or(0);
        let mut chain: Vec<String> = self.stack[start..]
            .iter()
            .map(|(n, _)| n.clone())
            .collect();
        chain.push(name.to_string());
        chain
    }
}
