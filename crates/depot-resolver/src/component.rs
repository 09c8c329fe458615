//! Packages and named groups of packages behind one interface.
//!
//! A group is installed by installing its members in order and removed by
//! removing them dependents-first. Both operations are all-or-nothing: if
//! any member fails, the engine is put back exactly as it was.

use depot_core::catalog::Catalog;
use depot_core::spec::PackageSpec;
use depot_util::errors::DepotError;
use tracing::{debug, warn};

use crate::engine::Engine;
use crate::outcome::Outcome;

/// Prefix that marks a group reference, e.g. `@web`.
pub const GROUP_PREFIX: char = '@';

/// A single package or a named group of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Leaf { spec: PackageSpec },
    Group { name: String, children: Vec<Component> },
}

impl Component {
    pub fn leaf(spec: PackageSpec) -> Self {
        Component::Leaf { spec }
    }

    /// Resolve `reference` (`name`, `name==version` or `@group`) against the
    /// catalog's group definitions.
    pub fn from_catalog(catalog: &Catalog, reference: &str) -> Result<Self, DepotError> {
        let mut stack = Vec::new();
        build(catalog, reference, &mut stack)
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Leaf { spec } => &spec.name,
            Component::Group { name, .. } => name,
        }
    }

    /// For a leaf, the declared dependencies of the version it resolves to;
    /// for a group, the specs of every package it contains.
    pub fn dependencies(&self, catalog: &Catalog) -> Vec<PackageSpec> {
        match self {
            Component::Leaf { spec } => {
                let version = spec
                    .version
                    .as_deref()
                    .or_else(|| catalog.best_available(&spec.name));
                version
                    .map(|v| catalog.dependencies_of(&spec.name, v).to_vec())
                    .unwrap_or_default()
            }
            Component::Group { .. } => self.leaves().into_iter().cloned().collect(),
        }
    }

    /// Every package spec in the component, depth-first in declaration order.
    pub fn leaves(&self) -> Vec<&PackageSpec> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    pub fn install(&self, engine: &mut Engine) -> Result<Vec<Outcome>, DepotError> {
        match self {
            Component::Leaf { spec } => Ok(vec![engine.install(spec)?]),
            Component::Group { name, .. } => {
                let before = engine.snapshot();
                let mut outcomes = Vec::new();
                for spec in self.leaves() {
                    match engine.install(spec) {
                        Ok(outcome) => outcomes.push(outcome),
                        Err(e) => {
                            warn!(group = %name, member = %spec, error = %e, "group install failed, restoring");
                            engine.restore(before);
                            return Err(e);
                        }
                    }
                }
                Ok(outcomes)
            }
        }
    }

    pub fn remove(&self, engine: &mut Engine) -> Result<Vec<Outcome>, DepotError> {
        match self {
            Component::Leaf { spec } => Ok(vec![engine.remove(spec)?]),
            Component::Group { name, .. } => {
                let before = engine.snapshot();
                let mut pending: Vec<&PackageSpec> = self.leaves();
                pending.reverse();
                let mut outcomes = Vec::new();

                while !pending.is_empty() {
                    // Members still required by other pending members wait.
                    let next = pending
                        .iter()
                        .position(|spec| {
                            engine.dependents_of(&spec.name).iter().all(|d| {
                                !pending.iter().any(|p| p.name == *d && p.name != spec.name)
                            })
                        })
                        .unwrap_or(0);
                    let spec = pending.remove(next);
                    debug!(group = %name, member = %spec, "removing group member");
                    match engine.remove(spec) {
                        Ok(outcome) => outcomes.push(outcome),
                        Err(e) => {
                            warn!(group = %name, member = %spec, error = %e, "group removal failed, restoring");
                            engine.restore(before);
                            return Err(e);
                        }
                    }
                }
                Ok(outcomes)
            }
        }
    }

    /// An indented outline of the component.
    pub fn display(&self) -> String {
        let mut output = String::new();
        render(self, 0, &mut output);
        output
    }
}

fn build(catalog: &Catalog, reference: &str, stack: &mut Vec<String>) -> Result<Component, DepotError> {
    let Some(group) = reference.strip_prefix(GROUP_PREFIX) else {
        return Ok(Component::leaf(PackageSpec::parse(reference)?));
    };

    if stack.iter().any(|g| g == group) {
        let mut chain: Vec<String> = stack.iter().map(|g| format!("{GROUP_PREFIX}{g}")).collect();
        chain.push(reference.to_string());
        return Err(DepotError::CyclicDependency { chain });
    }
    let members = catalog
        .group(group)
        .ok_or_else(|| DepotError::PackageNotFound {
            name: reference.to_string(),
        })?;

    stack.push(group.to_string());
    let children = members
        .iter()
        .map(|m| build(catalog, m, stack))
        .collect::<Result<Vec<_>, _>>()?;
    stack.pop();

    Ok(Component::Group {
        name: group.to_string(),
        children,
    })
}

fn collect_leaves<'a>(component: &'a Component, out: &mut Vec<&'a PackageSpec>) {
    match component {
        Component::Leaf { spec } => out.push(spec),
        Component::Group { children, .. } => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}

fn render(component: &Component, indent: usize, output: &mut String) {
    let pad = " ".repeat(indent);
    match component {
        Component::Leaf { spec } => output.push_str(&format!("{pad}- {spec}\n")),
        Component::Group { name, children } => {
            output.push_str(&format!("{pad}[{name}]\n"));
            for child in children {
                render(child, indent + 2, output);
            }
        }
    }
}
