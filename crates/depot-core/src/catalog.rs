//! The package catalog: every known package version and its declared
//! dependencies. The engine treats it as a read-only oracle.

use std::collections::BTreeMap;
use std::path::Path;

use depot_util::errors::DepotError;
use serde::{Deserialize, Serialize};

use crate::spec::PackageSpec;
use crate::version;

/// Available package versions, keyed by name then version string.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packages: BTreeMap<String, BTreeMap<String, Vec<PackageSpec>>>,
    groups: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name==version` with its dependency strings (`dep` or
    /// `dep==version`). Re-adding an existing version replaces its
    /// dependency list.
    pub fn add_version<S: AsRef<str>>(
        &mut self,
        name: &str,
        version: &str,
        deps: &[S],
    ) -> Result<(), DepotError> {
        let deps = deps
            .iter()
            .map(|d| PackageSpec::parse(d.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.packages
            .entry(name.to_string())
            .or_default()
            .insert(version.to_string(), deps);
        Ok(())
    }

    /// Register a named group of member specs (`@other` nests a group).
    pub fn add_group(&mut self, name: &str, members: Vec<String>) {
        self.groups.insert(name.to_string(), members);
    }

    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn contains_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn contains(&self, name: &str, version: &str) -> bool {
        self.packages
            .get(name)
            .is_some_and(|versions| versions.contains_key(version))
    }

    /// All recorded versions of `name`, lowest first.
    pub fn versions(&self, name: &str) -> Vec<&str> {
        let mut versions: Vec<&str> = self
            .packages
            .get(name)
            .map(|v| v.keys().map(String::as_str).collect())
            .unwrap_or_default();
        versions.sort_by(|a, b| version::compare(a, b));
        versions
    }

    /// The highest recorded version of `name`, or `None` if unknown.
    pub fn best_available(&self, name: &str) -> Option<&str> {
        self.packages
            .get(name)?
            .keys()
            .max_by(|a, b| version::compare(a, b))
            .map(String::as_str)
    }

    /// Declared dependencies of `name==version`; empty if unknown.
    pub fn dependencies_of(&self, name: &str, version: &str) -> &[PackageSpec] {
        self.packages
            .get(name)
            .and_then(|versions| versions.get(version))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// On-disk catalog description, usually `catalog.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub package: Vec<CatalogEntry>,
    #[serde(default)]
    pub group: Vec<GroupEntry>,
}

/// One `[[package]]` table: a single version of a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// One `[[group]]` table: a named set of member specs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl CatalogFile {
    /// Load and parse a catalog file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DepotError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content).map_err(Into::into)
    }

    pub fn parse(content: &str) -> Result<Self, DepotError> {
        toml::from_str(content).map_err(|e| DepotError::Catalog {
            message: format!("Failed to parse catalog: {e}"),
        })
    }

    /// Build the in-memory catalog, validating every dependency string.
    pub fn into_catalog(self) -> Result<Catalog, DepotError> {
        let mut catalog = Catalog::new();
        for entry in self.package {
            catalog.add_version(&entry.name, &entry.version, &entry.dependencies)?;
        }
        for group in self.group {
            catalog.add_group(&group.name, group.members);
        }
        tracing::debug!(
            packages = catalog.packages.len(),
            groups = catalog.groups.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Read `path` and build a [`Catalog`] from it.
pub fn load(path: &Path) -> miette::Result<Catalog> {
    Ok(CatalogFile::from_path(path)?.into_catalog()?)
}
