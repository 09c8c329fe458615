//! The engine's mutable state and its serialised form.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use depot_util::errors::DepotError;
use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// Installed set, reverse-dependency index and history.
///
/// `reverse_deps[dep]` holds every installed package whose current version
/// declares `dep`; empty sets are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    #[serde(default)]
    pub installed: BTreeMap<String, String>,
    #[serde(default, rename = "reverse-deps")]
    pub reverse_deps: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// The part of [`EngineState`] that resolution mutates, captured for rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GraphSnapshot {
    installed: BTreeMap<String, String>,
    reverse_deps: BTreeMap<String, BTreeSet<String>>,
}

impl EngineState {
    pub(crate) fn graph_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            installed: self.installed.clone(),
            reverse_deps: self.reverse_deps.clone(),
        }
    }

    pub(crate) fn rollback(&mut self, snapshot: GraphSnapshot) {
        self.installed = snapshot.installed;
        self.reverse_deps = snapshot.reverse_deps;
    }

    pub(crate) fn link(&mut self, dependent: &str, dependency: &str) {
        self.reverse_deps
            .entry(dependency.to_string())
            .or_default()
            .insert(dependent.to_string());
    }

    pub(crate) fn unlink(&mut self, dependent: &str, dependency: &str) {
        if let Some(set) = self.reverse_deps.get_mut(dependency) {
            set.remove(dependent);
            if set.is_empty() {
                self.reverse_deps.remove(dependency);
            }
        }
    }

    /// Installed packages that currently require `name`, sorted.
    pub fn dependents_of(&self, name: &str) -> Vec<String> {
        self.reverse_deps
            .get(name)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Load a state blob from `path`; a missing file is an empty state.
    pub fn load(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| DepotError::State {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_json(&content).map_err(Into::into)
    }

    /// Write the state blob to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> miette::Result<()> {
        let json = self.to_json()?;
        depot_util::fs::write_atomic(path, &json).map_err(|e| {
            DepotError::State {
                message: format!("Failed to write {}: {e}", path.display()),
            }
            .into()
        })
    }

    pub fn from_json(content: &str) -> Result<Self, DepotError> {
        serde_json::from_str(content).map_err(|e| DepotError::State {
            message: format!("Failed to parse state: {e}"),
        })
    }

    pub fn to_json(&self) -> Result<String, DepotError> {
        serde_json::to_string_pretty(self).map_err(|e| DepotError::State {
            message: format!("Failed to serialize state: {e}"),
        })
    }
}
