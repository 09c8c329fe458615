//! Record of applied top-level operations, newest last.

use serde::{Deserialize, Serialize};

/// A package whose installed version was replaced in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replaced {
    pub name: String,
    pub previous: String,
}

/// One successfully applied operation, with what undo needs to reverse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum HistoryEntry {
    Install {
        name: String,
        version: String,
        /// Packages that were not installed before, in install order
        /// (dependencies first).
        #[serde(default)]
        added: Vec<String>,
        /// Packages moved off another version, in the order they were replaced.
        #[serde(default)]
        replaced: Vec<Replaced>,
    },
    Remove {
        name: String,
    },
    Update {
        name: String,
        version: String,
        previous: Option<String>,
    },
}

impl HistoryEntry {
    /// The top-level package this entry is about.
    pub fn name(&self) -> &str {
        match self {
            HistoryEntry::Install { name, .. }
            | HistoryEntry::Remove { name }
            | HistoryEntry::Update { name, .. } => name,
        }
    }
}
