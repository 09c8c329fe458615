use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use depot_util::errors::DepotError;

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "depot.toml";

/// Project configuration loaded from `depot.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepotConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub state: StateConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Catalog location from `[catalog]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "catalog.toml".to_string()
}

/// Persisted engine state location from `[state]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

fn default_state_path() -> String {
    ".depot/state.json".to_string()
}

/// Resolution settings from `[resolver]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default, rename = "upgrade-policy")]
    pub upgrade_policy: UpgradePolicy,
}

/// What to do when a dependency is already installed at another version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpgradePolicy {
    /// Replace the installed version unless another package pins it.
    #[default]
    InPlace,
    /// Always refuse with a version conflict.
    Strict,
}

impl DepotConfig {
    /// Load `depot.toml` from `dir`, or return defaults if the file doesn't exist.
    pub fn load(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| DepotError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| {
                DepotError::Config {
                    message: format!("Failed to parse {CONFIG_FILE}: {e}"),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Catalog path, resolved against the project directory.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog.path)
    }

    /// State path, resolved against the project directory.
    pub fn state_path(&self, root: &Path) -> PathBuf {
        root.join(&self.state.path)
    }
}
