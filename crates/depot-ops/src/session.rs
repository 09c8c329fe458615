//! A project session: configuration, catalog and persisted engine state.

use std::path::{Path, PathBuf};

use depot_core::catalog;
use depot_core::config::{DepotConfig, CONFIG_FILE};
use depot_resolver::state::EngineState;
use depot_resolver::Engine;
use depot_util::errors::DepotError;
use depot_util::fs::find_project_root;
use tracing::debug;

/// The engine for one project directory, loaded from disk.
pub struct Session {
    root: PathBuf,
    config: DepotConfig,
    engine: Engine,
}

impl Session {
    /// Open the project containing `cwd`: the nearest ancestor holding
    /// `depot.toml`, or `cwd` itself with default settings.
    pub fn open(cwd: &Path) -> miette::Result<Self> {
        let root = find_project_root(cwd, CONFIG_FILE).unwrap_or_else(|| cwd.to_path_buf());
        Self::open_at(&root)
    }

    /// Open the project rooted at `root`.
    pub fn open_at(root: &Path) -> miette::Result<Self> {
        let config = DepotConfig::load(root)?;

        let catalog_path = config.catalog_path(root);
        if !catalog_path.is_file() {
            return Err(DepotError::Catalog {
                message: format!("No catalog at {}", catalog_path.display()),
            }
            .into());
        }
        let catalog = catalog::load(&catalog_path)?;

        let state_path = config.state_path(root);
        let state = EngineState::load(&state_path)?;
        debug!(
            root = %root.display(),
            installed = state.installed.len(),
            history = state.history.len(),
            "session opened"
        );

        let engine = Engine::from_state(catalog, state).with_policy(config.resolver.upgrade_policy);
        Ok(Self {
            root: root.to_path_buf(),
            config,
            engine,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &DepotConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Write the engine state back to the configured state file.
    pub fn save(&self) -> miette::Result<()> {
        let path = self.config.state_path(&self.root);
        self.engine.state().save(&path)?;
        debug!(path = %path.display(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::config::UpgradePolicy;
    use depot_core::spec::PackageSpec;

    const CATALOG: &str = r#"
[[package]]
name = "C"
version = "1.0"

[[package]]
name = "B"
version = "1.0"
dependencies = ["C==1.0"]
"#;

    #[test]
    fn opens_from_subdirectory_and_persists() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("depot.toml"),
            "[resolver]\nupgrade-policy = \"strict\"\n",
        )
        .unwrap();
        std::fs::write(tmp.path().join("catalog.toml"), CATALOG).unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut session = Session::open(&nested).unwrap();
        assert_eq!(session.root(), tmp.path());
        assert_eq!(session.engine().policy(), UpgradePolicy::Strict);

        session
            .engine_mut()
            .install(&PackageSpec::any("B"))
            .unwrap();
        session.save().unwrap();
        assert!(tmp.path().join(".depot").join("state.json").is_file());

        let reopened = Session::open_at(tmp.path()).unwrap();
        assert_eq!(reopened.engine().installed_version("B"), Some("1.0"));
        assert_eq!(reopened.engine().installed_version("C"), Some("1.0"));
        assert_eq!(reopened.engine().history().len(), 1);
    }

    #[test]
    fn defaults_without_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("catalog.toml"), CATALOG).unwrap();

        let session = Session::open_at(tmp.path()).unwrap();
        assert_eq!(session.engine().policy(), UpgradePolicy::InPlace);
        assert!(session.engine().installed().is_empty());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Session::open_at(tmp.path()).is_err());
    }
}
