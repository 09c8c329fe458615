//! Operation: install packages or groups.

use depot_resolver::component::Component;
use depot_resolver::{Engine, Outcome};
use depot_util::errors::DepotError;
use tracing::warn;

use crate::CommandResult;

/// Options for `depot install`.
#[derive(Default)]
pub struct InstallOptions {
    /// Package specs (`name`, `name==version`) or group references (`@name`).
    pub specs: Vec<String>,
}

/// Install every requested spec in order. Either all of them succeed or the
/// engine is left exactly as it was.
pub fn install(engine: &mut Engine, opts: &InstallOptions) -> CommandResult<Vec<Outcome>> {
    let before = engine.snapshot();
    let result = install_all(engine, &opts.specs);
    if let Err(e) = &result {
        warn!(error = %e, "install aborted, restoring state");
        engine.restore(before);
    }
    result.into()
}

fn install_all(engine: &mut Engine, specs: &[String]) -> Result<Vec<Outcome>, DepotError> {
    let mut outcomes = Vec::new();
    for reference in specs {
        let component = Component::from_catalog(engine.catalog(), reference)?;
        outcomes.extend(component.install(engine)?);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::catalog::Catalog;

    fn engine() -> Engine {
        let mut c = Catalog::new();
        c.add_version("C", "1.0", &[] as &[&str]).unwrap();
        c.add_version("B", "1.0", &["C==1.0"]).unwrap();
        c.add_version("D", "1.0", &["C==1.0"]).unwrap();
        c.add_version("E", "1.0", &["C==2.0"]).unwrap();
        c.add_version("C", "2.0", &[] as &[&str]).unwrap();
        c.add_group("pair", vec!["B".to_string(), "D".to_string()]);
        Engine::new(c)
    }

    fn opts(specs: &[&str]) -> InstallOptions {
        InstallOptions {
            specs: specs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn installs_several_specs() {
        let mut engine = engine();
        let result = install(&mut engine, &opts(&["B", "D"]));
        assert!(result.is_success());
        assert_eq!(result.value().map(Vec::len), Some(2));
        assert_eq!(engine.installed().len(), 3);
    }

    #[test]
    fn installs_a_group() {
        let mut engine = engine();
        assert!(install(&mut engine, &opts(&["@pair"])).is_success());
        assert_eq!(engine.dependents_of("C"), vec!["B".to_string(), "D".to_string()]);
    }

    #[test]
    fn repeat_install_is_info() {
        let mut engine = engine();
        install(&mut engine, &opts(&["B"]));
        assert!(install(&mut engine, &opts(&["B==1.0"])).is_info());
    }

    #[test]
    fn failure_restores_earlier_specs() {
        let mut engine = engine();
        let result = install(&mut engine, &opts(&["B", "E"]));
        assert!(matches!(
            result.error(),
            Some(DepotError::VersionConflict { .. })
        ));
        assert!(engine.installed().is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn malformed_spec() {
        let mut engine = engine();
        let result = install(&mut engine, &opts(&["B==1.0==2"]));
        assert!(result.is_error());
    }
}
