//! Operation: update an installed package along with its update chain.

use depot_core::spec::PackageSpec;
use depot_resolver::engine::UpdatePlan;
use depot_resolver::{Engine, Outcome};

use crate::CommandResult;

/// Options for `depot update`.
#[derive(Default)]
pub struct UpdateOptions {
    /// `name` for the best available version, or `name==version`.
    pub spec: String,
    /// Show the update chain and blockers without changing anything.
    pub dry_run: bool,
}

/// What `depot update` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateReport {
    Applied(Outcome),
    Planned(UpdatePlan),
}

pub fn update(engine: &mut Engine, opts: &UpdateOptions) -> CommandResult<UpdateReport> {
    let spec = match PackageSpec::parse(&opts.spec) {
        Ok(spec) => spec,
        Err(e) => return CommandResult::Error(e),
    };

    if opts.dry_run {
        return match engine.plan_update(&spec) {
            Ok(plan) => CommandResult::Info(UpdateReport::Planned(plan)),
            Err(e) => CommandResult::Error(e),
        };
    }

    CommandResult::from(engine.update(&spec)).map(UpdateReport::Applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::catalog::Catalog;
    use depot_util::errors::DepotError;

    fn engine() -> Engine {
        let mut c = Catalog::new();
        c.add_version("C", "1.0", &[] as &[&str]).unwrap();
        c.add_version("C", "2.0", &[] as &[&str]).unwrap();
        c.add_version("B", "1.0", &["C==1.0"]).unwrap();
        c.add_version("B", "2.0", &["C==2.0"]).unwrap();
        let mut engine = Engine::new(c);
        engine.install(&PackageSpec::pinned("B", "1.0")).unwrap();
        engine
    }

    #[test]
    fn applies_update() {
        let mut engine = engine();
        let result = update(
            &mut engine,
            &UpdateOptions {
                spec: "B".to_string(),
                dry_run: false,
            },
        );
        assert!(result.is_success());
        assert_eq!(engine.installed_version("C"), Some("2.0"));
    }

    #[test]
    fn dry_run_leaves_engine_alone() {
        let mut engine = engine();
        let before = engine.snapshot();
        let result = update(
            &mut engine,
            &UpdateOptions {
                spec: "B".to_string(),
                dry_run: true,
            },
        );
        match result {
            CommandResult::Info(UpdateReport::Planned(plan)) => {
                assert_eq!(plan.to, "2.0");
                assert_eq!(plan.chain.len(), 2);
                assert!(plan.blockers.is_empty());
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn up_to_date_is_info() {
        let mut engine = engine();
        let opts = UpdateOptions {
            spec: "B".to_string(),
            dry_run: false,
        };
        update(&mut engine, &opts);
        assert!(update(&mut engine, &opts).is_info());
    }

    #[test]
    fn not_installed_is_error() {
        let mut engine = engine();
        let result = update(
            &mut engine,
            &UpdateOptions {
                spec: "Z".to_string(),
                dry_run: false,
            },
        );
        assert_eq!(
            result.error(),
            Some(&DepotError::NotInstalled {
                name: "Z".to_string()
            })
        );
    }
}
