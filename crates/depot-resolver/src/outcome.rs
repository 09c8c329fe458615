//! Successful results of engine operations.

use std::fmt;

use crate::history::Replaced;

/// What an engine operation did. Failures are reported as
/// [`depot_util::errors::DepotError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The package and any missing dependencies were installed.
    Installed {
        name: String,
        version: String,
        added: Vec<String>,
        replaced: Vec<Replaced>,
    },
    /// The exact version is already installed.
    AlreadySatisfied { name: String, version: String },
    /// The package was removed.
    Removed { name: String, version: String },
    /// Removal requested for a package that is not installed.
    NotInstalled { name: String },
    /// The package moved to a newer version along with its update chain.
    Updated {
        name: String,
        from: String,
        to: String,
        chain: Vec<String>,
    },
    /// No version newer than the installed one is available.
    UpToDate { name: String, version: String },
    /// The most recent history entry was reversed.
    Undone { description: String },
    /// The most recent history entry was dropped without changing state.
    NotReversible { description: String },
}

impl Outcome {
    /// True for no-op results that changed nothing.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            Outcome::AlreadySatisfied { .. }
                | Outcome::NotInstalled { .. }
                | Outcome::UpToDate { .. }
                | Outcome::NotReversible { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Installed {
                name,
                version,
                added,
                replaced,
            } => {
                write!(f, "{name}=={version}")?;
                let deps: Vec<&String> = added.iter().filter(|a| *a != name).collect();
                if !deps.is_empty() {
                    let deps: Vec<&str> = deps.iter().map(|s| s.as_str()).collect();
                    write!(f, " (with {})", deps.join(", "))?;
                }
                for r in replaced.iter().filter(|r| &r.name != name) {
                    write!(f, " [{} was {}]", r.name, r.previous)?;
                }
                Ok(())
            }
            Outcome::AlreadySatisfied { name, version } => {
                write!(f, "{name}=={version} is already installed")
            }
            Outcome::Removed { name, version } => write!(f, "{name}=={version}"),
            Outcome::NotInstalled { name } => write!(f, "{name} is not installed"),
            Outcome::Updated {
                name,
                from,
                to,
                chain,
            } => {
                write!(f, "{name} {from} -> {to}")?;
                if chain.len() > 1 {
                    write!(f, " (chain: {})", chain.join(", "))?;
                }
                Ok(())
            }
            Outcome::UpToDate { name, version } => {
                write!(f, "no newer version of {name} (installed {version})")
            }
            Outcome::Undone { description } => f.write_str(description),
            Outcome::NotReversible { description } => f.write_str(description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn informational_classification() {
        assert!(Outcome::UpToDate {
            name: "A".into(),
            version: "1.0".into()
        }
        .is_informational());
        assert!(!Outcome::Removed {
            name: "A".into(),
            version: "1.0".into()
        }
        .is_informational());
    }

    #[test]
    fn installed_display_lists_pulled_in_dependencies() {
        let outcome = Outcome::Installed {
            name: "A".into(),
            version: "1.0".into(),
            added: vec!["C".into(), "B".into(), "A".into()],
            replaced: vec![],
        };
        assert_eq!(outcome.to_string(), "A==1.0 (with C, B)");
    }
}
