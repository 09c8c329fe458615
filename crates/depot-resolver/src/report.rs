//! Consistency reporting for the installed set.

use std::fmt;

/// A report of every inconsistency found by [`crate::engine::Engine::check`].
#[derive(Debug, Default)]
pub struct ConsistencyReport {
    pub issues: Vec<Issue>,
}

/// A single violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// An installed version the catalog does not know.
    UnknownVersion { package: String, version: String },
    /// A declared dependency that is not installed.
    MissingDependency { package: String, dependency: String },
    /// A pinned dependency installed at another version.
    PinMismatch {
        package: String,
        dependency: String,
        required: String,
        installed: String,
    },
    /// `dependent` declares `dependency` but the index does not record it.
    MissingReverseEdge { dependency: String, dependent: String },
    /// The index records `dependent` without a matching declaration.
    StaleReverseEdge { dependency: String, dependent: String },
}

impl ConsistencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "No inconsistencies.");
        }
        writeln!(f, "Inconsistencies ({}):", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  {issue}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::UnknownVersion { package, version } => {
                write!(f, "{package}=={version} is not in the catalog")
            }
            Issue::MissingDependency {
                package,
                dependency,
            } => write!(f, "{package} requires {dependency}, which is not installed"),
            Issue::PinMismatch {
                package,
                dependency,
                required,
                installed,
            } => write!(
                f,
                "{package} requires {dependency}=={required} but {installed} is installed"
            ),
            Issue::MissingReverseEdge {
                dependency,
                dependent,
            } => write!(f, "{dependent} -> {dependency} missing from reverse index"),
            Issue::StaleReverseEdge {
                dependency,
                dependent,
            } => write!(f, "{dependent} -> {dependency} in reverse index is stale"),
        }
    }
}
