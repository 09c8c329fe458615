use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depot operations.
///
/// Every engine failure leaves the installed state exactly as it was before
/// the call, so all of these are recoverable at the call boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DepotError {
    /// The package name is not present in the catalog at all.
    #[error("Package not found: {name}")]
    #[diagnostic(help("Check the package name against the catalog"))]
    PackageNotFound { name: String },

    /// The package exists but not at the requested version.
    #[error("Version unavailable: {name}=={version}")]
    VersionUnavailable { name: String, version: String },

    /// Another installed package pins the dependency at a different version.
    #[error(
        "Version conflict on {name}: {required_by} needs {requested} \
         but {installed} is installed ({reason})"
    )]
    #[diagnostic(help("Remove or update the package holding the other version first"))]
    VersionConflict {
        name: String,
        requested: String,
        installed: String,
        required_by: String,
        reason: String,
    },

    /// Removal refused because installed packages still require the target.
    #[error("Cannot remove {name}: required by {}", dependents.join(", "))]
    DependentsExist {
        name: String,
        dependents: Vec<String>,
    },

    /// An update chain would break a package outside the chain.
    #[error("Cannot update {name}: {blocker} requires {dependency}=={pinned}")]
    UpdateBlocked {
        name: String,
        blocker: String,
        dependency: String,
        pinned: String,
    },

    /// A package transitively depends on itself.
    #[error("Cyclic dependency: {}", chain.join(" -> "))]
    CyclicDependency { chain: Vec<String> },

    /// The operation needs the package to be installed.
    #[error("{name} is not installed")]
    NotInstalled { name: String },

    /// The operation history is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// A package reference could not be parsed.
    #[error("Invalid package spec '{spec}': {reason}")]
    #[diagnostic(help("Use `name` or `name==version`"))]
    InvalidSpec { spec: String, reason: String },

    /// I/O operation failed.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The catalog file could not be read or parsed.
    #[error("Catalog error: {message}")]
    #[diagnostic(help("Check catalog.toml for syntax errors"))]
    Catalog { message: String },

    /// The configuration file could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check depot.toml for syntax errors"))]
    Config { message: String },

    /// The persisted engine state could not be read or written.
    #[error("State error: {message}")]
    State { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl From<std::io::Error> for DepotError {
    fn from(err: std::io::Error) -> Self {
        DepotError::Io {
            message: err.to_string(),
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type DepotResult<T> = miette::Result<T>;
