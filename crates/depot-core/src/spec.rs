use std::fmt;
use std::str::FromStr;

use depot_util::errors::DepotError;
use serde::{Deserialize, Serialize};

/// A package reference: `name` (any version) or `name==version` (pinned).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageSpec {
    pub name: String,
    pub version: Option<String>,
}

impl PackageSpec {
    /// A spec that resolves to the best available version.
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// A spec pinned to an exact version.
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Parse `"name"` or `"name==version"`.
    pub fn parse(s: &str) -> Result<Self, DepotError> {
        let invalid = |reason: &str| DepotError::InvalidSpec {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let (name, version) = match s.split_once("==") {
            Some((name, version)) => {
                let version = version.trim();
                if version.is_empty() {
                    return Err(invalid("empty version after '=='"));
                }
                if version.contains("==") {
                    return Err(invalid("more than one '=='"));
                }
                (name.trim(), Some(version.to_string()))
            }
            None => (s.trim(), None),
        };

        if name.is_empty() {
            return Err(invalid("empty package name"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("package name contains whitespace"));
        }

        Ok(Self {
            name: name.to_string(),
            version,
        })
    }

    pub fn is_pinned(&self) -> bool {
        self.version.is_some()
    }
}

impl FromStr for PackageSpec {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}=={v}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
