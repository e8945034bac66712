use serde::{Deserialize, Serialize};
use strata_util::errors::StrataError;

/// A fully-qualified dependency coordinate parsed from `group:name:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleCoordinate {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ModuleCoordinate {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse `"group:name:version"` into a coordinate.
    ///
    /// All three parts must be present and non-empty.
    pub fn parse(s: &str) -> miette::Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(StrataError::InvalidArgument {
                message: format!("expected \"group:name:version\", got \"{s}\""),
            }
            .into());
        }
        Ok(Self {
            group: parts[0].to_string(),
            name: parts[1].to_string(),
            version: parts[2].to_string(),
        })
    }

    /// The `(group, name)` pair, without the version.
    pub fn id(&self) -> ModuleIdentifier {
        ModuleIdentifier {
            group: self.group.clone(),
            name: self.name.clone(),
        }
    }

    /// Whether this coordinate targets the given `(group, name)` pair.
    pub fn matches_id(&self, group: &str, name: &str) -> bool {
        self.group == group && self.name == name
    }
}

impl std::fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// A `(group, name)` pair identifying a module independent of version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleIdentifier {
    pub group: String,
    pub name: String,
}

impl std::fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}
